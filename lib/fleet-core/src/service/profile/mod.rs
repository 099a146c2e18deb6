use std::sync::Arc;

use crate::repository::profile_repository::ProfileRepository;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct ProfileService {
    profile_repository: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(profile_repository: Arc<dyn ProfileRepository>) -> Self {
        Self { profile_repository }
    }
}

#[cfg(test)]
mod test;
