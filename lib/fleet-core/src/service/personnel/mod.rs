use std::sync::Arc;

use crate::repository::personnel_repository::PersonnelRepository;

pub mod dto;
mod mapper;
pub mod service;

#[derive(Clone)]
pub struct PersonnelService {
    personnel_repository: Arc<dyn PersonnelRepository>,
}

impl PersonnelService {
    pub fn new(personnel_repository: Arc<dyn PersonnelRepository>) -> Self {
        Self {
            personnel_repository,
        }
    }
}
