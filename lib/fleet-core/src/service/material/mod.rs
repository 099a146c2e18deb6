use std::sync::Arc;

use crate::repository::material_repository::MaterialRepository;
use crate::repository::vehicle_repository::VehicleRepository;

pub mod dto;
mod mapper;
pub mod service;
pub(crate) mod validator;

#[derive(Clone)]
pub struct MaterialService {
    material_repository: Arc<dyn MaterialRepository>,
    vehicle_repository: Arc<dyn VehicleRepository>,
}

impl MaterialService {
    pub fn new(
        material_repository: Arc<dyn MaterialRepository>,
        vehicle_repository: Arc<dyn VehicleRepository>,
    ) -> Self {
        Self {
            material_repository,
            vehicle_repository,
        }
    }
}

#[cfg(test)]
mod test;
