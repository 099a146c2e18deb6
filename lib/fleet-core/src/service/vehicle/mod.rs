use std::sync::Arc;

use crate::repository::material_repository::MaterialRepository;
use crate::repository::profile_repository::ProfileRepository;
use crate::repository::vehicle_repository::VehicleRepository;

pub mod dto;
mod mapper;
pub mod service;
pub(crate) mod validator;

#[derive(Clone)]
pub struct VehicleService {
    vehicle_repository: Arc<dyn VehicleRepository>,
    material_repository: Arc<dyn MaterialRepository>,
    profile_repository: Arc<dyn ProfileRepository>,
}

impl VehicleService {
    pub fn new(
        vehicle_repository: Arc<dyn VehicleRepository>,
        material_repository: Arc<dyn MaterialRepository>,
        profile_repository: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            vehicle_repository,
            material_repository,
            profile_repository,
        }
    }
}
