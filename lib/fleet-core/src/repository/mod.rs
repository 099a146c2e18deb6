pub mod error;

pub mod material_repository;
pub mod personnel_repository;
pub mod profile_repository;
pub mod vehicle_repository;

use std::sync::Arc;

use material_repository::MaterialRepository;
use personnel_repository::PersonnelRepository;
use profile_repository::ProfileRepository;
use vehicle_repository::VehicleRepository;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait DataRepository: Send + Sync {
    fn get_vehicle_repository(&self) -> Arc<dyn VehicleRepository>;
    fn get_material_repository(&self) -> Arc<dyn MaterialRepository>;
    fn get_personnel_repository(&self) -> Arc<dyn PersonnelRepository>;
    fn get_profile_repository(&self) -> Arc<dyn ProfileRepository>;
}
