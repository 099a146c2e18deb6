//! Domain core of the fleet verification system: vehicles, their assigned
//! materials and the verification workflow that aggregates per-material
//! flags into a recorded vehicle status.
//!
//! Persistence is abstracted behind [`repository::DataRepository`]; the
//! sql-data-provider crate supplies the sea-orm implementation.

pub mod model;
pub mod repository;
pub mod service;
pub mod util;

use std::sync::Arc;

use repository::DataRepository;
use service::material::MaterialService;
use service::personnel::PersonnelService;
use service::profile::ProfileService;
use service::vehicle::VehicleService;

#[derive(Clone)]
pub struct FleetCore {
    pub vehicle_service: VehicleService,
    pub material_service: MaterialService,
    pub personnel_service: PersonnelService,
    pub profile_service: ProfileService,
}

impl FleetCore {
    pub fn new(data_provider: Arc<dyn DataRepository>) -> Self {
        let vehicle_repository = data_provider.get_vehicle_repository();
        let material_repository = data_provider.get_material_repository();

        Self {
            vehicle_service: VehicleService::new(
                vehicle_repository.clone(),
                material_repository.clone(),
                data_provider.get_profile_repository(),
            ),
            material_service: MaterialService::new(material_repository, vehicle_repository),
            personnel_service: PersonnelService::new(data_provider.get_personnel_repository()),
            profile_service: ProfileService::new(data_provider.get_profile_repository()),
        }
    }
}
