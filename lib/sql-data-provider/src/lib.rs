use std::sync::Arc;

use fleet_core::repository::DataRepository;
use fleet_core::repository::material_repository::MaterialRepository;
use fleet_core::repository::personnel_repository::PersonnelRepository;
use fleet_core::repository::profile_repository::ProfileRepository;
use fleet_core::repository::vehicle_repository::VehicleRepository;
use material::MaterialProvider;
use migration::{Migrator, MigratorTrait};
use personnel::PersonnelProvider;
use profile::ProfileProvider;
use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
use vehicle::VehicleProvider;

mod entity;
mod mapper;

pub mod material;
pub mod personnel;
pub mod profile;
pub mod vehicle;

#[cfg(test)]
pub mod test_utilities;

#[derive(Clone)]
pub struct DataLayer {
    // Used directly by provider tests
    #[allow(unused)]
    db: DatabaseConnection,
    vehicle_repository: Arc<dyn VehicleRepository>,
    material_repository: Arc<dyn MaterialRepository>,
    personnel_repository: Arc<dyn PersonnelRepository>,
    profile_repository: Arc<dyn ProfileRepository>,
}

impl DataLayer {
    pub fn build(db: DatabaseConnection) -> Self {
        Self {
            vehicle_repository: Arc::new(VehicleProvider { db: db.clone() }),
            material_repository: Arc::new(MaterialProvider { db: db.clone() }),
            personnel_repository: Arc::new(PersonnelProvider { db: db.clone() }),
            profile_repository: Arc::new(ProfileProvider { db: db.clone() }),
            db,
        }
    }
}

pub async fn db_conn(database_url: impl Into<ConnectOptions>) -> Result<DatabaseConnection, DbErr> {
    let db = sea_orm::Database::connect(database_url).await?;

    tracing::debug!("Running database migrations");
    Migrator::up(&db, None).await?;

    Ok(db)
}

impl DataRepository for DataLayer {
    fn get_vehicle_repository(&self) -> Arc<dyn VehicleRepository> {
        self.vehicle_repository.clone()
    }

    fn get_material_repository(&self) -> Arc<dyn MaterialRepository> {
        self.material_repository.clone()
    }

    fn get_personnel_repository(&self) -> Arc<dyn PersonnelRepository> {
        self.personnel_repository.clone()
    }

    fn get_profile_repository(&self) -> Arc<dyn ProfileRepository> {
        self.profile_repository.clone()
    }
}
