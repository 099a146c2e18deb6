pub use sea_orm_migration::migrator::MigratorTrait;
use sea_orm_migration::prelude::*;

pub(crate) mod datatype;

mod m20250310_101500_initial;
mod m20250412_083010_add_verification_columns_to_vehicles;
mod m20250520_091200_materials_vehicle_id_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250310_101500_initial::Migration),
            Box::new(m20250412_083010_add_verification_columns_to_vehicles::Migration),
            Box::new(m20250520_091200_materials_vehicle_id_index::Migration),
        ]
    }
}
