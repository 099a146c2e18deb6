use sea_orm_migration::prelude::*;

use crate::m20250310_101500_initial::Materials;

#[derive(DeriveMigrationName)]
pub struct Migration;

const MATERIALS_VEHICLE_ID_INDEX: &str = "index-Materials-VehicleId";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(MATERIALS_VEHICLE_ID_INDEX)
                    .table(Materials::Table)
                    .col(Materials::VehicleId)
                    .to_owned(),
            )
            .await
    }
}
