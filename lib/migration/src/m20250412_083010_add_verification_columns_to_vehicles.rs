use sea_orm_migration::prelude::*;

use crate::datatype::{timestamp_null, uuid_char_null};
use crate::m20250310_101500_initial::Vehicles;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Vehicles::Table)
                    .add_column(uuid_char_null(VehicleVerification::VerifierId))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Vehicles::Table)
                    .add_column(timestamp_null(
                        VehicleVerification::LastVerifiedAt,
                        manager,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Vehicles::Table)
                    .add_column(
                        ColumnDef::new(VehicleVerification::VerificationStatus)
                            .string()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
pub enum VehicleVerification {
    VerifierId,
    LastVerifiedAt,
    VerificationStatus,
}
