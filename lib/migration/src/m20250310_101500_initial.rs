use sea_orm_migration::prelude::*;

use crate::datatype::{timestamp, uuid_char, uuid_char_null};

#[derive(DeriveMigrationName)]
pub struct Migration;

const UNIQUE_VEHICLES_PLATE_NUMBER_INDEX: &str = "index-Vehicles-PlateNumber-Unique";
const MATERIALS_VEHICLE_ID_FK: &str = "fk-Materials-VehicleId";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(uuid_char(Profiles::Id).primary_key())
                    .col(ColumnDef::new(Profiles::Username).string().not_null())
                    .col(ColumnDef::new(Profiles::AvatarUrl).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(uuid_char(Vehicles::Id).primary_key())
                    .col(timestamp(Vehicles::CreatedAt, manager))
                    .col(uuid_char(Vehicles::UserId))
                    .col(ColumnDef::new(Vehicles::Name).string().not_null())
                    .col(ColumnDef::new(Vehicles::Type).string().not_null())
                    .col(ColumnDef::new(Vehicles::FireStation).string().not_null())
                    .col(ColumnDef::new(Vehicles::PlateNumber).string().not_null())
                    .col(ColumnDef::new(Vehicles::Capacity).unsigned().not_null())
                    .col(ColumnDef::new(Vehicles::EquipmentList).string().null())
                    .col(ColumnDef::new(Vehicles::Status).string().not_null())
                    .col(ColumnDef::new(Vehicles::PhotoUrl).string().null())
                    .col(ColumnDef::new(Vehicles::Lien).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_VEHICLES_PLATE_NUMBER_INDEX)
                    .table(Vehicles::Table)
                    .col(Vehicles::PlateNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Materials::Table)
                    .if_not_exists()
                    .col(uuid_char(Materials::Id).primary_key())
                    .col(timestamp(Materials::CreatedAt, manager))
                    .col(uuid_char(Materials::UserId))
                    .col(ColumnDef::new(Materials::Name).string().not_null())
                    .col(ColumnDef::new(Materials::Type).string().not_null())
                    .col(ColumnDef::new(Materials::Quantity).unsigned().not_null())
                    .col(ColumnDef::new(Materials::Location).string().not_null())
                    .col(ColumnDef::new(Materials::Status).string().not_null())
                    .col(ColumnDef::new(Materials::Description).string().null())
                    .col(ColumnDef::new(Materials::PhotoUrl).string().null())
                    .col(uuid_char_null(Materials::VehicleId))
                    .col(
                        ColumnDef::new(Materials::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(MATERIALS_VEHICLE_ID_FK)
                            .from(Materials::Table, Materials::VehicleId)
                            .to(Vehicles::Table, Vehicles::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Personnel::Table)
                    .if_not_exists()
                    .col(uuid_char(Personnel::Id).primary_key())
                    .col(timestamp(Personnel::CreatedAt, manager))
                    .col(uuid_char(Personnel::UserId))
                    .col(ColumnDef::new(Personnel::FirstName).string().not_null())
                    .col(ColumnDef::new(Personnel::LastName).string().not_null())
                    .col(ColumnDef::new(Personnel::Role).string().not_null())
                    .col(ColumnDef::new(Personnel::ContactNumber).string().not_null())
                    .col(ColumnDef::new(Personnel::Email).string().not_null())
                    .col(ColumnDef::new(Personnel::FireStation).string().not_null())
                    .col(ColumnDef::new(Personnel::Status).string().not_null())
                    .col(ColumnDef::new(Personnel::Notes).string().null())
                    .col(ColumnDef::new(Personnel::PhotoUrl).string().null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
pub enum Profiles {
    Table,
    Id,
    Username,
    AvatarUrl,
}

#[derive(Iden)]
pub enum Vehicles {
    Table,
    Id,
    CreatedAt,
    UserId,
    Name,
    Type,
    FireStation,
    PlateNumber,
    Capacity,
    EquipmentList,
    Status,
    PhotoUrl,
    Lien,
}

#[derive(Iden)]
pub enum Materials {
    Table,
    Id,
    CreatedAt,
    UserId,
    Name,
    Type,
    Quantity,
    Location,
    Status,
    Description,
    PhotoUrl,
    VehicleId,
    IsVerified,
}

#[derive(Iden)]
pub enum Personnel {
    Table,
    Id,
    CreatedAt,
    UserId,
    FirstName,
    LastName,
    Role,
    ContactNumber,
    Email,
    FireStation,
    Status,
    Notes,
    PhotoUrl,
}
