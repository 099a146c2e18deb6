use fleet_core::model::material::MaterialStatus as ModelMaterialStatus;
use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::{MaterialId, UserId, VehicleId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "materials")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: MaterialId,
    pub created_at: OffsetDateTime,
    pub user_id: UserId,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub material_type: String,
    pub quantity: u32,
    pub location: String,
    pub status: MaterialStatus,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub vehicle_id: Option<VehicleId>,
    pub is_verified: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "Column::VehicleId",
        to = "super::vehicle::Column::Id",
        on_delete = "SetNull",
        on_update = "Restrict"
    )]
    Vehicle,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, From, Into)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[from(ModelMaterialStatus)]
#[into(ModelMaterialStatus)]
pub enum MaterialStatus {
    #[sea_orm(string_value = "Opérationnel")]
    Operationnel,
    #[sea_orm(string_value = "En maintenance")]
    EnMaintenance,
    #[sea_orm(string_value = "Hors service")]
    HorsService,
}
