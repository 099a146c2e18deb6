use fleet_core::model::vehicle::{
    VehicleStatus as ModelVehicleStatus, VerificationStatus as ModelVerificationStatus,
};
use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::{UserId, VehicleId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: VehicleId,
    pub created_at: OffsetDateTime,
    pub user_id: UserId,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub vehicle_type: String,
    pub fire_station: String,
    pub plate_number: String,
    pub capacity: u32,
    pub equipment_list: Option<String>,
    pub status: VehicleStatus,
    pub photo_url: Option<String>,
    pub lien: Option<String>,
    pub verifier_id: Option<UserId>,
    pub last_verified_at: Option<OffsetDateTime>,
    pub verification_status: Option<VerificationStatus>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::material::Entity")]
    Material,
}

impl Related<super::material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Material.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, From, Into)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[from(ModelVehicleStatus)]
#[into(ModelVehicleStatus)]
pub enum VehicleStatus {
    #[sea_orm(string_value = "Opérationnel")]
    Operationnel,
    #[sea_orm(string_value = "En maintenance")]
    EnMaintenance,
    #[sea_orm(string_value = "Hors service")]
    HorsService,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, From, Into)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[from(ModelVerificationStatus)]
#[into(ModelVerificationStatus)]
pub enum VerificationStatus {
    #[sea_orm(string_value = "OK")]
    Ok,
    #[sea_orm(string_value = "Anomalie")]
    Anomalie,
    #[sea_orm(string_value = "Non applicable")]
    NonApplicable,
}
