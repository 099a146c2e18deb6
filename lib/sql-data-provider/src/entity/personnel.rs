use fleet_core::model::personnel::PersonnelStatus as ModelPersonnelStatus;
use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::{PersonnelId, UserId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "personnel")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: PersonnelId,
    pub created_at: OffsetDateTime,
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub contact_number: String,
    pub email: String,
    pub fire_station: String,
    pub status: PersonnelStatus,
    pub notes: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, From, Into)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[from(ModelPersonnelStatus)]
#[into(ModelPersonnelStatus)]
pub enum PersonnelStatus {
    #[sea_orm(string_value = "Actif")]
    Actif,
    #[sea_orm(string_value = "En congé")]
    EnConge,
    #[sea_orm(string_value = "Inactif")]
    Inactif,
}
