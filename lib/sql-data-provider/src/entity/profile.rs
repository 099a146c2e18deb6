use fleet_core::model::profile::Profile;
use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::UserId;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, From, Into)]
#[from(Profile)]
#[into(Profile)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: UserId,
    pub username: String,
    pub avatar_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
