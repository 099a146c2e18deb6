use serde::{Deserialize, Serialize};
use shared_types::{PersonnelId, UserId};
use time::OffsetDateTime;

/// Station member record. Pure data, not involved in verification logic.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Personnel {
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

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
pub enum PersonnelStatus {
    #[default]
    #[strum(serialize = "Actif")]
    Actif,
    #[strum(serialize = "En congé")]
    EnConge,
    #[strum(serialize = "Inactif")]
    Inactif,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdatePersonnelRequest {
    pub id: PersonnelId,
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
