use one_dto_mapper::{From, Into};
use shared_types::PersonnelId;
use time::OffsetDateTime;

use crate::model::personnel::{Personnel, PersonnelStatus, UpdatePersonnelRequest};

#[derive(Clone, Debug)]
pub struct CreatePersonnelRequestDTO {
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

#[derive(Clone, Debug, Into)]
#[into(UpdatePersonnelRequest)]
pub struct UpdatePersonnelRequestDTO {
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

#[derive(Clone, Debug, From)]
#[from(Personnel)]
pub struct PersonnelResponseDTO {
    pub id: PersonnelId,
    pub created_at: OffsetDateTime,
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
