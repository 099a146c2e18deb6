use one_dto_mapper::Into;
use shared_types::{UserId, VehicleId};
use time::OffsetDateTime;

use crate::model::vehicle::{UpdateVehicleRequest, VehicleStatus, VerificationStatus};
use crate::service::material::dto::MaterialResponseDTO;

#[derive(Clone, Debug)]
pub struct CreateVehicleRequestDTO {
    pub name: String,
    pub vehicle_type: String,
    pub fire_station: String,
    pub plate_number: String,
    pub capacity: u32,
    pub equipment_list: Option<String>,
    pub status: VehicleStatus,
    pub photo_url: Option<String>,
    pub lien: Option<String>,
}

#[derive(Clone, Debug, Into)]
#[into(UpdateVehicleRequest)]
pub struct UpdateVehicleRequestDTO {
    pub id: VehicleId,
    pub name: String,
    pub vehicle_type: String,
    pub fire_station: String,
    pub plate_number: String,
    pub capacity: u32,
    pub equipment_list: Option<String>,
    pub status: VehicleStatus,
    pub photo_url: Option<String>,
    pub lien: Option<String>,
}

/// Listing entry; `last_verification` of `None` renders as "never verified".
#[derive(Clone, Debug)]
pub struct VehicleListItemResponseDTO {
    pub id: VehicleId,
    pub created_at: OffsetDateTime,
    pub name: String,
    pub vehicle_type: String,
    pub fire_station: String,
    pub plate_number: String,
    pub capacity: u32,
    pub equipment_list: Option<String>,
    pub status: VehicleStatus,
    pub photo_url: Option<String>,
    pub lien: Option<String>,
    pub last_verification: Option<VerificationSummaryDTO>,
}

/// Verified-by/when summary for display.
#[derive(Clone, Debug)]
pub struct VerificationSummaryDTO {
    pub status: VerificationStatus,
    pub verified_at: OffsetDateTime,
    pub verifier_id: UserId,
    /// `None` when the verifier's profile row no longer exists.
    pub verifier_username: Option<String>,
}

/// Detail view: the vehicle with its assigned materials and the live
/// verification progress over them.
#[derive(Clone, Debug)]
pub struct VehicleDetailResponseDTO {
    pub id: VehicleId,
    pub created_at: OffsetDateTime,
    pub name: String,
    pub vehicle_type: String,
    pub fire_station: String,
    pub plate_number: String,
    pub capacity: u32,
    pub equipment_list: Option<String>,
    pub status: VehicleStatus,
    pub photo_url: Option<String>,
    pub lien: Option<String>,
    pub last_verification: Option<VerificationSummaryDTO>,
    pub materials: Vec<MaterialResponseDTO>,
    pub progress: VerificationProgressDTO,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VerificationProgressDTO {
    pub verified_count: usize,
    pub total_count: usize,
    pub percentage: u8,
}
