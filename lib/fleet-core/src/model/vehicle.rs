use serde::{Deserialize, Serialize};
use shared_types::{UserId, VehicleId};
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub created_at: OffsetDateTime,
    pub user_id: UserId,
    pub name: String,
    pub vehicle_type: String,
    pub fire_station: String,
    pub plate_number: String,
    pub capacity: u32,
    pub equipment_list: Option<String>,
    pub status: VehicleStatus,
    pub photo_url: Option<String>,
    pub lien: Option<String>,
    /// Result of the last verification pass. `None` means the vehicle was
    /// never verified; the three underlying store columns are set together.
    pub last_verification: Option<VerificationRecord>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
pub enum VehicleStatus {
    #[default]
    #[strum(serialize = "Opérationnel")]
    Operationnel,
    #[strum(serialize = "En maintenance")]
    EnMaintenance,
    #[strum(serialize = "Hors service")]
    HorsService,
}

/// Aggregate outcome of a verification pass. The display strings are the
/// exact values persisted by the store.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
pub enum VerificationStatus {
    #[strum(serialize = "OK")]
    Ok,
    #[strum(serialize = "Anomalie")]
    Anomalie,
    #[strum(serialize = "Non applicable")]
    NonApplicable,
}

/// Audit record of who verified a vehicle, when and with what outcome.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VerificationRecord {
    pub verifier_id: UserId,
    pub verified_at: OffsetDateTime,
    pub status: VerificationStatus,
}

/// Editable vehicle fields. Verification metadata is deliberately absent,
/// only `VehicleRepository::update_verification` may write it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateVehicleRequest {
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
