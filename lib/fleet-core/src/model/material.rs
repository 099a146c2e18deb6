use serde::{Deserialize, Serialize};
use shared_types::{MaterialId, UserId, VehicleId};
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Material {
    pub id: MaterialId,
    pub created_at: OffsetDateTime,
    pub user_id: UserId,
    pub name: String,
    pub material_type: String,
    pub quantity: u32,
    pub location: String,
    pub status: MaterialStatus,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    /// Vehicle the material is assigned to. Plain foreign key, cleared when
    /// the vehicle is deleted.
    pub vehicle_id: Option<VehicleId>,
    /// Set and cleared only through the verification tracker; survives
    /// unrelated edits untouched.
    pub is_verified: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
pub enum MaterialStatus {
    #[default]
    #[strum(serialize = "Opérationnel")]
    Operationnel,
    #[strum(serialize = "En maintenance")]
    EnMaintenance,
    #[strum(serialize = "Hors service")]
    HorsService,
}

/// Editable material fields. Assignment and the verified flag have dedicated
/// repository operations and are excluded here.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateMaterialRequest {
    pub id: MaterialId,
    pub name: String,
    pub material_type: String,
    pub quantity: u32,
    pub location: String,
    pub status: MaterialStatus,
    pub description: Option<String>,
    pub photo_url: Option<String>,
}
