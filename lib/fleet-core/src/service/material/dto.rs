use one_dto_mapper::{From, Into};
use shared_types::{MaterialId, VehicleId};
use time::OffsetDateTime;

use crate::model::material::{Material, MaterialStatus, UpdateMaterialRequest};

#[derive(Clone, Debug)]
pub struct CreateMaterialRequestDTO {
    pub name: String,
    pub material_type: String,
    pub quantity: u32,
    pub location: String,
    pub status: MaterialStatus,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    /// Optional initial assignment, validated like a regular assignment.
    pub vehicle_id: Option<VehicleId>,
}

#[derive(Clone, Debug, Into)]
#[into(UpdateMaterialRequest)]
pub struct UpdateMaterialRequestDTO {
    pub id: MaterialId,
    pub name: String,
    pub material_type: String,
    pub quantity: u32,
    pub location: String,
    pub status: MaterialStatus,
    pub description: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Clone, Debug, From)]
#[from(Material)]
pub struct MaterialResponseDTO {
    pub id: MaterialId,
    pub created_at: OffsetDateTime,
    pub name: String,
    pub material_type: String,
    pub quantity: u32,
    pub location: String,
    pub status: MaterialStatus,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub vehicle_id: Option<VehicleId>,
    pub is_verified: bool,
}
