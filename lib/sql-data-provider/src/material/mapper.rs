use fleet_core::model::material::{Material, UpdateMaterialRequest};
use sea_orm::Set;

use crate::entity::material;

impl From<Material> for material::ActiveModel {
    fn from(value: Material) -> Self {
        Self {
            id: Set(value.id),
            created_at: Set(value.created_at),
            user_id: Set(value.user_id),
            name: Set(value.name),
            material_type: Set(value.material_type),
            quantity: Set(value.quantity),
            location: Set(value.location),
            status: Set(value.status.into()),
            description: Set(value.description),
            photo_url: Set(value.photo_url),
            vehicle_id: Set(value.vehicle_id),
            is_verified: Set(value.is_verified),
        }
    }
}

/// Assignment and the verified flag are excluded on purpose; they have
/// dedicated repository operations.
impl From<UpdateMaterialRequest> for material::ActiveModel {
    fn from(value: UpdateMaterialRequest) -> Self {
        Self {
            name: Set(value.name),
            material_type: Set(value.material_type),
            quantity: Set(value.quantity),
            location: Set(value.location),
            status: Set(value.status.into()),
            description: Set(value.description),
            photo_url: Set(value.photo_url),
            ..Default::default()
        }
    }
}

impl From<material::Model> for Material {
    fn from(value: material::Model) -> Self {
        Self {
            id: value.id,
            created_at: value.created_at,
            user_id: value.user_id,
            name: value.name,
            material_type: value.material_type,
            quantity: value.quantity,
            location: value.location,
            status: value.status.into(),
            description: value.description,
            photo_url: value.photo_url,
            vehicle_id: value.vehicle_id,
            is_verified: value.is_verified,
        }
    }
}
