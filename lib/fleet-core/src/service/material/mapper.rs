use shared_types::UserId;
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::CreateMaterialRequestDTO;
use crate::model::material::Material;

pub(super) fn material_from_create_request(
    request: CreateMaterialRequestDTO,
    owner: UserId,
) -> Material {
    Material {
        id: Uuid::new_v4().into(),
        created_at: OffsetDateTime::now_utc(),
        user_id: owner,
        name: request.name,
        material_type: request.material_type,
        quantity: request.quantity,
        location: request.location,
        status: request.status,
        description: request.description,
        photo_url: request.photo_url,
        vehicle_id: request.vehicle_id,
        is_verified: false,
    }
}
