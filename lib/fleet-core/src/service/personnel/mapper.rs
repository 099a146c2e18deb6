use shared_types::UserId;
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::CreatePersonnelRequestDTO;
use crate::model::personnel::Personnel;

pub(super) fn personnel_from_create_request(
    request: CreatePersonnelRequestDTO,
    owner: UserId,
) -> Personnel {
    Personnel {
        id: Uuid::new_v4().into(),
        created_at: OffsetDateTime::now_utc(),
        user_id: owner,
        first_name: request.first_name,
        last_name: request.last_name,
        role: request.role,
        contact_number: request.contact_number,
        email: request.email,
        fire_station: request.fire_station,
        status: request.status,
        notes: request.notes,
        photo_url: request.photo_url,
    }
}
