use fleet_core::model::personnel::{Personnel, UpdatePersonnelRequest};
use sea_orm::Set;

use crate::entity::personnel;

impl From<Personnel> for personnel::ActiveModel {
    fn from(value: Personnel) -> Self {
        Self {
            id: Set(value.id),
            created_at: Set(value.created_at),
            user_id: Set(value.user_id),
            first_name: Set(value.first_name),
            last_name: Set(value.last_name),
            role: Set(value.role),
            contact_number: Set(value.contact_number),
            email: Set(value.email),
            fire_station: Set(value.fire_station),
            status: Set(value.status.into()),
            notes: Set(value.notes),
            photo_url: Set(value.photo_url),
        }
    }
}

impl From<UpdatePersonnelRequest> for personnel::ActiveModel {
    fn from(value: UpdatePersonnelRequest) -> Self {
        Self {
            first_name: Set(value.first_name),
            last_name: Set(value.last_name),
            role: Set(value.role),
            contact_number: Set(value.contact_number),
            email: Set(value.email),
            fire_station: Set(value.fire_station),
            status: Set(value.status.into()),
            notes: Set(value.notes),
            photo_url: Set(value.photo_url),
            ..Default::default()
        }
    }
}

impl From<personnel::Model> for Personnel {
    fn from(value: personnel::Model) -> Self {
        Self {
            id: value.id,
            created_at: value.created_at,
            user_id: value.user_id,
            first_name: value.first_name,
            last_name: value.last_name,
            role: value.role,
            contact_number: value.contact_number,
            email: value.email,
            fire_station: value.fire_station,
            status: value.status.into(),
            notes: value.notes,
            photo_url: value.photo_url,
        }
    }
}
