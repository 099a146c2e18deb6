use fleet_core::model::vehicle::{
    UpdateVehicleRequest, Vehicle, VerificationRecord, VerificationStatus,
};
use fleet_core::repository::error::DataLayerError;
use sea_orm::Set;

use crate::entity::vehicle;

impl From<Vehicle> for vehicle::ActiveModel {
    fn from(value: Vehicle) -> Self {
        let (verifier_id, last_verified_at, verification_status) = match value.last_verification {
            Some(record) => (
                Some(record.verifier_id),
                Some(record.verified_at),
                Some(record.status.into()),
            ),
            None => (None, None, None),
        };

        Self {
            id: Set(value.id),
            created_at: Set(value.created_at),
            user_id: Set(value.user_id),
            name: Set(value.name),
            vehicle_type: Set(value.vehicle_type),
            fire_station: Set(value.fire_station),
            plate_number: Set(value.plate_number),
            capacity: Set(value.capacity),
            equipment_list: Set(value.equipment_list),
            status: Set(value.status.into()),
            photo_url: Set(value.photo_url),
            lien: Set(value.lien),
            verifier_id: Set(verifier_id),
            last_verified_at: Set(last_verified_at),
            verification_status: Set(verification_status),
        }
    }
}

/// Only editable columns get a `Set` value, everything else stays untouched
/// by the scoped update. The verification triple in particular is written
/// exclusively by [`VehicleRepository::update_verification`].
///
/// [`VehicleRepository::update_verification`]: fleet_core::repository::vehicle_repository::VehicleRepository::update_verification
impl From<UpdateVehicleRequest> for vehicle::ActiveModel {
    fn from(value: UpdateVehicleRequest) -> Self {
        Self {
            name: Set(value.name),
            vehicle_type: Set(value.vehicle_type),
            fire_station: Set(value.fire_station),
            plate_number: Set(value.plate_number),
            capacity: Set(value.capacity),
            equipment_list: Set(value.equipment_list),
            status: Set(value.status.into()),
            photo_url: Set(value.photo_url),
            lien: Set(value.lien),
            ..Default::default()
        }
    }
}

impl TryFrom<vehicle::Model> for Vehicle {
    type Error = DataLayerError;

    fn try_from(value: vehicle::Model) -> Result<Self, Self::Error> {
        let last_verification = match (
            value.verifier_id,
            value.last_verified_at,
            value.verification_status,
        ) {
            (None, None, None) => None,
            (Some(verifier_id), Some(verified_at), Some(status)) => Some(VerificationRecord {
                verifier_id,
                verified_at,
                status: VerificationStatus::from(status),
            }),
            // the triple is written atomically, a partial triple is corrupt
            _ => return Err(DataLayerError::MappingError),
        };

        Ok(Self {
            id: value.id,
            created_at: value.created_at,
            user_id: value.user_id,
            name: value.name,
            vehicle_type: value.vehicle_type,
            fire_station: value.fire_station,
            plate_number: value.plate_number,
            capacity: value.capacity,
            equipment_list: value.equipment_list,
            status: value.status.into(),
            photo_url: value.photo_url,
            lien: value.lien,
            last_verification,
        })
    }
}
