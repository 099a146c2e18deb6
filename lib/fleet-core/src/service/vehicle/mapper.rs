use one_dto_mapper::convert_inner;
use shared_types::UserId;
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::{
    CreateVehicleRequestDTO, VehicleDetailResponseDTO, VehicleListItemResponseDTO,
    VerificationProgressDTO, VerificationSummaryDTO,
};
use crate::model::material::Material;
use crate::model::profile::Profile;
use crate::model::vehicle::{Vehicle, VerificationRecord};
use crate::util::verification::VerificationProgress;

impl From<VerificationProgress> for VerificationProgressDTO {
    fn from(value: VerificationProgress) -> Self {
        Self {
            verified_count: value.verified_count,
            total_count: value.total_count,
            percentage: value.percentage(),
        }
    }
}

pub(super) fn vehicle_from_create_request(
    request: CreateVehicleRequestDTO,
    owner: UserId,
) -> Vehicle {
    Vehicle {
        id: Uuid::new_v4().into(),
        created_at: OffsetDateTime::now_utc(),
        user_id: owner,
        name: request.name,
        vehicle_type: request.vehicle_type,
        fire_station: request.fire_station,
        plate_number: request.plate_number,
        capacity: request.capacity,
        equipment_list: request.equipment_list,
        status: request.status,
        photo_url: request.photo_url,
        lien: request.lien,
        last_verification: None,
    }
}

fn verification_summary(
    record: &VerificationRecord,
    verifier: Option<&Profile>,
) -> VerificationSummaryDTO {
    VerificationSummaryDTO {
        status: record.status,
        verified_at: record.verified_at,
        verifier_id: record.verifier_id,
        verifier_username: verifier.map(|profile| profile.username.clone()),
    }
}

pub(super) fn vehicle_to_list_item(
    vehicle: Vehicle,
    verifier: Option<&Profile>,
) -> VehicleListItemResponseDTO {
    let last_verification = vehicle
        .last_verification
        .as_ref()
        .map(|record| verification_summary(record, verifier));

    VehicleListItemResponseDTO {
        id: vehicle.id,
        created_at: vehicle.created_at,
        name: vehicle.name,
        vehicle_type: vehicle.vehicle_type,
        fire_station: vehicle.fire_station,
        plate_number: vehicle.plate_number,
        capacity: vehicle.capacity,
        equipment_list: vehicle.equipment_list,
        status: vehicle.status,
        photo_url: vehicle.photo_url,
        lien: vehicle.lien,
        last_verification,
    }
}

pub(super) fn vehicle_to_detail(
    vehicle: Vehicle,
    verifier: Option<&Profile>,
    materials: Vec<Material>,
    progress: VerificationProgress,
) -> VehicleDetailResponseDTO {
    let last_verification = vehicle
        .last_verification
        .as_ref()
        .map(|record| verification_summary(record, verifier));

    VehicleDetailResponseDTO {
        id: vehicle.id,
        created_at: vehicle.created_at,
        name: vehicle.name,
        vehicle_type: vehicle.vehicle_type,
        fire_station: vehicle.fire_station,
        plate_number: vehicle.plate_number,
        capacity: vehicle.capacity,
        equipment_list: vehicle.equipment_list,
        status: vehicle.status,
        photo_url: vehicle.photo_url,
        lien: vehicle.lien,
        last_verification,
        materials: convert_inner(materials),
        progress: progress.into(),
    }
}
