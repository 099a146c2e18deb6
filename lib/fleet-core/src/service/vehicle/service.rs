use std::collections::HashMap;

use shared_types::{UserId, VehicleId};
use time::OffsetDateTime;

use super::VehicleService;
use super::dto::{
    CreateVehicleRequestDTO, UpdateVehicleRequestDTO, VehicleDetailResponseDTO,
    VehicleListItemResponseDTO,
};
use super::{mapper, validator};
use crate::model::auth::AuthContext;
use crate::model::profile::Profile;
use crate::model::vehicle::{VerificationRecord, VerificationStatus};
use crate::repository::error::DataLayerError;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};
use crate::util::verification;

impl VehicleService {
    /// Registers a new vehicle. The plate number is unique across the store;
    /// a collision is reported as a business error, not a raw store failure.
    pub async fn create_vehicle(
        &self,
        ctx: &AuthContext,
        request: CreateVehicleRequestDTO,
    ) -> Result<VehicleId, ServiceError> {
        validator::validate_required_fields(
            &request.name,
            &request.vehicle_type,
            &request.fire_station,
            &request.plate_number,
        )?;

        let plate_number = request.plate_number.clone();
        let vehicle = mapper::vehicle_from_create_request(request, ctx.user_id());

        match self.vehicle_repository.create_vehicle(vehicle).await {
            Ok(id) => Ok(id),
            Err(DataLayerError::AlreadyExists) => {
                Err(BusinessLogicError::PlateNumberAlreadyExists(plate_number).into())
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Detail view of one vehicle: its fields, its scoped material set and
    /// the live verification progress over that set.
    pub async fn get_vehicle(
        &self,
        ctx: &AuthContext,
        vehicle_id: &VehicleId,
    ) -> Result<VehicleDetailResponseDTO, ServiceError> {
        let owner = ctx.user_id();

        let vehicle = self
            .vehicle_repository
            .get_vehicle(vehicle_id, owner)
            .await?
            .ok_or(EntityNotFoundError::Vehicle(*vehicle_id))?;

        let materials = self
            .material_repository
            .get_materials_for_vehicle(vehicle_id, owner)
            .await?;

        let progress = verification::progress(&materials);

        let verifier = match &vehicle.last_verification {
            Some(record) => self.profile_repository.get_profile(&record.verifier_id).await?,
            None => None,
        };

        Ok(mapper::vehicle_to_detail(
            vehicle,
            verifier.as_ref(),
            materials,
            progress,
        ))
    }

    /// The caller's vehicles, newest first, with their last verification
    /// summaries and the verifier resolved to a profile username.
    pub async fn get_vehicle_list(
        &self,
        ctx: &AuthContext,
    ) -> Result<Vec<VehicleListItemResponseDTO>, ServiceError> {
        let vehicles = self
            .vehicle_repository
            .get_vehicle_list(ctx.user_id())
            .await?;

        // one profile lookup per distinct verifier
        let mut profiles: HashMap<UserId, Option<Profile>> = HashMap::new();

        let mut items = Vec::with_capacity(vehicles.len());
        for vehicle in vehicles {
            let verifier = match &vehicle.last_verification {
                Some(record) => {
                    if !profiles.contains_key(&record.verifier_id) {
                        let profile = self
                            .profile_repository
                            .get_profile(&record.verifier_id)
                            .await?;
                        profiles.insert(record.verifier_id, profile);
                    }
                    profiles[&record.verifier_id].as_ref()
                }
                None => None,
            };

            items.push(mapper::vehicle_to_list_item(vehicle, verifier));
        }

        Ok(items)
    }

    pub async fn update_vehicle(
        &self,
        ctx: &AuthContext,
        request: UpdateVehicleRequestDTO,
    ) -> Result<(), ServiceError> {
        validator::validate_required_fields(
            &request.name,
            &request.vehicle_type,
            &request.fire_station,
            &request.plate_number,
        )?;

        let id = request.id;
        let plate_number = request.plate_number.clone();

        self.vehicle_repository
            .update_vehicle(request.into(), ctx.user_id())
            .await
            .map_err(|error| match error {
                DataLayerError::RecordNotUpdated => EntityNotFoundError::Vehicle(id).into(),
                DataLayerError::AlreadyExists => {
                    BusinessLogicError::PlateNumberAlreadyExists(plate_number).into()
                }
                error => ServiceError::from(error),
            })
    }

    /// Deleting a vehicle leaves its materials in place; the store clears
    /// their assignment.
    pub async fn delete_vehicle(
        &self,
        ctx: &AuthContext,
        vehicle_id: &VehicleId,
    ) -> Result<(), ServiceError> {
        self.vehicle_repository
            .delete_vehicle(vehicle_id, ctx.user_id())
            .await
            .map_err(|error| match error {
                DataLayerError::RecordNotUpdated => {
                    EntityNotFoundError::Vehicle(*vehicle_id).into()
                }
                error => ServiceError::from(error),
            })
    }

    /// Concludes a verification pass: aggregates the current material set
    /// and persists the outcome with the verifier and a timestamp, in one
    /// all-or-nothing record write. Returns the outcome for user feedback.
    ///
    /// There is no retry and no concurrency guard; a failed write leaves the
    /// stored record untouched and concurrent passes are last-writer-wins.
    pub async fn record_verification(
        &self,
        ctx: &AuthContext,
        vehicle_id: &VehicleId,
    ) -> Result<VerificationStatus, ServiceError> {
        let owner = ctx.user_id();

        let vehicle = self
            .vehicle_repository
            .get_vehicle(vehicle_id, owner)
            .await?
            .ok_or(EntityNotFoundError::Vehicle(*vehicle_id))?;

        let materials = self
            .material_repository
            .get_materials_for_vehicle(vehicle_id, owner)
            .await?;

        let status = verification::aggregate(&materials);

        let record = VerificationRecord {
            verifier_id: owner,
            verified_at: OffsetDateTime::now_utc(),
            status,
        };

        self.vehicle_repository
            .update_verification(vehicle_id, owner, record)
            .await
            .map_err(|error| match error {
                DataLayerError::RecordNotUpdated => {
                    ServiceError::from(EntityNotFoundError::Vehicle(*vehicle_id))
                }
                error => ServiceError::from(error),
            })?;

        match status {
            VerificationStatus::Anomalie => {
                tracing::warn!("Vehicle {} verified: {status}", vehicle.id)
            }
            _ => tracing::info!("Vehicle {} verified: {status}", vehicle.id),
        }

        Ok(status)
    }
}
