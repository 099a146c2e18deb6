use one_dto_mapper::convert_inner;
use shared_types::{MaterialId, VehicleId};

use super::MaterialService;
use super::dto::{CreateMaterialRequestDTO, MaterialResponseDTO, UpdateMaterialRequestDTO};
use super::{mapper, validator};
use crate::model::auth::AuthContext;
use crate::repository::error::DataLayerError;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};

impl MaterialService {
    /// Registers a new material, optionally assigned to a vehicle from the
    /// start. The flag starts unverified.
    pub async fn create_material(
        &self,
        ctx: &AuthContext,
        request: CreateMaterialRequestDTO,
    ) -> Result<MaterialId, ServiceError> {
        validator::validate_create_request(&request)?;

        if let Some(vehicle_id) = request.vehicle_id {
            self.require_owned_vehicle(ctx, &vehicle_id).await?;
        }

        let material = mapper::material_from_create_request(request, ctx.user_id());
        let id = self.material_repository.create_material(material).await?;

        Ok(id)
    }

    /// Returns the caller's materials, newest first.
    pub async fn get_material_list(
        &self,
        ctx: &AuthContext,
    ) -> Result<Vec<MaterialResponseDTO>, ServiceError> {
        let materials = self
            .material_repository
            .get_material_list(ctx.user_id())
            .await?;

        Ok(convert_inner(materials))
    }

    /// The material set of one vehicle, scoped to the caller.
    pub async fn get_materials_for_vehicle(
        &self,
        ctx: &AuthContext,
        vehicle_id: &VehicleId,
    ) -> Result<Vec<MaterialResponseDTO>, ServiceError> {
        let materials = self
            .material_repository
            .get_materials_for_vehicle(vehicle_id, ctx.user_id())
            .await?;

        Ok(convert_inner(materials))
    }

    /// Sets or clears a material's assignment. Only `vehicle_id` changes;
    /// the verified flag and every other field stay as they are.
    pub async fn assign_to_vehicle(
        &self,
        ctx: &AuthContext,
        material_id: &MaterialId,
        vehicle_id: Option<VehicleId>,
    ) -> Result<(), ServiceError> {
        let owner = ctx.user_id();

        let material = self
            .material_repository
            .get_material(material_id, owner)
            .await?
            .ok_or(EntityNotFoundError::Material(*material_id))?;

        if let Some(vehicle_id) = vehicle_id {
            let vehicle = self
                .vehicle_repository
                .get_vehicle(&vehicle_id, owner)
                .await?
                .ok_or(EntityNotFoundError::Vehicle(vehicle_id))?;

            // owner equality across the two collections is not a store
            // constraint, so it is validated here before accepting the link
            if vehicle.user_id != material.user_id {
                return Err(BusinessLogicError::OwnershipMismatch {
                    material: material.id,
                    vehicle: vehicle.id,
                }
                .into());
            }
        }

        self.material_repository
            .set_vehicle(material_id, owner, vehicle_id)
            .await
            .map_err(|error| match error {
                DataLayerError::RecordNotUpdated => {
                    EntityNotFoundError::Material(*material_id).into()
                }
                error => ServiceError::from(error),
            })
    }

    /// Flips the verified flag of exactly one material and returns the new
    /// value. Never writes vehicle state; the stored aggregate only changes
    /// on an explicit validation.
    pub async fn toggle_verified(
        &self,
        ctx: &AuthContext,
        material_id: &MaterialId,
    ) -> Result<bool, ServiceError> {
        let owner = ctx.user_id();

        let material = self
            .material_repository
            .get_material(material_id, owner)
            .await?
            .ok_or(EntityNotFoundError::Material(*material_id))?;

        let verified = !material.is_verified;

        self.material_repository
            .set_verified(material_id, owner, verified)
            .await
            .map_err(|error| match error {
                DataLayerError::RecordNotUpdated => {
                    ServiceError::from(EntityNotFoundError::Material(*material_id))
                }
                error => ServiceError::from(error),
            })?;

        tracing::info!(
            "Material {} marked {}",
            material.id,
            if verified { "verified" } else { "unverified" }
        );

        Ok(verified)
    }

    /// Edits descriptive fields. Assignment and the verified flag are
    /// untouched by design of the update request.
    pub async fn update_material(
        &self,
        ctx: &AuthContext,
        request: UpdateMaterialRequestDTO,
    ) -> Result<(), ServiceError> {
        validator::validate_update_request(&request)?;

        let id = request.id;
        self.material_repository
            .update_material(request.into(), ctx.user_id())
            .await
            .map_err(|error| match error {
                DataLayerError::RecordNotUpdated => EntityNotFoundError::Material(id).into(),
                error => ServiceError::from(error),
            })
    }

    pub async fn delete_material(
        &self,
        ctx: &AuthContext,
        material_id: &MaterialId,
    ) -> Result<(), ServiceError> {
        self.material_repository
            .delete_material(material_id, ctx.user_id())
            .await
            .map_err(|error| match error {
                DataLayerError::RecordNotUpdated => {
                    EntityNotFoundError::Material(*material_id).into()
                }
                error => ServiceError::from(error),
            })
    }

    async fn require_owned_vehicle(
        &self,
        ctx: &AuthContext,
        vehicle_id: &VehicleId,
    ) -> Result<(), ServiceError> {
        self.vehicle_repository
            .get_vehicle(vehicle_id, ctx.user_id())
            .await?
            .ok_or(EntityNotFoundError::Vehicle(*vehicle_id))?;

        Ok(())
    }
}
