use shared_types::{MaterialId, UserId, VehicleId};

use super::error::DataLayerError;
use crate::model::material::{Material, UpdateMaterialRequest};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait MaterialRepository: Send + Sync {
    async fn create_material(&self, request: Material) -> Result<MaterialId, DataLayerError>;

    async fn get_material(
        &self,
        id: &MaterialId,
        owner: UserId,
    ) -> Result<Option<Material>, DataLayerError>;

    /// Newest first.
    async fn get_material_list(&self, owner: UserId) -> Result<Vec<Material>, DataLayerError>;

    /// Materials assigned to the given vehicle, scoped additionally to the
    /// owner. Never returns another owner's materials even if `vehicle_id`
    /// matches by coincidence.
    async fn get_materials_for_vehicle(
        &self,
        vehicle_id: &VehicleId,
        owner: UserId,
    ) -> Result<Vec<Material>, DataLayerError>;

    async fn update_material(
        &self,
        request: UpdateMaterialRequest,
        owner: UserId,
    ) -> Result<(), DataLayerError>;

    /// Sets or clears the assignment; touches no other field.
    async fn set_vehicle(
        &self,
        id: &MaterialId,
        owner: UserId,
        vehicle_id: Option<VehicleId>,
    ) -> Result<(), DataLayerError>;

    /// Persists the verified flag; touches no other field.
    async fn set_verified(
        &self,
        id: &MaterialId,
        owner: UserId,
        verified: bool,
    ) -> Result<(), DataLayerError>;

    async fn delete_material(&self, id: &MaterialId, owner: UserId) -> Result<(), DataLayerError>;
}
