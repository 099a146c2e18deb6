use shared_types::{UserId, VehicleId};

use super::error::DataLayerError;
use crate::model::vehicle::{UpdateVehicleRequest, Vehicle, VerificationRecord};

/// All reads and writes are scoped to the owning user; a row owned by
/// somebody else behaves exactly like a missing row.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn create_vehicle(&self, request: Vehicle) -> Result<VehicleId, DataLayerError>;

    async fn get_vehicle(
        &self,
        id: &VehicleId,
        owner: UserId,
    ) -> Result<Option<Vehicle>, DataLayerError>;

    /// Newest first.
    async fn get_vehicle_list(&self, owner: UserId) -> Result<Vec<Vehicle>, DataLayerError>;

    async fn update_vehicle(
        &self,
        request: UpdateVehicleRequest,
        owner: UserId,
    ) -> Result<(), DataLayerError>;

    /// Writes the whole verification triple in a single record update.
    async fn update_verification(
        &self,
        id: &VehicleId,
        owner: UserId,
        record: VerificationRecord,
    ) -> Result<(), DataLayerError>;

    async fn delete_vehicle(&self, id: &VehicleId, owner: UserId) -> Result<(), DataLayerError>;
}
