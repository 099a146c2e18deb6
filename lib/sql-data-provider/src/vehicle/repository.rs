use autometrics::autometrics;
use fleet_core::model::vehicle::{UpdateVehicleRequest, Vehicle, VerificationRecord};
use fleet_core::repository::error::DataLayerError;
use fleet_core::repository::vehicle_repository::VehicleRepository;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use shared_types::{UserId, VehicleId};

use super::VehicleProvider;
use crate::entity::vehicle;
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};

impl VehicleProvider {
    async fn find_scoped(
        &self,
        id: &VehicleId,
        owner: UserId,
    ) -> Result<Option<vehicle::Model>, DataLayerError> {
        vehicle::Entity::find_by_id(*id)
            .filter(vehicle::Column::UserId.eq(owner))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)
    }
}

#[autometrics]
#[async_trait::async_trait]
impl VehicleRepository for VehicleProvider {
    async fn create_vehicle(&self, request: Vehicle) -> Result<VehicleId, DataLayerError> {
        let vehicle = vehicle::Entity::insert(vehicle::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(vehicle.last_insert_id)
    }

    async fn get_vehicle(
        &self,
        id: &VehicleId,
        owner: UserId,
    ) -> Result<Option<Vehicle>, DataLayerError> {
        self.find_scoped(id, owner).await?.map(Vehicle::try_from).transpose()
    }

    async fn get_vehicle_list(&self, owner: UserId) -> Result<Vec<Vehicle>, DataLayerError> {
        let vehicles: Vec<vehicle::Model> = vehicle::Entity::find()
            .filter(vehicle::Column::UserId.eq(owner))
            .order_by_desc(vehicle::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        vehicles.into_iter().map(Vehicle::try_from).collect()
    }

    async fn update_vehicle(
        &self,
        request: UpdateVehicleRequest,
        owner: UserId,
    ) -> Result<(), DataLayerError> {
        let id = request.id;
        let result = vehicle::Entity::update_many()
            .set(vehicle::ActiveModel::from(request))
            .filter(vehicle::Column::Id.eq(id))
            .filter(vehicle::Column::UserId.eq(owner))
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        Ok(())
    }

    async fn update_verification(
        &self,
        id: &VehicleId,
        owner: UserId,
        record: VerificationRecord,
    ) -> Result<(), DataLayerError> {
        let result = vehicle::Entity::update_many()
            .set(vehicle::ActiveModel {
                verifier_id: Set(Some(record.verifier_id)),
                last_verified_at: Set(Some(record.verified_at)),
                verification_status: Set(Some(record.status.into())),
                ..Default::default()
            })
            .filter(vehicle::Column::Id.eq(*id))
            .filter(vehicle::Column::UserId.eq(owner))
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        Ok(())
    }

    async fn delete_vehicle(&self, id: &VehicleId, owner: UserId) -> Result<(), DataLayerError> {
        let result = vehicle::Entity::delete_many()
            .filter(vehicle::Column::Id.eq(*id))
            .filter(vehicle::Column::UserId.eq(owner))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        Ok(())
    }
}
