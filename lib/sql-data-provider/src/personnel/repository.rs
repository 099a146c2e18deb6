use autometrics::autometrics;
use fleet_core::model::personnel::{Personnel, UpdatePersonnelRequest};
use fleet_core::repository::error::DataLayerError;
use fleet_core::repository::personnel_repository::PersonnelRepository;
use one_dto_mapper::convert_inner;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use shared_types::{PersonnelId, UserId};

use super::PersonnelProvider;
use crate::entity::personnel;
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};

#[autometrics]
#[async_trait::async_trait]
impl PersonnelRepository for PersonnelProvider {
    async fn create_personnel(&self, request: Personnel) -> Result<PersonnelId, DataLayerError> {
        let personnel = personnel::Entity::insert(personnel::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(personnel.last_insert_id)
    }

    async fn get_personnel(
        &self,
        id: &PersonnelId,
        owner: UserId,
    ) -> Result<Option<Personnel>, DataLayerError> {
        let personnel = personnel::Entity::find_by_id(*id)
            .filter(personnel::Column::UserId.eq(owner))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(personnel))
    }

    async fn get_personnel_list(&self, owner: UserId) -> Result<Vec<Personnel>, DataLayerError> {
        let personnel: Vec<personnel::Model> = personnel::Entity::find()
            .filter(personnel::Column::UserId.eq(owner))
            .order_by_desc(personnel::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(personnel))
    }

    async fn update_personnel(
        &self,
        request: UpdatePersonnelRequest,
        owner: UserId,
    ) -> Result<(), DataLayerError> {
        let id = request.id;
        let result = personnel::Entity::update_many()
            .set(personnel::ActiveModel::from(request))
            .filter(personnel::Column::Id.eq(id))
            .filter(personnel::Column::UserId.eq(owner))
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        Ok(())
    }

    async fn delete_personnel(
        &self,
        id: &PersonnelId,
        owner: UserId,
    ) -> Result<(), DataLayerError> {
        let result = personnel::Entity::delete_many()
            .filter(personnel::Column::Id.eq(*id))
            .filter(personnel::Column::UserId.eq(owner))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        Ok(())
    }
}
