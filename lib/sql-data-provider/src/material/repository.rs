use autometrics::autometrics;
use fleet_core::model::material::{Material, UpdateMaterialRequest};
use fleet_core::repository::error::DataLayerError;
use fleet_core::repository::material_repository::MaterialRepository;
use one_dto_mapper::convert_inner;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use shared_types::{MaterialId, UserId, VehicleId};

use super::MaterialProvider;
use crate::entity::material;
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};

impl MaterialProvider {
    async fn update_scoped(
        &self,
        id: &MaterialId,
        owner: UserId,
        values: material::ActiveModel,
    ) -> Result<(), DataLayerError> {
        let result = material::Entity::update_many()
            .set(values)
            .filter(material::Column::Id.eq(*id))
            .filter(material::Column::UserId.eq(owner))
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        Ok(())
    }
}

#[autometrics]
#[async_trait::async_trait]
impl MaterialRepository for MaterialProvider {
    async fn create_material(&self, request: Material) -> Result<MaterialId, DataLayerError> {
        let material = material::Entity::insert(material::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(material.last_insert_id)
    }

    async fn get_material(
        &self,
        id: &MaterialId,
        owner: UserId,
    ) -> Result<Option<Material>, DataLayerError> {
        let material = material::Entity::find_by_id(*id)
            .filter(material::Column::UserId.eq(owner))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(material))
    }

    async fn get_material_list(&self, owner: UserId) -> Result<Vec<Material>, DataLayerError> {
        let materials: Vec<material::Model> = material::Entity::find()
            .filter(material::Column::UserId.eq(owner))
            .order_by_desc(material::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(materials))
    }

    async fn get_materials_for_vehicle(
        &self,
        vehicle_id: &VehicleId,
        owner: UserId,
    ) -> Result<Vec<Material>, DataLayerError> {
        let materials: Vec<material::Model> = material::Entity::find()
            .filter(material::Column::VehicleId.eq(*vehicle_id))
            .filter(material::Column::UserId.eq(owner))
            .order_by_desc(material::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(materials))
    }

    async fn update_material(
        &self,
        request: UpdateMaterialRequest,
        owner: UserId,
    ) -> Result<(), DataLayerError> {
        let id = request.id;
        self.update_scoped(&id, owner, material::ActiveModel::from(request))
            .await
    }

    async fn set_vehicle(
        &self,
        id: &MaterialId,
        owner: UserId,
        vehicle_id: Option<VehicleId>,
    ) -> Result<(), DataLayerError> {
        self.update_scoped(
            id,
            owner,
            material::ActiveModel {
                vehicle_id: Set(vehicle_id),
                ..Default::default()
            },
        )
        .await
    }

    async fn set_verified(
        &self,
        id: &MaterialId,
        owner: UserId,
        verified: bool,
    ) -> Result<(), DataLayerError> {
        self.update_scoped(
            id,
            owner,
            material::ActiveModel {
                is_verified: Set(verified),
                ..Default::default()
            },
        )
        .await
    }

    async fn delete_material(&self, id: &MaterialId, owner: UserId) -> Result<(), DataLayerError> {
        let result = material::Entity::delete_many()
            .filter(material::Column::Id.eq(*id))
            .filter(material::Column::UserId.eq(owner))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        Ok(())
    }
}
