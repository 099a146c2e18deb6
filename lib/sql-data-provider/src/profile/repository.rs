use autometrics::autometrics;
use fleet_core::model::profile::Profile;
use fleet_core::repository::error::DataLayerError;
use fleet_core::repository::profile_repository::ProfileRepository;
use one_dto_mapper::convert_inner;
use sea_orm::EntityTrait;
use shared_types::UserId;

use super::ProfileProvider;
use crate::entity::profile;
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait::async_trait]
impl ProfileRepository for ProfileProvider {
    async fn get_profile(&self, id: &UserId) -> Result<Option<Profile>, DataLayerError> {
        let profile = profile::Entity::find_by_id(*id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(profile))
    }
}
