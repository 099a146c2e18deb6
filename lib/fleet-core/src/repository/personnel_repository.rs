use shared_types::{PersonnelId, UserId};

use super::error::DataLayerError;
use crate::model::personnel::{Personnel, UpdatePersonnelRequest};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait PersonnelRepository: Send + Sync {
    async fn create_personnel(&self, request: Personnel) -> Result<PersonnelId, DataLayerError>;

    async fn get_personnel(
        &self,
        id: &PersonnelId,
        owner: UserId,
    ) -> Result<Option<Personnel>, DataLayerError>;

    /// Newest first.
    async fn get_personnel_list(&self, owner: UserId) -> Result<Vec<Personnel>, DataLayerError>;

    async fn update_personnel(
        &self,
        request: UpdatePersonnelRequest,
        owner: UserId,
    ) -> Result<(), DataLayerError>;

    async fn delete_personnel(&self, id: &PersonnelId, owner: UserId)
    -> Result<(), DataLayerError>;
}
