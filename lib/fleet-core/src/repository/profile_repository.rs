use shared_types::UserId;

use super::error::DataLayerError;
use crate::model::profile::Profile;

/// Profiles are maintained by the account system; the core only reads them.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_profile(&self, id: &UserId) -> Result<Option<Profile>, DataLayerError>;
}
