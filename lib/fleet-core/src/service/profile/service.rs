use super::ProfileService;
use super::dto::ProfileResponseDTO;
use crate::model::auth::AuthContext;
use crate::service::error::{EntityNotFoundError, ServiceError};

impl ProfileService {
    /// The caller's own profile.
    pub async fn get_profile(&self, ctx: &AuthContext) -> Result<ProfileResponseDTO, ServiceError> {
        let id = ctx.user_id();

        let profile = self
            .profile_repository
            .get_profile(&id)
            .await?
            .ok_or(EntityNotFoundError::Profile(id))?;

        Ok(profile.into())
    }
}
