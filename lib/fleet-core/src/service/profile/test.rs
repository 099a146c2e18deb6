use std::sync::Arc;

use mockall::predicate::*;
use shared_types::UserId;
use uuid::Uuid;

use super::ProfileService;
use crate::model::auth::AuthContext;
use crate::model::profile::Profile;
use crate::repository::profile_repository::MockProfileRepository;
use crate::service::error::{EntityNotFoundError, ServiceError};

fn auth_context() -> AuthContext {
    AuthContext::from_session(Some(UserId::from(Uuid::new_v4()))).unwrap()
}

#[tokio::test]
async fn test_get_profile_success() {
    let ctx = auth_context();
    let owner = ctx.user_id();

    let mut profile_repository = MockProfileRepository::default();
    profile_repository
        .expect_get_profile()
        .times(1)
        .with(eq(owner))
        .returning(|id| {
            Ok(Some(Profile {
                id: *id,
                username: "caporal77".to_string(),
                avatar_url: None,
            }))
        });

    let service = ProfileService::new(Arc::new(profile_repository));

    let profile = service.get_profile(&ctx).await.unwrap();
    assert_eq!(profile.id, owner);
    assert_eq!(profile.username, "caporal77");
}

#[tokio::test]
async fn test_get_profile_missing_row() {
    let ctx = auth_context();

    let mut profile_repository = MockProfileRepository::default();
    profile_repository
        .expect_get_profile()
        .times(1)
        .returning(|_| Ok(None));

    let service = ProfileService::new(Arc::new(profile_repository));

    let result = service.get_profile(&ctx).await;
    assert!(matches!(
        result,
        Err(ServiceError::EntityNotFound(EntityNotFoundError::Profile(
            _
        )))
    ));
}
