pub mod error;

pub mod material;
pub mod personnel;
pub mod profile;
pub mod vehicle;

use shared_types::UserId;

use crate::model::auth::AuthContext;
use error::{ServiceError, ValidationError};

/// Resolves a session into an authenticated context.
///
/// The single refusal point for operations attempted without an active
/// session; every service method requires the returned context, so a missing
/// session is rejected before any store call.
pub fn authenticate(session: Option<UserId>) -> Result<AuthContext, ServiceError> {
    AuthContext::from_session(session).ok_or_else(|| ValidationError::SessionRequired.into())
}
