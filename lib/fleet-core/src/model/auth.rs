use shared_types::UserId;

/// Authenticated caller identity, passed explicitly to every core operation.
///
/// There is no ambient session state: a raw session becomes a context exactly
/// once, via [`crate::service::authenticate`], and an operation without a
/// context cannot reach any repository.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AuthContext {
    user_id: UserId,
}

impl AuthContext {
    pub fn from_session(session: Option<UserId>) -> Option<Self> {
        session.map(|user_id| Self { user_id })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}
