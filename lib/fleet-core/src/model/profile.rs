use shared_types::UserId;

/// Account profile, read-only from the core's perspective. Its id mirrors
/// the owning account and labels "verified by" on vehicle listings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    pub id: UserId,
    pub username: String,
    pub avatar_url: Option<String>,
}
