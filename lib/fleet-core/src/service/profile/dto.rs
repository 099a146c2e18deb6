use one_dto_mapper::From;
use shared_types::UserId;

use crate::model::profile::Profile;

#[derive(Clone, Debug, From)]
#[from(Profile)]
pub struct ProfileResponseDTO {
    pub id: UserId,
    pub username: String,
    pub avatar_url: Option<String>,
}
