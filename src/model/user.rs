use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::favorite::FavoriteDto;

/// A user as exposed by the API. The password hash is never serialized.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub favorites: Vec<FavoriteDto>,
}
