//! User domain models and parameters.

use crate::{model::user::UserDto, server::model::favorite::Favorite};

/// Registered user with the stored Argon2id password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// PHC-formatted hash. Never leaves the server.
    pub password_hash: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
        }
    }
}

/// User together with every favorite it owns, as listed by `GET /user/all`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithFavorites {
    pub user: User,
    pub favorites: Vec<Favorite>,
}

impl UserWithFavorites {
    /// Converts to a DTO, dropping the password hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.user.id,
            email: self.user.email,
            username: self.user.username,
            favorites: self.favorites.into_iter().map(Favorite::into_dto).collect(),
        }
    }
}
