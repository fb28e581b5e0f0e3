//! User service for business logic.
//!
//! This module provides the `UserService` for user listing. Every user is returned with
//! the favorites it owns attached.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{favorite::FavoriteRepository, user::UserRepository},
    error::AppError,
    model::{favorite::Favorite, user::UserWithFavorites},
};

/// Service providing business logic for users.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user with the favorites each one owns.
    ///
    /// The whole favorite table is loaded in one query and grouped by owner, so the
    /// number of users never ends up in a bound parameter list.
    ///
    /// # Returns
    /// - `Ok(Vec<UserWithFavorites>)` - Users ordered by id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_with_favorites(&self) -> Result<Vec<UserWithFavorites>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        let favorites = FavoriteRepository::new(self.db).get_all().await?;

        let mut by_user: HashMap<i32, Vec<Favorite>> = HashMap::new();
        for favorite in favorites {
            by_user.entry(favorite.user_id).or_default().push(favorite);
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let favorites = by_user.remove(&user.id).unwrap_or_default();
                UserWithFavorites { user, favorites }
            })
            .collect())
    }
}
