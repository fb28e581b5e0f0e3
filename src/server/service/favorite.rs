//! Favorite service for business logic.
//!
//! Credential checks happen before these methods are called (see
//! `middleware::auth::AuthGuard`), so add and remove take an already verified user.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        character::CharacterRepository, favorite::FavoriteRepository, planet::PlanetRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        favorite::{Favorite, FavoriteSubject, FavoriteTarget},
        user::User,
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every favorite owned by the named user.
    ///
    /// An empty username is treated the same as a missing one.
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - The user's favorites with targets resolved
    /// - `Err(AppError::BadRequest)` - No username supplied
    /// - `Err(AppError::NotFound)` - No user with that username
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_username(
        &self,
        username: Option<String>,
    ) -> Result<Vec<Favorite>, AppError> {
        let Some(username) = username.filter(|username| !username.is_empty()) else {
            return Err(AppError::BadRequest("Please provide Username".to_string()));
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_username(&username)
            .await?
        else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let favorites = FavoriteRepository::new(self.db)
            .get_by_user_id(user.id)
            .await?;

        Ok(favorites)
    }

    /// Adds a favorite for `user` pointing at `target`.
    ///
    /// Duplicates are not rejected; adding the same target twice stores two rows.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(AppError::NotFound)` - The target character or planet does not exist
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn add(&self, user: &User, target: FavoriteTarget) -> Result<Favorite, AppError> {
        let subject = self.resolve(target).await?;

        let favorite = FavoriteRepository::new(self.db)
            .create(user.id, subject)
            .await?;

        tracing::info!(
            "User {} added favorite {} {}",
            user.username,
            target.label(),
            favorite.name()
        );

        Ok(favorite)
    }

    /// Removes one favorite of `user` pointing at `target`.
    ///
    /// # Returns
    /// - `Ok(())` - A favorite was deleted
    /// - `Err(AppError::NotFound)` - The user has no such favorite
    /// - `Err(AppError::DbErr)` - Database error during lookup or delete
    pub async fn remove(&self, user: &User, target: FavoriteTarget) -> Result<(), AppError> {
        let deleted = FavoriteRepository::new(self.db)
            .delete_by_user_and_target(user.id, target)
            .await?;

        if !deleted {
            return Err(AppError::NotFound(format!(
                "Favorite {} not found",
                target.label()
            )));
        }

        tracing::info!("User {} removed favorite {}", user.username, target.label());

        Ok(())
    }

    async fn resolve(&self, target: FavoriteTarget) -> Result<FavoriteSubject, AppError> {
        match target {
            FavoriteTarget::Character(id) => CharacterRepository::new(self.db)
                .find_by_id(id)
                .await?
                .map(FavoriteSubject::Character)
                .ok_or_else(|| AppError::NotFound("Character not found".to_string())),
            FavoriteTarget::Planet(id) => PlanetRepository::new(self.db)
                .find_by_id(id)
                .await?
                .map(FavoriteSubject::Planet)
                .ok_or_else(|| AppError::NotFound("Planet not found".to_string())),
        }
    }
}
