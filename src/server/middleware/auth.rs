use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::password::verify_password,
};

/// Verifies the `username`/`password` pair sent with favorite mutations.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the user once both credentials are present, the user exists, and the
    /// password verifies. Checks run in that order and stop at the first failure.
    ///
    /// Empty strings count as missing.
    pub async fn require(
        &self,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<User, AppError> {
        let (Some(username), Some(password)) = (
            username.filter(|value| !value.is_empty()),
            password.filter(|value| !value.is_empty()),
        ) else {
            return Err(AuthError::MissingCredentials.into());
        };

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(&username).await? else {
            return Err(AuthError::UserNotFound(username).into());
        };

        if !verify_password(&password, &user.password_hash)? {
            return Err(AuthError::InvalidPassword(username).into());
        }

        Ok(user)
    }
}
