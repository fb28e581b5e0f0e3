use sea_orm::DatabaseConnection;

use crate::server::{
    data::character::CharacterRepository,
    error::AppError,
    model::character::Character,
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every character ordered by id
    pub async fn get_all(&self) -> Result<Vec<Character>, AppError> {
        Ok(CharacterRepository::new(self.db).get_all().await?)
    }

    /// Gets a character by id, or `NotFound` when no row matches
    pub async fn get_by_id(&self, id: i32) -> Result<Character, AppError> {
        CharacterRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".to_string()))
    }
}
