use sea_orm::DatabaseConnection;

use crate::server::{
    data::planet::PlanetRepository,
    error::AppError,
    model::planet::Planet,
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every planet ordered by id
    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        Ok(PlanetRepository::new(self.db).get_all().await?)
    }

    /// Gets a planet by id, or `NotFound` when no row matches
    pub async fn get_by_id(&self, id: i32) -> Result<Planet, AppError> {
        PlanetRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))
    }
}
