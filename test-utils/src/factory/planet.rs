//! Planet factory for creating test planet entities.

use crate::factory::helpers::next_id;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

/// Rows per `INSERT` when bulk-creating planets.
const INSERT_BATCH_SIZE: usize = 500;

/// Factory for creating test planets.
pub struct PlanetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    diameter: Option<i32>,
    population: Option<i64>,
    climate: Option<String>,
    terrain: Option<String>,
}

impl<'a> PlanetFactory<'a> {
    /// Creates a new PlanetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Planet {id}"`
    /// - diameter: `10465`, population: `200000`
    /// - climate: `"arid"`, terrain: `"desert"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Planet {}", id),
            diameter: Some(10465),
            population: Some(200_000),
            climate: Some("arid".to_string()),
            terrain: Some("desert".to_string()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn diameter(mut self, diameter: Option<i32>) -> Self {
        self.diameter = diameter;
        self
    }

    pub fn population(mut self, population: Option<i64>) -> Self {
        self.population = population;
        self
    }

    pub fn climate(mut self, climate: Option<&str>) -> Self {
        self.climate = climate.map(str::to_string);
        self
    }

    /// Builds and inserts the planet entity into the database.
    pub async fn build(self) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            name: ActiveValue::Set(self.name),
            diameter: ActiveValue::Set(self.diameter),
            rotation_period: ActiveValue::Set(None),
            orbital_period: ActiveValue::Set(None),
            gravity: ActiveValue::Set(None),
            population: ActiveValue::Set(self.population),
            climate: ActiveValue::Set(self.climate),
            terrain: ActiveValue::Set(self.terrain),
            surface_water: ActiveValue::Set(None),
            planet_pic: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planet with default values.
pub async fn create_planet(db: &DatabaseConnection) -> Result<entity::planet::Model, DbErr> {
    PlanetFactory::new(db).build().await
}

/// Creates `count` planets named `"Planet {n}"` and returns every stored planet ordered by id.
///
/// Rows are inserted in batches so each statement stays under the bound-parameter limit.
pub async fn create_planets(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::planet::Model>, DbErr> {
    let names: Vec<String> = (0..count)
        .map(|_| format!("Planet {}", next_id()))
        .collect();

    for batch in names.chunks(INSERT_BATCH_SIZE) {
        let models = batch.iter().map(|name| entity::planet::ActiveModel {
            name: ActiveValue::Set(name.clone()),
            ..Default::default()
        });
        entity::prelude::Planet::insert_many(models).exec(db).await?;
    }

    entity::prelude::Planet::find()
        .order_by_asc(entity::planet::Column::Id)
        .all(db)
        .await
}
