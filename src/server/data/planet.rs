//! Planet data repository.

use crate::server::model::planet::{CreatePlanetParam, Planet};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreatePlanetParam) -> Result<Planet, DbErr> {
        let entity = entity::planet::ActiveModel {
            name: ActiveValue::Set(param.name),
            diameter: ActiveValue::Set(param.diameter),
            rotation_period: ActiveValue::Set(param.rotation_period),
            orbital_period: ActiveValue::Set(param.orbital_period),
            gravity: ActiveValue::Set(param.gravity),
            population: ActiveValue::Set(param.population),
            climate: ActiveValue::Set(param.climate),
            terrain: ActiveValue::Set(param.terrain),
            surface_water: ActiveValue::Set(param.surface_water),
            planet_pic: ActiveValue::Set(param.planet_pic),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Planet::from_entity(entity))
    }

    /// Returns every planet ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Planet>, DbErr> {
        let entities = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }

    /// Finds a planet by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, DbErr> {
        let entity = entity::prelude::Planet::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Planet::from_entity))
    }
}
