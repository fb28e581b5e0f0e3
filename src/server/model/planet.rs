//! Planet domain model.

use crate::model::planet::PlanetDto;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<String>,
    pub planet_pic: Option<String>,
}

impl Planet {
    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            diameter: entity.diameter,
            rotation_period: entity.rotation_period,
            orbital_period: entity.orbital_period,
            gravity: entity.gravity,
            population: entity.population,
            climate: entity.climate,
            terrain: entity.terrain,
            surface_water: entity.surface_water,
            planet_pic: entity.planet_pic,
        }
    }

    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
            diameter: self.diameter,
            rotation_period: self.rotation_period,
            orbital_period: self.orbital_period,
            gravity: self.gravity,
            population: self.population,
            climate: self.climate,
            terrain: self.terrain,
            surface_water: self.surface_water,
            planet_pic: self.planet_pic,
        }
    }
}

/// Parameters for inserting a planet. Only used when seeding.
#[derive(Debug, Clone, Default)]
pub struct CreatePlanetParam {
    pub name: String,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<String>,
    pub planet_pic: Option<String>,
}
