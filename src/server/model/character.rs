//! Character ("people") domain model.

use crate::model::character::CharacterDto;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub homeworld: Option<String>,
    pub character_pic: Option<String>,
}

impl Character {
    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            height: entity.height,
            mass: entity.mass,
            hair_color: entity.hair_color,
            skin_color: entity.skin_color,
            eye_color: entity.eye_color,
            birth_year: entity.birth_year,
            gender: entity.gender,
            homeworld: entity.homeworld,
            character_pic: entity.character_pic,
        }
    }

    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            height: self.height,
            mass: self.mass,
            hair_color: self.hair_color,
            skin_color: self.skin_color,
            eye_color: self.eye_color,
            birth_year: self.birth_year,
            gender: self.gender,
            homeworld: self.homeworld,
            character_pic: self.character_pic,
        }
    }
}

/// Parameters for inserting a character. Only used when seeding.
#[derive(Debug, Clone, Default)]
pub struct CreateCharacterParam {
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub homeworld: Option<String>,
    pub character_pic: Option<String>,
}
