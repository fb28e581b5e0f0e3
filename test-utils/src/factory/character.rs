//! Character factory for creating test character entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters.
///
/// Only `name` is required by the schema. The remaining attributes default to a
/// plausible profile so serialization tests see populated fields.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    height: Option<i32>,
    mass: Option<i32>,
    hair_color: Option<String>,
    homeworld: Option<String>,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Character {id}"`
    /// - height: `172`, mass: `77`
    /// - hair_color: `"blond"`, homeworld: `"Tatooine"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Character {}", id),
            height: Some(172),
            mass: Some(77),
            hair_color: Some("blond".to_string()),
            homeworld: Some("Tatooine".to_string()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn height(mut self, height: Option<i32>) -> Self {
        self.height = height;
        self
    }

    pub fn mass(mut self, mass: Option<i32>) -> Self {
        self.mass = mass;
        self
    }

    pub fn hair_color(mut self, hair_color: Option<&str>) -> Self {
        self.hair_color = hair_color.map(str::to_string);
        self
    }

    pub fn homeworld(mut self, homeworld: Option<&str>) -> Self {
        self.homeworld = homeworld.map(str::to_string);
        self
    }

    /// Builds and inserts the character entity into the database.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            name: ActiveValue::Set(self.name),
            height: ActiveValue::Set(self.height),
            mass: ActiveValue::Set(self.mass),
            hair_color: ActiveValue::Set(self.hair_color),
            skin_color: ActiveValue::Set(None),
            eye_color: ActiveValue::Set(None),
            birth_year: ActiveValue::Set(None),
            gender: ActiveValue::Set(None),
            homeworld: ActiveValue::Set(self.homeworld),
            character_pic: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}
