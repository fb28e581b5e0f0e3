//! Favorite domain models.
//!
//! A favorite row stores nullable `character_id` and `planet_id` columns. The domain
//! model collapses them into a single resolved target so "exactly one target" holds by
//! construction everywhere above the repository.

use crate::{
    model::favorite::{FavoriteCategoryDto, FavoriteDto},
    server::model::{character::Character, planet::Planet},
};

/// Identifies the entity a favorite refers to, before it is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Character(i32),
    Planet(i32),
}

impl FavoriteTarget {
    /// Lower-case label used in response messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Character(_) => "character",
            Self::Planet(_) => "planet",
        }
    }
}

/// The loaded entity a favorite points at.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteSubject {
    Character(Character),
    Planet(Planet),
}

/// Favorite with its target entity resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub subject: FavoriteSubject,
}

impl Favorite {
    /// Display name of the favorite, taken from its target.
    pub fn name(&self) -> &str {
        match &self.subject {
            FavoriteSubject::Character(character) => &character.name,
            FavoriteSubject::Planet(planet) => &planet.name,
        }
    }

    pub fn into_dto(self) -> FavoriteDto {
        let name = self.name().to_string();

        let (category, character, planet) = match self.subject {
            FavoriteSubject::Character(character) => (
                FavoriteCategoryDto::Character,
                Some(character.into_dto()),
                None,
            ),
            FavoriteSubject::Planet(planet) => {
                (FavoriteCategoryDto::Planet, None, Some(planet.into_dto()))
            }
        };

        FavoriteDto {
            id: self.id,
            name,
            category,
            user_id: self.user_id,
            character,
            planet,
        }
    }
}
