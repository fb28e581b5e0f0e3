use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{character::CharacterDto, planet::PlanetDto};

/// Kind of entity a favorite points at.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum FavoriteCategoryDto {
    Character,
    Planet,
}

/// A favorite with its target inlined.
///
/// Exactly one of `character` and `planet` is present. `name` is the target's name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub name: String,
    pub category: FavoriteCategoryDto,
    pub user_id: i32,
    pub character: Option<CharacterDto>,
    pub planet: Option<PlanetDto>,
}
