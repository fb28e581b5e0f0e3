//! Favorite data repository.
//!
//! Favorites are always returned with their target resolved. Targets are batch-loaded
//! by distinct id rather than one query per favorite, and each `IN` list is capped at
//! [`ID_BATCH_SIZE`] ids to stay under the bound-parameter limit of SQLite and Postgres.

use std::collections::{BTreeSet, HashMap};

use crate::server::model::{
    character::Character,
    favorite::{Favorite, FavoriteSubject, FavoriteTarget},
    planet::Planet,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Maximum number of ids bound in a single `IN (...)` target lookup.
pub const ID_BATCH_SIZE: usize = 500;

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a favorite linking `user_id` to an already loaded subject.
    ///
    /// Sets exactly one of the `character_id` and `planet_id` columns.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite with its subject
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn create(&self, user_id: i32, subject: FavoriteSubject) -> Result<Favorite, DbErr> {
        let (character_id, planet_id) = match &subject {
            FavoriteSubject::Character(character) => (Some(character.id), None),
            FavoriteSubject::Planet(planet) => (None, Some(planet.id)),
        };

        let entity = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Favorite {
            id: entity.id,
            user_id: entity.user_id,
            subject,
        })
    }

    /// Returns every stored favorite, ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Favorite>, DbErr> {
        let rows = entity::prelude::Favorite::find()
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        self.resolve(rows).await
    }

    /// Returns every favorite owned by `user_id`, ordered by id.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<Favorite>, DbErr> {
        let rows = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        self.resolve(rows).await
    }

    /// Deletes one favorite owned by `user_id` that points at `target`.
    ///
    /// Duplicate rows for the same pair can exist, in which case only the oldest is removed.
    ///
    /// # Returns
    /// - `Ok(true)` - A favorite was deleted
    /// - `Ok(false)` - No favorite matched the user and target
    /// - `Err(DbErr)` - Database error during lookup or delete
    pub async fn delete_by_user_and_target(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<bool, DbErr> {
        let target_filter = match target {
            FavoriteTarget::Character(id) => entity::favorite::Column::CharacterId.eq(id),
            FavoriteTarget::Planet(id) => entity::favorite::Column::PlanetId.eq(id),
        };

        let Some(favorite) = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(target_filter)
            .order_by_asc(entity::favorite::Column::Id)
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let result = entity::prelude::Favorite::delete_by_id(favorite.id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Attaches the loaded character or planet to each row.
    ///
    /// Rows whose target cannot be resolved are skipped with a warning. The cascading
    /// foreign keys should make this unreachable.
    async fn resolve(&self, rows: Vec<entity::favorite::Model>) -> Result<Vec<Favorite>, DbErr> {
        let character_ids: BTreeSet<i32> = rows.iter().filter_map(|row| row.character_id).collect();
        let planet_ids: BTreeSet<i32> = rows.iter().filter_map(|row| row.planet_id).collect();

        let characters = self.load_characters(character_ids).await?;
        let planets = self.load_planets(planet_ids).await?;

        let favorites = rows
            .into_iter()
            .filter_map(|row| {
                let subject = match (row.character_id, row.planet_id) {
                    (Some(id), _) => characters.get(&id).cloned().map(FavoriteSubject::Character),
                    (None, Some(id)) => planets.get(&id).cloned().map(FavoriteSubject::Planet),
                    (None, None) => None,
                };

                match subject {
                    Some(subject) => Some(Favorite {
                        id: row.id,
                        user_id: row.user_id,
                        subject,
                    }),
                    None => {
                        tracing::warn!("Skipping favorite {} with unresolvable target", row.id);
                        None
                    }
                }
            })
            .collect();

        Ok(favorites)
    }

    /// Loads the given characters in batches of [`ID_BATCH_SIZE`] ids per query.
    async fn load_characters(&self, ids: BTreeSet<i32>) -> Result<HashMap<i32, Character>, DbErr> {
        let ids: Vec<i32> = ids.into_iter().collect();
        let mut characters = HashMap::with_capacity(ids.len());

        for batch in ids.chunks(ID_BATCH_SIZE) {
            let entities = entity::prelude::Character::find()
                .filter(entity::character::Column::Id.is_in(batch.iter().copied()))
                .all(self.db)
                .await?;

            characters.extend(
                entities
                    .into_iter()
                    .map(|entity| (entity.id, Character::from_entity(entity))),
            );
        }

        Ok(characters)
    }

    /// Loads the given planets in batches of [`ID_BATCH_SIZE`] ids per query.
    async fn load_planets(&self, ids: BTreeSet<i32>) -> Result<HashMap<i32, Planet>, DbErr> {
        let ids: Vec<i32> = ids.into_iter().collect();
        let mut planets = HashMap::with_capacity(ids.len());

        for batch in ids.chunks(ID_BATCH_SIZE) {
            let entities = entity::prelude::Planet::find()
                .filter(entity::planet::Column::Id.is_in(batch.iter().copied()))
                .all(self.db)
                .await?;

            planets.extend(
                entities
                    .into_iter()
                    .map(|entity| (entity.id, Planet::from_entity(entity))),
            );
        }

        Ok(planets)
    }
}
