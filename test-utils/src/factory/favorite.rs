//! Favorite factory for linking test users to characters and planets.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Rows per `INSERT` when bulk-creating favorites.
const INSERT_BATCH_SIZE: usize = 1000;

/// Creates a favorite linking `user_id` to the character `character_id`.
///
/// # Returns
/// - `Ok(entity::favorite::Model)` - Created favorite entity
/// - `Err(DbErr)` - Database error, including foreign key violations for unknown ids
pub async fn create_character_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    character_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        character_id: ActiveValue::Set(Some(character_id)),
        planet_id: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a favorite linking `user_id` to the planet `planet_id`.
pub async fn create_planet_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        character_id: ActiveValue::Set(None),
        planet_id: ActiveValue::Set(Some(planet_id)),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates `count` favorites linking `user_id` to the same planet.
///
/// Rows are inserted in batches so each statement stays under the bound-parameter limit.
pub async fn create_planet_favorites(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
    count: usize,
) -> Result<(), DbErr> {
    let mut remaining = count;

    while remaining > 0 {
        let batch = remaining.min(INSERT_BATCH_SIZE);

        let models = (0..batch).map(|_| entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(None),
            planet_id: ActiveValue::Set(Some(planet_id)),
            ..Default::default()
        });
        entity::prelude::Favorite::insert_many(models).exec(db).await?;

        remaining -= batch;
    }

    Ok(())
}

/// Returns the number of favorites owned by `user_id`.
pub async fn count_user_favorites(db: &DatabaseConnection, user_id: i32) -> Result<u64, DbErr> {
    entity::prelude::Favorite::find()
        .filter(entity::favorite::Column::UserId.eq(user_id))
        .count(db)
        .await
}
