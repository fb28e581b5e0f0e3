use super::*;

/// Tests that deleting a user removes the user's favorites.
///
/// Expected: favorite count drops to zero after the user row is deleted
#[tokio::test]
async fn deleting_user_removes_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::create_planet_favorite(db, user.id, planet.id).await?;

    entity::prelude::User::delete_by_id(user.id).exec(db).await?;

    let remaining = entity::prelude::Favorite::find().all(db).await?;
    assert!(remaining.is_empty());

    Ok(())
}

/// Tests that deleting a character removes favorites pointing at it, and only those.
///
/// Expected: the planet favorite survives, the character favorite is gone
#[tokio::test]
async fn deleting_character_removes_its_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::create_character_favorite(db, user.id, character.id).await?;
    let planet_favorite = factory::create_planet_favorite(db, user.id, planet.id).await?;

    entity::prelude::Character::delete_by_id(character.id)
        .exec(db)
        .await?;

    let remaining = entity::prelude::Favorite::find().all(db).await?;
    assert_eq!(remaining, vec![planet_favorite]);

    Ok(())
}

/// Tests that deleting a planet removes favorites pointing at it.
///
/// Expected: no favorites remain
#[tokio::test]
async fn deleting_planet_removes_its_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::create_planet_favorite(db, first.id, planet.id).await?;
    factory::create_planet_favorite(db, second.id, planet.id).await?;

    entity::prelude::Planet::delete_by_id(planet.id).exec(db).await?;

    let remaining = entity::prelude::Favorite::find().all(db).await?;
    assert!(remaining.is_empty());

    Ok(())
}
