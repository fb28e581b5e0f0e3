use super::*;

/// Tests deleting an existing planet favorite.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_matching_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::create_planet_favorite(db, user.id, planet.id).await?;

    let repo = FavoriteRepository::new(db);
    let deleted = repo
        .delete_by_user_and_target(user.id, FavoriteTarget::Planet(planet.id))
        .await?;

    assert!(deleted);
    assert_eq!(factory::count_user_favorites(db, user.id).await?, 0);

    Ok(())
}

/// Tests that the target kind is respected: a planet id does not match a character favorite.
///
/// Expected: Ok(false) and nothing is deleted
#[tokio::test]
async fn ignores_favorite_of_other_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    factory::create_character_favorite(db, user.id, character.id).await?;

    let repo = FavoriteRepository::new(db);
    let deleted = repo
        .delete_by_user_and_target(user.id, FavoriteTarget::Planet(character.id))
        .await?;

    assert!(!deleted);
    assert_eq!(factory::count_user_favorites(db, user.id).await?, 1);

    Ok(())
}

/// Tests that another user's favorite is never deleted.
///
/// Expected: Ok(false) and the other user's favorite remains
#[tokio::test]
async fn ignores_other_users_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::create_planet_favorite(db, owner.id, planet.id).await?;

    let repo = FavoriteRepository::new(db);
    let deleted = repo
        .delete_by_user_and_target(other.id, FavoriteTarget::Planet(planet.id))
        .await?;

    assert!(!deleted);
    assert_eq!(factory::count_user_favorites(db, owner.id).await?, 1);

    Ok(())
}

/// Tests that only one of two duplicate favorites is removed.
///
/// Expected: Ok(true) with one duplicate left behind
#[tokio::test]
async fn deletes_single_duplicate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    factory::create_character_favorite(db, user.id, character.id).await?;
    factory::create_character_favorite(db, user.id, character.id).await?;

    let repo = FavoriteRepository::new(db);
    let deleted = repo
        .delete_by_user_and_target(user.id, FavoriteTarget::Character(character.id))
        .await?;

    assert!(deleted);
    assert_eq!(factory::count_user_favorites(db, user.id).await?, 1);

    Ok(())
}
