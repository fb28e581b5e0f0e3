use super::*;

/// Tests that each user is paired with exactly its own favorites.
///
/// Expected: Ok(Vec<UserWithFavorites>) in id order with favorites grouped per user
#[tokio::test]
async fn groups_favorites_by_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let luke = factory::create_user(db).await?;
    let leia = factory::create_user(db).await?;
    let han = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    let planet = factory::create_planet(db).await?;

    factory::create_character_favorite(db, luke.id, character.id).await?;
    factory::create_planet_favorite(db, luke.id, planet.id).await?;
    factory::create_planet_favorite(db, leia.id, planet.id).await?;

    let users = UserService::new(db).get_all_with_favorites().await?;

    assert_eq!(users.len(), 3);
    assert_eq!(users[0].user.id, luke.id);
    assert_eq!(users[0].favorites.len(), 2);
    assert_eq!(users[1].user.id, leia.id);
    assert_eq!(users[1].favorites.len(), 1);
    assert_eq!(users[2].user.id, han.id);
    assert!(users[2].favorites.is_empty());

    Ok(())
}

/// Tests a user with more favorites than one statement can bind as parameters.
///
/// Expected: Ok with every favorite attached to its owner
#[tokio::test]
async fn lists_user_with_many_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::create_planet_favorites(db, user.id, planet.id, 40_000).await?;

    let users = UserService::new(db).get_all_with_favorites().await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].favorites.len(), 40_000);

    Ok(())
}
