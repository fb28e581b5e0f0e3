use super::*;

/// Tests adding a favorite for an existing character.
///
/// Expected: Ok(Favorite) and the user's favorite count grows by one
#[tokio::test]
async fn adds_character_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let character = factory::character::CharacterFactory::new(db)
        .name("Luke Skywalker")
        .build()
        .await?;

    let favorite = FavoriteService::new(db)
        .add(&user, FavoriteTarget::Character(character.id))
        .await?;

    assert_eq!(favorite.name(), "Luke Skywalker");
    assert_eq!(factory::count_user_favorites(db, user.id).await?, 1);

    Ok(())
}

/// Tests adding a favorite for a planet that does not exist.
///
/// Expected: Err(AppError::NotFound("Planet not found")) and nothing is stored
#[tokio::test]
async fn fails_for_unknown_planet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);

    let result = FavoriteService::new(db)
        .add(&user, FavoriteTarget::Planet(999))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(message)) if message == "Planet not found"));
    assert_eq!(factory::count_user_favorites(db, user.id).await?, 0);

    Ok(())
}
