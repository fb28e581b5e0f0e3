use super::*;

/// Tests listing without a username.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn fails_without_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = FavoriteService::new(db);

    let missing = service.get_by_username(None).await;
    assert!(matches!(missing, Err(AppError::BadRequest(_))));

    let empty = service.get_by_username(Some(String::new())).await;
    assert!(matches!(empty, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests listing for a username that does not exist.
///
/// Expected: Err(AppError::NotFound("User not found"))
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FavoriteService::new(db)
        .get_by_username(Some("vader".to_string()))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(message)) if message == "User not found"));

    Ok(())
}

/// Tests listing for an existing user.
///
/// Expected: Ok(Vec<Favorite>) with only that user's favorites
#[tokio::test]
async fn returns_users_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let luke = factory::user::UserFactory::new(db)
        .username("luke")
        .build()
        .await?;
    let leia = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::create_planet_favorite(db, luke.id, planet.id).await?;
    factory::create_planet_favorite(db, leia.id, planet.id).await?;

    let favorites = FavoriteService::new(db)
        .get_by_username(Some("luke".to_string()))
        .await?;

    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].user_id, luke.id);

    Ok(())
}
