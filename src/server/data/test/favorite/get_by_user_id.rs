use super::*;

/// Tests that only the requested user's favorites are returned, with targets resolved.
///
/// Expected: Ok(Vec<Favorite>) containing the user's character and planet favorites
#[tokio::test]
async fn returns_only_owned_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let luke = factory::create_user(db).await?;
    let leia = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    let planet = factory::create_planet(db).await?;

    factory::create_character_favorite(db, luke.id, character.id).await?;
    factory::create_planet_favorite(db, luke.id, planet.id).await?;
    factory::create_planet_favorite(db, leia.id, planet.id).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_by_user_id(luke.id).await?;

    assert_eq!(favorites.len(), 2);
    assert!(favorites.iter().all(|f| f.user_id == luke.id));
    assert_eq!(
        favorites[0].subject,
        FavoriteSubject::Character(Character::from_entity(character))
    );
    assert_eq!(
        favorites[1].subject,
        FavoriteSubject::Planet(Planet::from_entity(planet.clone()))
    );
    assert_eq!(favorites[1].name(), planet.name);

    Ok(())
}

/// Tests a user without favorites.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_user_without_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_by_user_id(user.id).await?;

    assert!(favorites.is_empty());

    Ok(())
}

/// Tests a user whose favorites all point at the same planet, more rows than a single
/// statement can bind as parameters.
///
/// Expected: Ok(Vec<Favorite>) containing every row, resolved to the one planet
#[tokio::test]
async fn resolves_many_favorites_of_one_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::create_planet_favorites(db, user.id, planet.id, 40_000).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_by_user_id(user.id).await?;

    assert_eq!(favorites.len(), 40_000);
    assert!(favorites
        .iter()
        .all(|f| f.subject == FavoriteSubject::Planet(Planet::from_entity(planet.clone()))));

    Ok(())
}

/// Tests favorites pointing at more distinct planets than fit in one lookup batch.
///
/// Expected: Ok(Vec<Favorite>) with every favorite resolved to its own planet
#[tokio::test]
async fn resolves_targets_across_batches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planets = factory::create_planets(db, ID_BATCH_SIZE * 2 + 7).await?;
    for planet in &planets {
        factory::create_planet_favorite(db, user.id, planet.id).await?;
    }

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_by_user_id(user.id).await?;

    assert_eq!(favorites.len(), planets.len());
    for (favorite, planet) in favorites.iter().zip(&planets) {
        assert_eq!(favorite.name(), planet.name);
    }

    Ok(())
}
