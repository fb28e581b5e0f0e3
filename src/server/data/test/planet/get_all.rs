use super::*;

/// Tests listing planets from an empty and a populated table.
///
/// Expected: Ok(empty Vec) before insert, Ok(Vec<Planet>) after
#[tokio::test]
async fn returns_all_planets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    assert!(repo.get_all().await?.is_empty());

    let planet = factory::create_planet(db).await?;

    let planets = repo.get_all().await?;
    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0].id, planet.id);

    Ok(())
}
