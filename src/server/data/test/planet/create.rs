use super::*;

/// Tests inserting a planet with a population beyond the 32-bit range.
///
/// Expected: Ok(Planet) with the population preserved
#[tokio::test]
async fn creates_planet_with_large_population() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let planet = repo
        .create(CreatePlanetParam {
            name: "Coruscant".to_string(),
            population: Some(1_000_000_000_000),
            climate: Some("temperate".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(planet.name, "Coruscant");
    assert_eq!(planet.population, Some(1_000_000_000_000));

    Ok(())
}
