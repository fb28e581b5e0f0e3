use super::*;

/// Tests inserting a character with every optional attribute.
///
/// Expected: Ok(Character) echoing the supplied attributes
#[tokio::test]
async fn creates_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let character = repo
        .create(CreateCharacterParam {
            name: "Chewbacca".to_string(),
            height: Some(228),
            mass: Some(112),
            hair_color: Some("brown".to_string()),
            gender: Some("male".to_string()),
            homeworld: Some("Kashyyyk".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(character.name, "Chewbacca");
    assert_eq!(character.height, Some(228));
    assert_eq!(character.homeworld.as_deref(), Some("Kashyyyk"));
    assert_eq!(character.eye_color, None);

    Ok(())
}
