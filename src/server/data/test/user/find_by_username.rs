use super::*;

/// Tests finding an existing user by username.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("leia")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("leia").await?;

    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(user.password_hash, created.password_hash);

    Ok(())
}

/// Tests querying for a username that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("vader").await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests that the lookup fails when the user table is missing.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_by_username("luke").await;

    assert!(result.is_err());

    Ok(())
}
