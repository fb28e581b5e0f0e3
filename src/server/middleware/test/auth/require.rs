use super::*;

/// Tests correct credentials for an existing user.
///
/// Expected: Ok(User) for the matching username
#[tokio::test]
async fn grants_access_with_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("luke")
        .password("force123")
        .build()
        .await?;

    let user = AuthGuard::new(db)
        .require(Some("luke".to_string()), Some("force123".to_string()))
        .await?;

    assert_eq!(user.id, created.id);
    assert_eq!(user.username, "luke");

    Ok(())
}

/// Tests that a missing password is rejected before the database is consulted.
///
/// Expected: Err(AuthError::MissingCredentials)
#[tokio::test]
async fn rejects_missing_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthGuard::new(db)
        .require(Some("luke".to_string()), None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingCredentials))
    ));

    Ok(())
}

/// Tests that empty credentials count as missing.
///
/// Expected: Err(AuthError::MissingCredentials)
#[tokio::test]
async fn rejects_empty_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthGuard::new(db)
        .require(Some(String::new()), Some("force123".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingCredentials))
    ));

    Ok(())
}

/// Tests credentials for a username that does not exist.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthGuard::new(db)
        .require(Some("vader".to_string()), Some("force123".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(username))) if username == "vader"
    ));

    Ok(())
}

/// Tests a wrong password for an existing user.
///
/// Expected: Err(AuthError::InvalidPassword)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("luke")
        .password("force123")
        .build()
        .await?;

    let result = AuthGuard::new(db)
        .require(Some("luke".to_string()), Some("darkside".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidPassword(_)))
    ));

    Ok(())
}
