use super::*;

/// Tests logging in with the right credentials.
///
/// Expected: Ok(User), email matched case-insensitively
#[tokio::test]
async fn logs_in_with_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("marlowe@noir.com")
        .build()
        .await?;

    let user = AuthService::new(db)
        .login("Marlowe@Noir.com", factory::user::DEFAULT_PASSWORD.to_string())
        .await?;

    assert_eq!(user.id, created.id);

    Ok(())
}

/// Tests that unknown emails and wrong passwords are indistinguishable.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("marlowe@noir.com")
        .build()
        .await?;

    let service = AuthService::new(db);

    let wrong_password = service
        .login("marlowe@noir.com", "Wrong#Pass1".to_string())
        .await;
    let unknown_email = service
        .login("nobody@noir.com", factory::user::DEFAULT_PASSWORD.to_string())
        .await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests blank credentials.
///
/// Expected: Err(AuthError::MissingCredentials)
#[tokio::test]
async fn requires_email_and_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);

    assert!(matches!(
        service.login("", "Popcorn#2024".to_string()).await,
        Err(AppError::AuthErr(AuthError::MissingCredentials))
    ));
    assert!(matches!(
        service.login("marlowe@noir.com", String::new()).await,
        Err(AppError::AuthErr(AuthError::MissingCredentials))
    ));

    Ok(())
}
