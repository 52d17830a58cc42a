use super::*;

/// Tests a valid token for an existing user.
///
/// Expected: Ok(User) matching the token's subject
#[tokio::test]
async fn grants_access_with_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let tokens = token_service(24);
    let headers = bearer_headers(&tokens.issue(&user)?);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(result, user);

    Ok(())
}

/// Tests a request without the token header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn denies_access_without_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = token_service(24);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::MissingToken))));

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn denies_access_with_invalid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let forged = TokenService::new("someone-else", "Authorization", 24).issue(&user)?;
    let tokens = token_service(24);
    let headers = bearer_headers(&forged);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::InvalidToken))));

    Ok(())
}

/// Tests a token past its expiry.
///
/// Expected: Err(AuthError::TokenExpired)
#[tokio::test]
async fn denies_access_with_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let tokens = token_service(-2);
    let headers = bearer_headers(&tokens.issue(&user)?);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::TokenExpired))));

    Ok(())
}

/// Tests a valid token whose user has since been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_when_user_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let tokens = token_service(24);
    let headers = bearer_headers(&tokens.issue(&user)?);

    crate::server::data::user::UserRepository::new(db)
        .delete(user.id)
        .await?;

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) => assert_eq!(id, user.id),
        other => panic!("Expected UserNotInDatabase, got: {:?}", other),
    }

    Ok(())
}

/// Tests the admin gate for a regular user.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_permission_to_regular_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let tokens = token_service(24);
    let headers = bearer_headers(&tokens.issue(&user)?);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, message))) => {
            assert_eq!(id, user.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}

/// Tests the admin gate for an admin.
///
/// Expected: Ok(User) with is_admin = true
#[tokio::test]
async fn grants_admin_permission_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::user::create_admin(db).await?);
    let tokens = token_service(24);
    let headers = bearer_headers(&tokens.issue(&admin)?);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert!(result.is_admin);

    Ok(())
}

/// Tests that the raw token is accepted without the `Bearer ` prefix.
///
/// Expected: Ok(User)
#[tokio::test]
async fn accepts_token_without_bearer_prefix() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let tokens = token_service(24);
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&tokens.issue(&user)?).unwrap(),
    );

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(result.id, user.id);

    Ok(())
}
