use super::*;

/// Tests changing only the username.
///
/// Expected: Ok(User) with the new username and the old email
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserService::new(db)
        .update_profile(UpdateProfileParam {
            user_id: user.id,
            username: Some("gittes".to_string()),
            email: None,
        })
        .await?;

    assert_eq!(updated.username, "gittes");
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests taking another user's email.
///
/// Expected: Err(AppError::DbErr) with a unique constraint violation
#[tokio::test]
async fn rejects_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let result = UserService::new(db)
        .update_profile(UpdateProfileParam {
            user_id: user.id,
            username: None,
            email: Some(other.email.clone()),
        })
        .await;

    match result {
        Err(AppError::DbErr(err)) => assert!(matches!(
            err.sql_err(),
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
        )),
        other => panic!("Expected unique violation, got: {:?}", other),
    }

    Ok(())
}

/// Tests an invalid email update.
///
/// Expected: Err(ValidationError::Schema)
#[tokio::test]
async fn rejects_invalid_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = UserService::new(db)
        .update_profile(UpdateProfileParam {
            user_id: user.id,
            username: None,
            email: Some("not-an-email".to_string()),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::Schema(_)))
    ));

    Ok(())
}
