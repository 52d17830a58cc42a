use super::*;

fn change(user_id: i32, acting_as_admin: bool, current: Option<&str>, new: &str) -> UpdatePasswordParam {
    UpdatePasswordParam {
        user_id,
        acting_as_admin,
        current_password: current.map(str::to_string),
        new_password: new.to_string(),
    }
}

/// Tests changing the password with the correct current password.
///
/// Expected: Ok and the stored hash matches the new password
#[tokio::test]
async fn changes_password_with_current_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = UserService::new(db);

    service
        .update_password(change(
            user.id,
            false,
            Some(factory::user::DEFAULT_PASSWORD),
            "Matinee!2025",
        ))
        .await?;

    let stored = service.get_profile(user.id).await?;
    assert!(bcrypt::verify("Matinee!2025", &stored.password_hash).unwrap());

    Ok(())
}

/// Tests a wrong or missing current password for a regular user.
///
/// Expected: Err(AuthError::IncorrectPassword)
#[tokio::test]
async fn rejects_wrong_current_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = UserService::new(db);

    for current in [Some("Wrong#Pass1"), None] {
        let result = service
            .update_password(change(user.id, false, current, "Matinee!2025"))
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::IncorrectPassword))
        ));
    }

    Ok(())
}

/// Tests that admins may reset a password without the current one.
///
/// Expected: Ok
#[tokio::test]
async fn admin_skips_current_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    UserService::new(db)
        .update_password(change(user.id, true, None, "Matinee!2025"))
        .await?;

    Ok(())
}

/// Tests a weak new password.
///
/// Expected: Err(ValidationError::Schema)
#[tokio::test]
async fn rejects_weak_new_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = UserService::new(db)
        .update_password(change(
            user.id,
            false,
            Some(factory::user::DEFAULT_PASSWORD),
            "short",
        ))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::Schema(_)))
    ));

    Ok(())
}
