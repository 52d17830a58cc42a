use super::*;

/// Tests that only provided fields change.
///
/// Expected: username updated, email untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(UpdateProfileParam {
            user_id: user.id,
            username: Some("renamed".to_string()),
            email: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.username, "renamed");
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.password_hash, user.password_hash);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(UpdateProfileParam {
            user_id: 999,
            username: Some("ghost".to_string()),
            email: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
