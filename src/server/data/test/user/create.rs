use super::*;

fn param(username: &str, email: &str) -> CreateUserParam {
    CreateUserParam {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "$2b$04$hash".to_string(),
        is_admin: false,
    }
}

/// Tests creating a new user.
///
/// Verifies that the repository inserts the user and returns it with a generated id.
///
/// Expected: Ok with the stored username, email and non-admin flag
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(param("rosebud", "kane@xanadu.com")).await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "rosebud");
    assert_eq!(user.email, "kane@xanadu.com");
    assert!(!user.is_admin);

    let found = repo.find_by_id(user.id).await?;
    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("first", "same@example.com")).await?;
    let result = repo.create(param("second", "same@example.com")).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
