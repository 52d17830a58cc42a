use super::*;

/// Tests matching on either username or email.
///
/// Expected: Some(user) when either field matches, None otherwise
#[tokio::test]
async fn matches_username_or_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("norma")
        .email("norma@sunset.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let by_username = repo
        .find_by_username_or_email("norma", "other@example.com")
        .await?;
    let by_email = repo
        .find_by_username_or_email("someone", "norma@sunset.com")
        .await?;
    let neither = repo
        .find_by_username_or_email("someone", "other@example.com")
        .await?;

    assert_eq!(by_username.map(|u| u.id), Some(user.id));
    assert_eq!(by_email.map(|u| u.id), Some(user.id));
    assert!(neither.is_none());

    Ok(())
}
