use super::*;

/// Tests removing a friendship from either side.
///
/// Expected: Ok for the first removal, BadRequest once it is gone
#[tokio::test]
async fn removes_friendship_from_either_side() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    factory::create_accepted_friendship(db, a.id, b.id).await?;

    let service = FriendshipService::new(db);

    service.remove(b.id, a.id).await?;

    assert!(!service.are_friends(a.id, b.id).await?);
    match service.remove(a.id, b.id).await {
        Err(AppError::BadRequest(message)) => assert_eq!(
            message,
            "Friendship document not found with provided parameters"
        ),
        other => panic!("Expected BadRequest, got: {:?}", other),
    }

    Ok(())
}

/// Tests listing after a removal.
///
/// Expected: only the remaining friendship is listed for the user
#[tokio::test]
async fn lists_remaining_friendships() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    let c = factory::create_user(db).await?;
    factory::create_friendship(db, a.id, b.id).await?;
    let kept = factory::create_accepted_friendship(db, c.id, a.id).await?;

    let service = FriendshipService::new(db);
    service.remove(a.id, b.id).await?;

    let listed = service.list_for_user(a.id).await?;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, kept.id);
    assert_eq!(service.list_all().await?.len(), 1);

    Ok(())
}
