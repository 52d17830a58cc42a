use super::*;

/// Tests the recipient accepting a request.
///
/// Expected: are_friends false before, true after
#[tokio::test]
async fn recipient_accepts_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let recipient = factory::create_user(db).await?;
    let service = FriendshipService::new(db);

    service.create(requester.id, recipient.id).await?;
    assert!(!service.are_friends(recipient.id, requester.id).await?);

    let accepted = service.accept(requester.id, recipient.id).await?;

    assert!(accepted.friend_request_accepted);
    assert!(service.are_friends(recipient.id, requester.id).await?);
    assert!(service.are_friends(requester.id, recipient.id).await?);

    Ok(())
}

/// Tests the requester trying to accept their own request.
///
/// Expected: Err(AppError::BadRequest), friendship still pending
#[tokio::test]
async fn requester_cannot_accept_own_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let recipient = factory::create_user(db).await?;
    let service = FriendshipService::new(db);

    service.create(requester.id, recipient.id).await?;

    // Caller is the requester, so the stored requester would have to be the recipient.
    match service.accept(recipient.id, requester.id).await {
        Err(AppError::BadRequest(message)) => assert_eq!(
            message,
            "Pending friendship document not found with provided parameters"
        ),
        other => panic!("Expected BadRequest, got: {:?}", other),
    }
    assert!(!service.are_friends(requester.id, recipient.id).await?);

    Ok(())
}
