use super::*;

/// Tests that lookup is independent of argument order.
///
/// Expected: the same row for (a, b) and (b, a), None for an unrelated pair
#[tokio::test]
async fn finds_row_in_either_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_friendship_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_friendship(db, 12, 5).await?;

    let repo = FriendshipRepository::new(db);
    let forward = repo.find_between(FriendPair::new(5, 12).unwrap()).await?;
    let backward = repo.find_between(FriendPair::new(12, 5).unwrap()).await?;
    let unrelated = repo.find_between(FriendPair::new(5, 6).unwrap()).await?;

    assert_eq!(forward.as_ref().map(|f| f.id), Some(created.id));
    assert_eq!(forward, backward);
    assert!(unrelated.is_none());

    Ok(())
}
