use super::*;

/// Tests that pending requests do not count as friendship.
///
/// Expected: false while pending, true once accepted, false with no row
#[tokio::test]
async fn only_accepted_rows_are_friends() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_friendship_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_friendship(db, 1, 2).await?;
    factory::create_accepted_friendship(db, 3, 4).await?;

    let repo = FriendshipRepository::new(db);

    assert!(!repo.are_friends(FriendPair::new(2, 1).unwrap()).await?);
    assert!(repo.are_friends(FriendPair::new(4, 3).unwrap()).await?);
    assert!(!repo.are_friends(FriendPair::new(1, 3).unwrap()).await?);

    repo.accept(FriendPair::new(1, 2).unwrap(), 1).await?;
    assert!(repo.are_friends(FriendPair::new(1, 2).unwrap()).await?);

    Ok(())
}
