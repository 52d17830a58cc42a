use super::*;

/// Tests removing a friendship in any state.
///
/// Expected: the deleted row returned, then None on a repeat delete
#[tokio::test]
async fn deletes_pending_or_accepted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_friendship_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = factory::create_friendship(db, 1, 2).await?;
    let accepted = factory::create_accepted_friendship(db, 3, 1).await?;

    let repo = FriendshipRepository::new(db);

    let first = repo.delete(FriendPair::new(2, 1).unwrap()).await?;
    let second = repo.delete(FriendPair::new(1, 3).unwrap()).await?;

    assert_eq!(first.map(|f| f.id), Some(pending.id));
    assert_eq!(second.map(|f| f.id), Some(accepted.id));
    assert!(repo.delete(FriendPair::new(1, 2).unwrap()).await?.is_none());

    Ok(())
}
