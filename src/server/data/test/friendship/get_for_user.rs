use super::*;

/// Tests listing a user's friendships from both sides of the pair.
///
/// Expected: rows where the user is user1 or user2, others excluded
#[tokio::test]
async fn lists_rows_on_either_side() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_friendship_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let low = factory::create_friendship(db, 5, 10).await?;
    let high = factory::create_accepted_friendship(db, 1, 5).await?;
    factory::create_friendship(db, 2, 3).await?;

    let repo = FriendshipRepository::new(db);
    let ids: Vec<i32> = repo.get_for_user(5).await?.iter().map(|f| f.id).collect();

    assert_eq!(ids, vec![low.id, high.id]);
    assert_eq!(repo.get_all().await?.len(), 3);

    Ok(())
}
