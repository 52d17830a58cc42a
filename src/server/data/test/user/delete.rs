use super::*;

/// Tests that deleting a user removes their reel progress but keeps friendships.
///
/// Expected: user and reel progress gone, friendship row still present
#[tokio::test]
async fn cascades_reel_progress_but_not_friendships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let friend = factory::create_user(db).await?;
    let movie = factory::create_movie(db).await?;
    factory::create_reel_progress(db, user.id, movie.id).await?;
    factory::create_accepted_friendship(db, user.id, friend.id).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(user.id).await?;

    assert_eq!(deleted.map(|u| u.id), Some(user.id));
    assert!(repo.find_by_id(user.id).await?.is_none());

    use sea_orm::{EntityTrait, PaginatorTrait};
    let progress = entity::prelude::ReelProgress::find().count(db).await?;
    let friendships = entity::prelude::Friendship::find().count(db).await?;

    assert_eq!(progress, 0);
    assert_eq!(friendships, 1);

    Ok(())
}

/// Tests deleting a user that does not exist.
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

    assert!(repo.delete(42).await?.is_none());

    Ok(())
}
