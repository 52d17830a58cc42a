use super::*;

/// Tests that deletion only touches the user's own entry.
///
/// Expected: caller's entry removed, other user's entry for the same movie kept
#[tokio::test]
async fn deletes_only_own_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let movie = factory::create_movie(db).await?;
    factory::create_reel_progress(db, user.id, movie.id).await?;
    factory::create_reel_progress(db, other.id, movie.id).await?;

    let repo = ReelProgressRepository::new(db);

    assert!(repo.delete(user.id, movie.id).await?);
    assert!(!repo.delete(user.id, movie.id).await?);
    assert!(repo.find(user.id, movie.id).await?.is_none());
    assert!(repo.find(other.id, movie.id).await?.is_some());

    Ok(())
}
