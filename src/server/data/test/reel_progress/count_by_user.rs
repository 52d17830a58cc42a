use super::*;

/// Tests grouping entries per user.
///
/// Expected: one count per user with entries, users without entries absent
#[tokio::test]
async fn counts_entries_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let busy = factory::create_user(db).await?;
    let casual = factory::create_user(db).await?;
    factory::create_user(db).await?;
    let first = factory::create_movie(db).await?;
    let second = factory::create_movie(db).await?;

    factory::create_reel_progress(db, busy.id, first.id).await?;
    factory::create_reel_progress(db, busy.id, second.id).await?;
    factory::create_reel_progress(db, casual.id, first.id).await?;

    let mut counts = ReelProgressRepository::new(db).count_by_user().await?;
    counts.sort();

    assert_eq!(counts, vec![(busy.id, 2), (casual.id, 1)]);

    Ok(())
}
