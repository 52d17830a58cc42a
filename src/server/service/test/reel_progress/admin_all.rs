use super::*;

/// Tests grouping every user's records with movie titles.
///
/// Expected: one group per user with records, orphaned records and empty users left out
#[tokio::test]
async fn groups_records_by_user_and_skips_orphans() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let busy = factory::create_user(db).await?;
    let orphaned_only = factory::create_user(db).await?;
    factory::create_user(db).await?;

    let vertigo = factory::movie::MovieFactory::new(db)
        .title("Vertigo")
        .year("1958")
        .build()
        .await?;
    let psycho = factory::movie::MovieFactory::new(db)
        .title("Psycho")
        .year("1960")
        .build()
        .await?;

    factory::reel_progress::ReelProgressFactory::new(db, busy.id, vertigo.id)
        .rating(5)
        .watched(true)
        .build()
        .await?;
    factory::create_reel_progress(db, busy.id, psycho.id).await?;
    factory::create_reel_progress(db, busy.id, 9_999).await?;
    factory::create_reel_progress(db, orphaned_only.id, 9_998).await?;

    let groups = ReelProgressService::new(db).admin_all().await?;

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].user_id, busy.id);
    assert_eq!(groups[0].username, busy.username);

    let titles: Vec<&str> = groups[0].entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Vertigo", "Psycho"]);
    assert_eq!(groups[0].entries[0].year, "1958");
    assert_eq!(groups[0].entries[0].rating, Some(5));

    Ok(())
}

/// Tests records from several users inserted in interleaved order.
///
/// Expected: exactly one group per user, ordered by user id, each holding all of that user's records
#[tokio::test]
async fn merges_interleaved_records_into_one_group_per_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let rashomon = factory::create_movie(db).await?;
    let ikiru = factory::create_movie(db).await?;

    factory::create_reel_progress(db, second.id, rashomon.id).await?;
    factory::create_reel_progress(db, first.id, rashomon.id).await?;
    factory::create_reel_progress(db, second.id, ikiru.id).await?;
    factory::create_reel_progress(db, first.id, ikiru.id).await?;

    let groups = ReelProgressService::new(db).admin_all().await?;

    let user_ids: Vec<i32> = groups.iter().map(|g| g.user_id).collect();
    assert_eq!(user_ids, vec![first.id, second.id]);
    assert!(groups.iter().all(|g| g.entries.len() == 2));

    Ok(())
}
