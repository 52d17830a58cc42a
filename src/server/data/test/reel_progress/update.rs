use super::*;

/// Tests updating and clearing a rating.
///
/// Expected: rating set, then cleared; watched flag kept when not provided
#[tokio::test]
async fn sets_and_clears_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let movie = factory::create_movie(db).await?;
    factory::reel_progress::ReelProgressFactory::new(db, user.id, movie.id)
        .watched(true)
        .build()
        .await?;

    let repo = ReelProgressRepository::new(db);

    let rated = repo
        .update(UpdateReelProgressParam {
            user_id: user.id,
            movie_id: movie.id,
            rating: Some(5),
            is_watched: None,
        })
        .await?
        .unwrap();
    assert_eq!(rated.rating, Some(5));
    assert!(rated.is_watched);

    let cleared = repo
        .update(UpdateReelProgressParam {
            user_id: user.id,
            movie_id: movie.id,
            rating: None,
            is_watched: Some(false),
        })
        .await?
        .unwrap();
    assert_eq!(cleared.rating, None);
    assert!(!cleared.is_watched);

    Ok(())
}

/// Tests updating an entry the user does not have.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ReelProgressRepository::new(db);
    let result = repo
        .update(UpdateReelProgressParam {
            user_id: user.id,
            movie_id: 77,
            rating: Some(3),
            is_watched: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
