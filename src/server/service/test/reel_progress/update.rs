use super::*;

/// Tests rating and then clearing the rating of an entry.
///
/// Expected: rating 3, then no rating
#[tokio::test]
async fn sets_and_clears_rating() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let movie = factory::create_movie(db).await?;
    factory::create_reel_progress(db, user.id, movie.id).await?;

    let service = ReelProgressService::new(db);

    let rated = service
        .update(UpdateReelProgressParam {
            user_id: user.id,
            movie_id: movie.id,
            rating: Some(3),
            is_watched: Some(true),
        })
        .await?;
    assert_eq!(rated.rating, Some(3));
    assert!(rated.is_watched);

    let cleared = service
        .update(UpdateReelProgressParam {
            user_id: user.id,
            movie_id: movie.id,
            rating: None,
            is_watched: None,
        })
        .await?;
    assert_eq!(cleared.rating, None);

    Ok(())
}

/// Tests updating and removing a movie not in the reel.
///
/// Expected: Err(AppError::NotFound) for both
#[tokio::test]
async fn reports_movie_not_in_reel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let movie = factory::create_movie(db).await?;
    let service = ReelProgressService::new(db);

    let update = service
        .update(UpdateReelProgressParam {
            user_id: user.id,
            movie_id: movie.id,
            rating: Some(4),
            is_watched: None,
        })
        .await;

    match update {
        Err(AppError::NotFound(message)) => {
            assert_eq!(message, "Movie not found in your Reel Progress")
        }
        other => panic!("Expected NotFound, got: {:?}", other),
    }
    assert!(matches!(
        service.remove(user.id, movie.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
