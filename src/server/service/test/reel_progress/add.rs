use super::*;

fn add(user_id: i32, movie_id: i32, rating: Option<i32>) -> AddReelProgressParam {
    AddReelProgressParam {
        user_id,
        movie_id,
        rating,
        is_watched: true,
    }
}

/// Tests adding a movie and then listing the reel.
///
/// Expected: Ok(Movie) for the add and the entry in the list
#[tokio::test]
async fn adds_movie_to_reel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let movie = factory::create_canon_movie(db).await?;
    let service = ReelProgressService::new(db);

    assert!(matches!(service.list(user.id).await, Err(AppError::NotFound(_))));

    let added = service.add(add(user.id, movie.id, Some(5))).await?;
    assert_eq!(added.title, movie.title);

    let entries = service.list(user.id).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].rating, Some(5));

    Ok(())
}

/// Tests adding the same movie twice.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_movie_already_in_reel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let movie = factory::create_movie(db).await?;
    let service = ReelProgressService::new(db);

    service.add(add(user.id, movie.id, None)).await?;

    match service.add(add(user.id, movie.id, None)).await {
        Err(AppError::Conflict(message)) => assert_eq!(message, "Movie already in your reel"),
        other => panic!("Expected Conflict, got: {:?}", other),
    }

    Ok(())
}

/// Tests an unknown movie and an out of range rating.
///
/// Expected: NotFound for the movie, Schema validation error for the rating
#[tokio::test]
async fn rejects_unknown_movie_and_bad_rating() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let movie = factory::create_movie(db).await?;
    let service = ReelProgressService::new(db);

    assert!(matches!(
        service.add(add(user.id, movie.id + 100, None)).await,
        Err(AppError::NotFound(_))
    ));
    for rating in [0, 6] {
        assert!(matches!(
            service.add(add(user.id, movie.id, Some(rating))).await,
            Err(AppError::ValidationErr(ValidationError::Schema(_)))
        ));
    }

    Ok(())
}
