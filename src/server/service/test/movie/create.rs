use super::*;

fn submission(imdb_id: &str) -> CreateMovieDto {
    CreateMovieDto {
        title: "Chinatown".to_string(),
        year: "1974".to_string(),
        director: "Roman Polanski".to_string(),
        genre: vec!["Drama".to_string(), "Mystery".to_string()],
        plot: None,
        actors: vec!["Jack Nicholson".to_string()],
        imdb_id: imdb_id.to_string(),
        poster: "https://posters.example.com/chinatown.jpg".to_string(),
    }
}

/// Tests that submitted movies are owned by the caller and outside the canon.
///
/// Expected: Ok(Movie) with is_reel_canon = false and created_by = caller
#[tokio::test]
async fn creates_user_owned_movie() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let movie = MovieService::new(db)
        .create(CreateMovieParam::from_dto(submission("tt0071315"), user.id))
        .await?;

    assert!(!movie.is_reel_canon);
    assert_eq!(movie.created_by, Some(user.id));
    assert_eq!(movie.genre, vec!["Drama", "Mystery"]);

    Ok(())
}

/// Tests a submission reusing a known IMDb id.
///
/// Expected: Err(AppError::DbErr) with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_imdb_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::movie::MovieFactory::new(db)
        .imdb_id("tt0071315")
        .build()
        .await?;

    let result = MovieService::new(db)
        .create(CreateMovieParam::from_dto(submission("tt0071315"), user.id))
        .await;

    match result {
        Err(AppError::DbErr(err)) => assert!(matches!(
            err.sql_err(),
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
        )),
        other => panic!("Expected unique violation, got: {:?}", other),
    }

    Ok(())
}

/// Tests a malformed year.
///
/// Expected: Err(ValidationError::Schema)
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let mut dto = submission("tt0071315");
    dto.year = "74".to_string();

    let result = MovieService::new(db)
        .create(CreateMovieParam::from_dto(dto, user.id))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::Schema(_)))
    ));

    Ok(())
}
