use super::*;

/// Tests replacing a poster with a valid URL.
///
/// Expected: Ok(Movie) with the new poster
#[tokio::test]
async fn updates_poster() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::create_canon_movie(db).await?;

    let updated = MovieService::new(db)
        .update_poster(&movie.imdb_id, "https://posters.example.com/new.jpg".to_string())
        .await?;

    assert_eq!(updated.poster, "https://posters.example.com/new.jpg");

    Ok(())
}

/// Tests an invalid poster URL and an unknown movie.
///
/// Expected: BadRequest for the URL, NotFound for the movie
#[tokio::test]
async fn rejects_bad_url_and_unknown_movie() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::create_movie(db).await?;
    let service = MovieService::new(db);

    match service
        .update_poster(&movie.imdb_id, "not a url".to_string())
        .await
    {
        Err(AppError::BadRequest(message)) => {
            assert_eq!(message, "Invalid URL format for poster")
        }
        other => panic!("Expected BadRequest, got: {:?}", other),
    }

    assert!(matches!(
        service
            .update_poster("tt9999999", "https://posters.example.com/x.jpg".to_string())
            .await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
