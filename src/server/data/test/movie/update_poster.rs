use super::*;

/// Tests replacing a poster URL.
///
/// Expected: Some(movie) carrying the new poster
#[tokio::test]
async fn replaces_poster() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::create_movie(db).await?;

    let repo = MovieRepository::new(db);
    let updated = repo
        .update_poster(&movie.imdb_id, "https://img.example.com/new.jpg".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.poster, "https://img.example.com/new.jpg");
    assert!(updated.updated_at >= movie.updated_at);

    assert!(repo
        .update_poster("tt9999999", "https://img.example.com/x.jpg".to_string())
        .await?
        .is_none());

    Ok(())
}
