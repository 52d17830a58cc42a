use super::*;

/// Tests searching without a title.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn requires_title() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MovieService::new(db);

    for title in [None, Some(""), Some("   ")] {
        match service.search(title).await {
            Err(AppError::BadRequest(message)) => {
                assert_eq!(message, "Title search parameter required")
            }
            other => panic!("Expected BadRequest, got: {:?}", other),
        }
    }

    Ok(())
}

/// Tests exact title matching, including remakes sharing a title.
///
/// Expected: both movies with the title, none for a partial title
#[tokio::test]
async fn matches_exact_title() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::movie::MovieFactory::new(db).title("Scarface").year("1932").build().await?;
    factory::movie::MovieFactory::new(db).title("Scarface").year("1983").build().await?;

    let service = MovieService::new(db);

    assert_eq!(service.search(Some("Scarface")).await?.len(), 2);
    assert!(service.search(Some("Scar")).await?.is_empty());

    Ok(())
}
