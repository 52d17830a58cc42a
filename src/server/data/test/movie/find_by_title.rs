use super::*;

/// Tests exact title matching.
///
/// Expected: both movies sharing the title, none for a partial title
#[tokio::test]
async fn matches_exact_title_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::movie::MovieFactory::new(db)
        .title("Scarface")
        .year("1932")
        .build()
        .await?;
    factory::movie::MovieFactory::new(db)
        .title("Scarface")
        .year("1983")
        .build()
        .await?;
    factory::movie::MovieFactory::new(db)
        .title("Vertigo")
        .build()
        .await?;

    let repo = MovieRepository::new(db);

    let found = repo.find_by_title("Scarface").await?;
    let partial = repo.find_by_title("Scar").await?;

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|m| m.title == "Scarface"));
    assert!(partial.is_empty());

    Ok(())
}
