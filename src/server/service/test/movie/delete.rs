use super::*;

/// Tests that canon movies cannot be deleted by anyone, admins included.
///
/// Expected: Err(AppError::Forbidden) and the movie still exists
#[tokio::test]
async fn refuses_to_delete_canon_movie() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::user::create_admin(db).await?);
    let movie = factory::movie::MovieFactory::new(db)
        .reel_canon(true)
        .created_by(admin.id)
        .build()
        .await?;

    let service = MovieService::new(db);

    match service.delete(&movie.imdb_id, &admin).await {
        Err(AppError::Forbidden(message)) => {
            assert_eq!(message, "Reel Canon movies cannot be deleted")
        }
        other => panic!("Expected Forbidden, got: {:?}", other),
    }
    assert!(service.get(&movie.imdb_id).await.is_ok());

    Ok(())
}

/// Tests deleting another user's movie.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn refuses_to_delete_other_users_movie() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = User::from_entity(factory::create_user(db).await?);
    let movie = factory::movie::MovieFactory::new(db)
        .created_by(owner.id)
        .build()
        .await?;

    let result = MovieService::new(db).delete(&movie.imdb_id, &other).await;

    match result {
        Err(AppError::Forbidden(message)) => {
            assert_eq!(message, "Cannot delete movies created by other users")
        }
        other => panic!("Expected Forbidden, got: {:?}", other),
    }

    Ok(())
}

/// Tests the owner deleting their movie.
///
/// Expected: Ok(Movie), then NotFound on lookup
#[tokio::test]
async fn deletes_own_movie() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = User::from_entity(factory::create_user(db).await?);
    let movie = factory::movie::MovieFactory::new(db)
        .created_by(owner.id)
        .build()
        .await?;

    let service = MovieService::new(db);
    let deleted = service.delete(&movie.imdb_id, &owner).await?;

    assert_eq!(deleted.id, movie.id);
    assert!(matches!(
        service.get(&movie.imdb_id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
