use super::*;

/// Tests removing another user's record as an admin.
///
/// Expected: Ok, then NotFound on a repeat, NotFound for an unknown user
#[tokio::test]
async fn removes_any_users_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let movie = factory::create_movie(db).await?;
    factory::create_reel_progress(db, user.id, movie.id).await?;

    let service = ReelProgressService::new(db);

    service.admin_remove(user.id, movie.id).await?;

    match service.admin_remove(user.id, movie.id).await {
        Err(AppError::NotFound(message)) => assert_eq!(
            message,
            format!("User has no Reel Progress record for movie with id: {}", movie.id)
        ),
        other => panic!("Expected NotFound, got: {:?}", other),
    }

    match service.admin_remove(user.id + 50, movie.id).await {
        Err(AppError::NotFound(message)) => {
            assert_eq!(message, format!("User not found with id: {}", user.id + 50))
        }
        other => panic!("Expected NotFound, got: {:?}", other),
    }

    Ok(())
}
