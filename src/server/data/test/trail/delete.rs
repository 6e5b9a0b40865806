use super::*;

/// Tests deleting a trail.
///
/// Expected: Ok(()) and the trail is gone while its park remains
#[tokio::test]
async fn deletes_trail() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (park, trail) = factory::create_trail_with_park(db).await?;
    let repo = TrailRepository::new(db);

    repo.delete(trail.id).await?;

    assert!(!repo.exists(trail.id).await?);
    assert_eq!(repo.get_by_park(park.id).await?, Some(vec![]));

    Ok(())
}

/// Tests deleting a trail that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_trail_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TrailRepository::new(db).delete(8).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
