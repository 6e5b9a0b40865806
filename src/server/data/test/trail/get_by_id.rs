use super::*;

/// Tests finding an existing trail by ID.
///
/// Expected: Ok(Some(Trail)) including the park name
#[tokio::test]
async fn finds_existing_trail() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (park, created) = factory::create_trail_with_park(db).await?;

    let trail = TrailRepository::new(db).get_by_id(created.id).await?;

    let trail = trail.expect("trail should exist");
    assert_eq!(trail.name, created.name);
    assert_eq!(trail.park_id, park.id);
    assert_eq!(trail.park_name, park.name);

    Ok(())
}

/// Tests a missing trail is reported as absent.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_trail() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trail = TrailRepository::new(db).get_by_id(1).await?;

    assert!(trail.is_none());

    Ok(())
}
