use super::*;

/// Tests only the trails of the requested park are returned.
///
/// Expected: Ok(Some(trails)) limited to the park
#[tokio::test]
async fn returns_trails_of_park() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (park, trail) = factory::create_trail_with_park(db).await?;
    factory::create_trail_with_park(db).await?;

    let trails = TrailRepository::new(db).get_by_park(park.id).await?;

    let trails = trails.expect("park should exist");
    assert_eq!(trails.len(), 1);
    assert_eq!(trails[0].id, trail.id);
    assert_eq!(trails[0].park_name, park.name);

    Ok(())
}

/// Tests a park without trails yields an empty list rather than absence.
///
/// Expected: Ok(Some(vec![]))
#[tokio::test]
async fn returns_empty_list_for_park_without_trails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::create_park(db).await?;

    let trails = TrailRepository::new(db).get_by_park(park.id).await?;

    assert_eq!(trails, Some(vec![]));

    Ok(())
}

/// Tests a missing park signals absence, not an empty list.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_park() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trails = TrailRepository::new(db).get_by_park(31).await?;

    assert!(trails.is_none());

    Ok(())
}
