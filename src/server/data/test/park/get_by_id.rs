use super::*;

/// Tests finding an existing park by ID.
///
/// Expected: Ok(Some(Park)) with matching data
#[tokio::test]
async fn finds_existing_park() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::park::ParkFactory::new(db)
        .name("Yosemite")
        .state("CA")
        .build()
        .await?;

    let park = ParkRepository::new(db).get_by_id(created.id).await?;

    let park = park.expect("park should exist");
    assert_eq!(park.id, created.id);
    assert_eq!(park.name, "Yosemite");
    assert_eq!(park.state, "CA");

    Ok(())
}

/// Tests absence is a successful outcome, not an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_park() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let park = ParkRepository::new(db).get_by_id(404).await?;

    assert!(park.is_none());

    Ok(())
}
