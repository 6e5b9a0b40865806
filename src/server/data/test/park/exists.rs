use super::*;

/// Tests existence checks by ID.
///
/// Expected: true for a stored park, false otherwise
#[tokio::test]
async fn checks_existence_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::create_park(db).await?;
    let repo = ParkRepository::new(db);

    assert!(repo.exists(park.id).await?);
    assert!(!repo.exists(park.id + 1).await?);

    Ok(())
}

/// Tests existence checks by name, ignoring surrounding whitespace.
///
/// Expected: true for a stored name, false otherwise
#[tokio::test]
async fn checks_existence_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::park::ParkFactory::new(db)
        .name("Olympic")
        .build()
        .await?;
    let repo = ParkRepository::new(db);

    assert!(repo.exists_by_name("Olympic").await?);
    assert!(repo.exists_by_name(" Olympic ").await?);
    assert!(!repo.exists_by_name("Everglades").await?);

    Ok(())
}
