use super::*;

/// Tests counting the trails that reference a park.
///
/// Expected: number of trails in that park only
#[tokio::test]
async fn counts_trails_per_park() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let busy = factory::create_park(db).await?;
    let quiet = factory::create_park(db).await?;
    factory::create_trail(db, busy.id).await?;
    factory::create_trail(db, busy.id).await?;

    let repo = TrailRepository::new(db);

    assert_eq!(repo.count_by_park(busy.id).await?, 2);
    assert_eq!(repo.count_by_park(quiet.id).await?, 0);

    Ok(())
}

/// Tests existence checks by ID and name.
///
/// Expected: true only for stored values
#[tokio::test]
async fn checks_existence() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trail) = factory::create_trail_with_park(db).await?;
    let repo = TrailRepository::new(db);

    assert!(repo.exists(trail.id).await?);
    assert!(!repo.exists(trail.id + 100).await?);
    assert!(repo.exists_by_name(&trail.name).await?);
    assert!(!repo.exists_by_name("Unknown Trail").await?);

    Ok(())
}
