use super::*;

/// Tests an empty table yields an empty list.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_list_without_trails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trails = TrailRepository::new(db).get_all().await?;

    assert!(trails.is_empty());

    Ok(())
}

/// Tests trails across parks are listed by name with their park names.
///
/// Expected: Ok with trails sorted by name, each carrying its own park's name
#[tokio::test]
async fn lists_trails_across_parks() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let zion = factory::park::ParkFactory::new(db).name("Zion").build().await?;
    let acadia = factory::park::ParkFactory::new(db)
        .name("Acadia")
        .build()
        .await?;
    factory::trail::TrailFactory::new(db, zion.id)
        .name("Angels Landing")
        .build()
        .await?;
    factory::trail::TrailFactory::new(db, acadia.id)
        .name("Beehive")
        .build()
        .await?;

    let trails = TrailRepository::new(db).get_all().await?;

    assert_eq!(trails.len(), 2);
    assert_eq!(trails[0].name, "Angels Landing");
    assert_eq!(trails[0].park_name, "Zion");
    assert_eq!(trails[1].name, "Beehive");
    assert_eq!(trails[1].park_name, "Acadia");

    Ok(())
}
