use super::*;

/// Tests an empty table yields an empty list.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_list_without_parks() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let parks = ParkRepository::new(db).get_all().await?;

    assert!(parks.is_empty());

    Ok(())
}

/// Tests parks are returned ordered by name.
///
/// Expected: Ok with parks sorted alphabetically
#[tokio::test]
async fn returns_parks_ordered_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::park::ParkFactory::new(db).name("Zion").build().await?;
    factory::park::ParkFactory::new(db).name("Acadia").build().await?;
    factory::park::ParkFactory::new(db).name("Glacier").build().await?;

    let parks = ParkRepository::new(db).get_all().await?;
    let names: Vec<&str> = parks.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(names, vec!["Acadia", "Glacier", "Zion"]);

    Ok(())
}
