use super::*;

/// Tests creating a park assigns an ID and persists every field.
///
/// Expected: Ok(Park) retrievable by its new ID with identical fields
#[tokio::test]
async fn creates_park_and_assigns_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ParkRepository::new(db);
    let park = repo
        .create(CreateParkParam {
            name: "Yellowstone".to_string(),
            established: date(1872, 3, 1),
            state: "WY".to_string(),
        })
        .await?;

    assert!(park.id > 0);
    assert_eq!(park.name, "Yellowstone");
    assert_eq!(park.established, date(1872, 3, 1));
    assert_eq!(park.state, "WY");

    let stored = repo.get_by_id(park.id).await?;
    assert_eq!(stored, Some(park));

    Ok(())
}

/// Tests two creates get distinct identifiers.
///
/// Expected: Ok with different IDs
#[tokio::test]
async fn assigns_unused_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_park(db).await?;

    let repo = ParkRepository::new(db);
    let park = repo
        .create(CreateParkParam {
            name: "Zion".to_string(),
            established: date(1919, 11, 19),
            state: "UT".to_string(),
        })
        .await?;

    assert_ne!(park.id, existing.id);

    Ok(())
}

/// Tests the unique index on name is reported as a conflict.
///
/// Creates the same park twice without a pre-check, as two racing requests would.
///
/// Expected: Err(AppError::Conflict) and only one stored park
#[tokio::test]
async fn duplicate_name_is_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ParkRepository::new(db);
    let param = CreateParkParam {
        name: "Yellowstone".to_string(),
        established: date(1872, 3, 1),
        state: "WY".to_string(),
    };

    repo.create(param.clone()).await?;
    let result = repo.create(param).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    let stored = entity::prelude::Park::find().all(db).await?;
    assert_eq!(stored.len(), 1);

    Ok(())
}

/// Tests a park with an unknown establishment date is stored with a null date.
///
/// Expected: Ok(Park) with `established` of None
#[tokio::test]
async fn stores_unknown_establishment_date() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ParkRepository::new(db);
    let park = repo
        .create(CreateParkParam {
            name: "Gateway Arch".to_string(),
            established: None,
            state: "MO".to_string(),
        })
        .await?;

    let stored = repo.get_by_id(park.id).await?;
    assert_eq!(stored.map(|p| p.established), Some(None));

    Ok(())
}
