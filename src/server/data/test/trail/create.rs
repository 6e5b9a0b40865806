use super::*;

/// Tests creating a trail resolves the park name on the returned model.
///
/// Expected: Ok(Trail) with assigned ID, every input field and the park's name
#[tokio::test]
async fn creates_trail_with_park_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::ParkFactory::new(db)
        .name("Yellowstone")
        .build()
        .await?;

    let repo = TrailRepository::new(db);
    let trail = repo
        .create(CreateTrailParam {
            name: "Old Faithful Loop".to_string(),
            distance: 0.7,
            difficulty: Difficulty::Easy,
            elevation_gain: 20.0,
            park_id: park.id,
        })
        .await?;

    assert!(trail.id > 0);
    assert_eq!(trail.name, "Old Faithful Loop");
    assert_eq!(trail.distance, 0.7);
    assert_eq!(trail.difficulty, Difficulty::Easy);
    assert_eq!(trail.elevation_gain, 20.0);
    assert_eq!(trail.park_id, park.id);
    assert_eq!(trail.park_name, "Yellowstone");

    assert_eq!(repo.get_by_id(trail.id).await?, Some(trail));

    Ok(())
}

/// Tests the unique index on trail name.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn duplicate_name_is_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (park, existing) = factory::create_trail_with_park(db).await?;

    let result = TrailRepository::new(db)
        .create(CreateTrailParam {
            name: existing.name.clone(),
            distance: 1.0,
            difficulty: Difficulty::Difficult,
            elevation_gain: 100.0,
            park_id: park.id,
        })
        .await;

    match result {
        Err(AppError::Conflict(message)) => assert!(message.contains(&existing.name)),
        other => panic!("Expected Conflict error, got: {:?}", other),
    }

    Ok(())
}

/// Tests the foreign key rejects a trail for a park that does not exist.
///
/// Expected: Err(AppError::Conflict) naming the park
#[tokio::test]
async fn missing_park_is_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new().with_park_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TrailRepository::new(db)
        .create(CreateTrailParam {
            name: "Orphan".to_string(),
            distance: 1.0,
            difficulty: Difficulty::Easy,
            elevation_gain: 0.0,
            park_id: 777,
        })
        .await;

    match result {
        Err(AppError::Conflict(message)) => assert!(message.contains("777")),
        other => panic!("Expected Conflict error, got: {:?}", other),
    }

    Ok(())
}
