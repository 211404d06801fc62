use super::*;

fn springfield() -> CreateLocationParam {
    CreateLocationParam {
        address1: "1 Main St".to_string(),
        address2: Some("Apt 2".to_string()),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip: "62701".to_string(),
        lat: 39.799,
        lng: -89.644,
    }
}

/// Tests inserting a location row.
///
/// Expected: Ok with a new id and every column stored as given
#[tokio::test]
async fn creates_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Location)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocationRepository::new(db);
    let id = repo.create(springfield()).await?;

    let row = entity::prelude::Location::find_by_id(id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.address1, "1 Main St");
    assert_eq!(row.address2.as_deref(), Some("Apt 2"));
    assert_eq!(row.city, "Springfield");
    assert_eq!(row.state, "IL");
    assert_eq!(row.zip, "62701");
    assert_eq!(row.lat, 39.799);
    assert_eq!(row.lng, -89.644);

    Ok(())
}

/// Tests that identical locations are inserted as separate rows.
///
/// Expected: Ok with two distinct ids
#[tokio::test]
async fn creates_duplicate_as_new_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Location)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocationRepository::new(db);
    let first = repo.create(springfield()).await?;
    let second = repo.create(springfield()).await?;

    assert_ne!(first, second);
    assert_eq!(entity::prelude::Location::find().all(db).await?.len(), 2);

    Ok(())
}
