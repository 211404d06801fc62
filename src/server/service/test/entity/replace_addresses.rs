use super::*;

/// Tests replacing an address list with a kept address and a new one to geocode.
///
/// Expected: Ok with the stored list in input order and the promoted change records
#[tokio::test]
async fn replaces_and_reads_back_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, locations) = factory::helpers::create_entity_with_addresses(db, 2).await?;
    let geocoder = StubGeocoder::with_matches(vec![springfield_match("Springfield Heights")]);
    let kept = Location {
        id: Some(locations[1].id),
        ..complete_location()
    };
    let new = Location {
        id: Some(-1),
        ..address_only_location()
    };

    let (stored, change_desc) = EntityService::new(db, &geocoder)
        .replace_addresses(
            &owner.pub_id,
            vec![address(new, "cabin"), address(kept, "home")],
        )
        .await
        .unwrap();

    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].label.as_deref(), Some("cabin"));
    assert_eq!(stored[0].location.city.as_deref(), Some("Springfield Heights"));
    assert_eq!(stored[1].location.id, Some(locations[1].id));
    assert_eq!(stored[1].idx, Some(1));
    assert_eq!(
        change_desc,
        vec![
            "Changed 'city' from 'Springfield' to 'Springfield Heights' on address 1.".to_string()
        ]
    );
    assert_eq!(entity::prelude::Location::find().count(db).await?, 3);

    Ok(())
}

/// Tests replacing the list of an unknown entity.
///
/// Expected: Err(NotFound) before any geocoder request
#[tokio::test]
async fn fails_for_unknown_entity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let geocoder = StubGeocoder::with_matches(vec![springfield_match("Springfield")]);

    let result = EntityService::new(db, &geocoder)
        .replace_addresses("missing", vec![address(address_only_location(), "home")])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(geocoder.requests().is_empty());

    Ok(())
}

/// Tests that a completion failure leaves the stored list untouched.
///
/// Expected: Err(AddressCompletionErr) with the original links intact
#[tokio::test]
async fn keeps_list_when_completion_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _) = factory::helpers::create_entity_with_addresses(db, 2).await?;
    let geocoder = StubGeocoder::failing("REQUEST_DENIED");

    let result = EntityService::new(db, &geocoder)
        .replace_addresses(&owner.pub_id, vec![address(address_only_location(), "home")])
        .await;

    assert!(matches!(result, Err(AppError::AddressCompletionErr(_))));
    assert_eq!(entity::prelude::EntityAddress::find().count(db).await?, 2);

    Ok(())
}

/// Tests that a stored location sent with address fields but no coordinates is
/// linked as is.
///
/// Expected: no geocoder request, no change records, stored location unchanged
#[tokio::test]
async fn links_stored_location_without_geocoding() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, locations) = factory::helpers::create_entity_with_addresses(db, 1).await?;
    let geocoder = StubGeocoder::with_matches(vec![springfield_match("Springfield Heights")]);
    let stored_location = Location {
        id: Some(locations[0].id),
        ..address_only_location()
    };

    let (stored, change_desc) = EntityService::new(db, &geocoder)
        .replace_addresses(&owner.pub_id, vec![address(stored_location, "home")])
        .await
        .unwrap();

    assert!(change_desc.is_empty());
    assert!(geocoder.requests().is_empty());
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].location.id, Some(locations[0].id));
    assert_eq!(stored[0].location.city.as_deref(), Some("Springfield"));
    assert_eq!(entity::prelude::Location::find().count(db).await?, 1);

    Ok(())
}

/// Tests replacing a list with a bare reference to location 42 labelled "work".
///
/// Expected: Ok with the reference linked at idx 0 and its stored fields read back
#[tokio::test]
async fn links_bare_location_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_entity(db).await?;
    LocationFactory::new(db).id(42).city("Chatham").build().await?;
    let geocoder = StubGeocoder::with_matches(vec![]);
    let reference = Location {
        id: Some(42),
        ..Default::default()
    };

    let (stored, change_desc) = EntityService::new(db, &geocoder)
        .replace_addresses(&owner.pub_id, vec![address(reference, "work")])
        .await
        .unwrap();

    assert!(change_desc.is_empty());
    assert!(geocoder.requests().is_empty());
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].location.id, Some(42));
    assert_eq!(stored[0].idx, Some(0));
    assert_eq!(stored[0].label.as_deref(), Some("work"));
    assert_eq!(stored[0].location.city.as_deref(), Some("Chatham"));

    Ok(())
}
