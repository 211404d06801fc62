use super::*;

/// Tests replacing a list mixing a new location and an existing one.
///
/// The owner starts with two links. The new list holds a sentinel location
/// labelled "home" and existing location 42 labelled "work".
///
/// Expected: prior links deleted, exactly one location created, two links with
/// idx 0 "home" and idx 1 "work"
#[tokio::test]
async fn replaces_links_and_creates_only_sentinel_locations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _) = factory::helpers::create_entity_with_addresses(db, 2).await?;
    LocationFactory::new(db).id(42).city("Chatham").build().await?;
    let locations_before = entity::prelude::Location::find().count(db).await?;

    let mut addresses = vec![
        address(
            Location {
                id: Some(-1),
                ..complete_location()
            },
            "home",
        ),
        address(
            Location {
                id: Some(42),
                ..Default::default()
            },
            "work",
        ),
    ];

    let txn = db.begin().await?;
    AddressListService::new(&txn)
        .update_address_list(&owner.pub_id, &mut addresses)
        .await
        .unwrap();
    txn.commit().await?;

    assert_eq!(
        entity::prelude::Location::find().count(db).await?,
        locations_before + 1
    );
    assert_eq!(addresses[1].location.id, Some(42));

    let stored = AddressRepository::new(db)
        .get_by_owner_pub_id(&owner.pub_id)
        .await?;
    let triples: Vec<_> = stored
        .iter()
        .map(|a| (a.location.id, a.idx, a.label.clone()))
        .collect();
    assert_eq!(
        triples,
        vec![
            (addresses[0].location.id, Some(0), Some("home".to_string())),
            (Some(42), Some(1), Some("work".to_string())),
        ]
    );
    assert_eq!(stored[1].location.city.as_deref(), Some("Chatham"));

    Ok(())
}

/// Tests that an absent location id is treated like a negative one.
#[tokio::test]
async fn creates_location_for_absent_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_entity(db).await?;
    let mut addresses = vec![address(complete_location(), "home")];

    AddressListService::new(db)
        .update_address_list(&owner.pub_id, &mut addresses)
        .await
        .unwrap();

    assert!(addresses[0].location.id.is_some_and(|id| id > 0));
    assert_eq!(entity::prelude::Location::find().count(db).await?, 1);

    Ok(())
}

/// Tests that an empty list clears the owner's links.
#[tokio::test]
async fn empty_list_removes_all_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _) = factory::helpers::create_entity_with_addresses(db, 3).await?;

    AddressListService::new(db)
        .update_address_list(&owner.pub_id, &mut [])
        .await
        .unwrap();

    assert!(AddressRepository::new(db)
        .get_by_owner_pub_id(&owner.pub_id)
        .await?
        .is_empty());
    assert_eq!(entity::prelude::Location::find().count(db).await?, 3);

    Ok(())
}

/// Tests replacing with an incomplete new location.
///
/// Expected: Err(IncompleteLocation) with the existing links untouched
#[tokio::test]
async fn rejects_incomplete_new_location_before_reset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _) = factory::helpers::create_entity_with_addresses(db, 2).await?;
    let mut addresses = vec![address(
        Location {
            id: Some(-1),
            zip: None,
            ..complete_location()
        },
        "home",
    )];

    let result = AddressListService::new(db)
        .update_address_list(&owner.pub_id, &mut addresses)
        .await;

    assert!(matches!(
        result,
        Err(AppError::LocationErr(LocationError::IncompleteLocation))
    ));
    assert_eq!(entity::prelude::EntityAddress::find().count(db).await?, 2);

    Ok(())
}

/// Tests replacing the list of an owner that does not exist.
///
/// Expected: StorageError naming the insert-link step
#[tokio::test]
async fn reports_insert_link_step_for_unknown_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mut addresses = vec![address(complete_location(), "home")];

    let txn = db.begin().await?;
    let result = AddressListService::new(&txn)
        .update_address_list("missing", &mut addresses)
        .await;
    txn.rollback().await?;

    match result {
        Err(AppError::StorageErr(StorageError { step, source })) => {
            assert_eq!(step, StorageStep::InsertLink);
            assert!(matches!(source, DbErr::RecordNotInserted));
        }
        other => panic!("expected insert-link storage error, got {:?}", other),
    }
    assert_eq!(entity::prelude::Location::find().count(db).await?, 0);

    Ok(())
}

/// Tests that nothing done by the routine survives a rolled back transaction.
///
/// Expected: the original links are intact after rollback
#[tokio::test]
async fn rollback_restores_previous_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, locations) = factory::helpers::create_entity_with_addresses(db, 2).await?;
    let mut addresses = vec![address(complete_location(), "home")];

    let txn = db.begin().await?;
    AddressListService::new(&txn)
        .update_address_list(&owner.pub_id, &mut addresses)
        .await
        .unwrap();
    txn.rollback().await?;

    let stored = AddressRepository::new(db)
        .get_by_owner_pub_id(&owner.pub_id)
        .await?;
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].location.id, Some(locations[0].id));
    assert_eq!(stored[1].location.id, Some(locations[1].id));
    assert_eq!(entity::prelude::Location::find().count(db).await?, 2);

    Ok(())
}

/// Tests a link reset that fails because the `entity_addresses` table is missing.
///
/// Expected: StorageError naming the reset-links step, no location created
#[tokio::test]
async fn reports_reset_links_step() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BaseEntity)
        .with_table(entity::prelude::Location)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_entity(db).await?;
    let mut addresses = vec![address(complete_location(), "home")];

    let txn = db.begin().await?;
    let result = AddressListService::new(&txn)
        .update_address_list(&owner.pub_id, &mut addresses)
        .await;
    txn.rollback().await?;

    match result {
        Err(AppError::StorageErr(StorageError { step, .. })) => {
            assert_eq!(step, StorageStep::ResetLinks);
        }
        other => panic!("expected reset-links storage error, got {:?}", other),
    }
    assert_eq!(entity::prelude::Location::find().count(db).await?, 0);

    Ok(())
}
