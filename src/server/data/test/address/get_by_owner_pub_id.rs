use super::*;
use test_utils::factory::location::LocationFactory;

/// Tests reading an address list back in list order.
///
/// Links are inserted out of order; the result must follow idx.
///
/// Expected: Ok with addresses ordered by idx, joined with their locations
#[tokio::test]
async fn returns_addresses_in_idx_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_entity(db).await?;
    let second = LocationFactory::new(db).city("Chatham").build().await?;
    let first = factory::create_location(db).await?;
    factory::create_entity_address(db, owner.id, second.id, 1).await?;
    factory::create_entity_address(db, owner.id, first.id, 0).await?;

    let repo = AddressRepository::new(db);
    let addresses = repo.get_by_owner_pub_id(&owner.pub_id).await?;

    assert_eq!(addresses.len(), 2);
    assert_eq!(addresses[0].idx, Some(0));
    assert_eq!(addresses[0].location.id, Some(first.id));
    assert_eq!(addresses[0].location.city.as_deref(), Some("Springfield"));
    assert_eq!(addresses[1].idx, Some(1));
    assert_eq!(addresses[1].location.city.as_deref(), Some("Chatham"));
    assert!(addresses.iter().all(|a| a.location.is_complete()));
    assert!(addresses.iter().all(|a| a.location.change_log.is_empty()));

    Ok(())
}

/// Tests reading the list of an owner without addresses.
///
/// Expected: Ok with an empty list for both existing and unknown owners
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_address_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_entity(db).await?;
    factory::helpers::create_entity_with_addresses(db, 2).await?;

    let repo = AddressRepository::new(db);

    assert!(repo.get_by_owner_pub_id(&owner.pub_id).await?.is_empty());
    assert!(repo.get_by_owner_pub_id("missing").await?.is_empty());

    Ok(())
}
