use super::*;

/// Tests creating an unowned entity.
///
/// Expected: Ok with a UUID public id and no owner
#[tokio::test]
async fn creates_unowned_entity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BaseEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EntityRepository::new(db);
    let created = repo
        .create(CreateEntityParam {
            owner_pub_id: None,
            publicly_readable: true,
        })
        .await?;

    assert_eq!(created.pub_id.len(), 36);
    assert!(uuid::Uuid::parse_str(&created.pub_id).is_ok());
    assert!(created.owner_id.is_none());
    assert!(created.owner_pub_id.is_none());
    assert!(created.publicly_readable);

    let row = entity::prelude::BaseEntity::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.pub_id, created.pub_id);

    Ok(())
}

/// Tests creating an entity owned by another entity.
///
/// Expected: Ok with owner_id resolved from the owner's public id
#[tokio::test]
async fn creates_owned_entity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BaseEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_entity(db).await?;

    let repo = EntityRepository::new(db);
    let created = repo
        .create(CreateEntityParam {
            owner_pub_id: Some(owner.pub_id.clone()),
            publicly_readable: false,
        })
        .await?;

    assert_eq!(created.owner_id, Some(owner.id));
    assert_eq!(created.owner_pub_id, Some(owner.pub_id));

    Ok(())
}

/// Tests creating an entity with an owner public id that matches nothing.
///
/// Expected: Ok with no owner
#[tokio::test]
async fn ignores_unknown_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BaseEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EntityRepository::new(db);
    let created = repo
        .create(CreateEntityParam {
            owner_pub_id: Some("missing".to_string()),
            publicly_readable: false,
        })
        .await?;

    assert!(created.owner_id.is_none());
    assert!(created.owner_pub_id.is_none());

    Ok(())
}

/// Tests that every created entity gets its own public id.
#[tokio::test]
async fn mints_distinct_pub_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BaseEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EntityRepository::new(db);
    let first = repo.create(CreateEntityParam::default()).await?;
    let second = repo.create(CreateEntityParam::default()).await?;

    assert_ne!(first.pub_id, second.pub_id);

    Ok(())
}
