use super::*;
use test_utils::factory::user::UserFactory;

/// Tests finding a user through its entity's public id.
///
/// Expected: Ok(Some) with entity and user fields combined
#[tokio::test]
async fn finds_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (entity, _) = UserFactory::new(db)
        .legal_id("123-45-6789", "SSN")
        .active(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_pub_id(&entity.pub_id).await?.unwrap();

    assert_eq!(user.entity.id, entity.id);
    assert_eq!(user.entity.pub_id, entity.pub_id);
    assert_eq!(user.legal_id.as_deref(), Some("123-45-6789"));
    assert!(!user.active);

    Ok(())
}

/// Tests looking up an entity that exists but is not a user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_non_user_entity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let entity = factory::create_entity(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_pub_id(&entity.pub_id).await?.is_none());
    assert!(repo.find_by_pub_id("missing").await?.is_none());

    Ok(())
}
