//! Integration tests for Users domain
//!
//! These tests use a real MongoDB via testcontainers to ensure:
//! - Identifiers are the hex form of store-generated ObjectIds
//! - Partial updates never erase fields
//! - NotFound and malformed-id errors are reported distinctly
//!
//! Run with `cargo test -- --ignored` on a machine with Docker.

use domain_users::{MongoUserRepository, User, UserRepository};
use test_utils::{TestDataBuilder, TestMongo, assertions::*};

fn repository(mongo: &TestMongo, builder: &TestDataBuilder) -> MongoUserRepository {
    let db = mongo.database(&builder.name("db", "users"));
    MongoUserRepository::new(&db, "users")
}

fn new_user(builder: &TestDataBuilder, suffix: &str) -> User {
    User {
        id: String::new(),
        username: builder.username(suffix),
        email: builder.email(suffix),
        password_hash: format!("hash-{}", builder.password()),
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_find_one() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("create_and_find_one");
    let repo = repository(&mongo, &builder);

    let input = new_user(&builder, "alice");
    let id = repo.create(input.clone()).await.unwrap();
    assert_hex_id(&id, "created id");

    let found = repo.find_one(&id).await.unwrap();
    assert_eq!(found.id, id);
    assert_eq!(found.username, input.username);
    assert_eq!(found.email, input.email);
    assert_eq!(found.password_hash, input.password_hash);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_empty_then_populated() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("find_all");
    let repo = repository(&mongo, &builder);

    assert!(repo.find_all().await.unwrap().is_empty());

    repo.create(new_user(&builder, "alice")).await.unwrap();
    repo.create(new_user(&builder, "bob")).await.unwrap();

    let users = repo.find_all().await.unwrap();
    assert_eq!(users.len(), 2);
    for user in &users {
        assert_hex_id(&user.id, "listed id");
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_omits_empty_fields() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("update_partial");
    let repo = repository(&mongo, &builder);

    let original = new_user(&builder, "alice");
    let id = repo.create(original.clone()).await.unwrap();

    repo.update(User {
        id: id.clone(),
        email: "changed@example.test".to_string(),
        ..Default::default()
    })
    .await
    .unwrap();

    let updated = repo.find_one(&id).await.unwrap();
    assert_eq!(updated.email, "changed@example.test");
    assert_eq!(updated.username, original.username);
    assert_eq!(updated.password_hash, original.password_hash);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_with_nothing_to_set() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("update_empty");
    let repo = repository(&mongo, &builder);

    let id = repo.create(new_user(&builder, "alice")).await.unwrap();

    let existing = User {
        id,
        ..Default::default()
    };
    repo.update(existing).await.unwrap();

    let missing = User {
        id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
        ..Default::default()
    };
    assert!(repo.update(missing).await.unwrap_err().is_not_found());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_missing_and_malformed_ids() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("missing_and_malformed");
    let repo = repository(&mongo, &builder);

    let missing = "65a1f0c2e4b0a1b2c3d4e5f6";
    assert!(repo.find_one(missing).await.unwrap_err().is_not_found());
    assert!(repo.delete(missing).await.unwrap_err().is_not_found());
    assert!(
        repo.update(User {
            id: missing.to_string(),
            username: "x".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err()
        .is_not_found()
    );

    assert!(repo.find_one("xyz").await.unwrap_err().is_validation());
    assert!(repo.delete("xyz").await.unwrap_err().is_validation());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_is_not_repeatable() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("delete_twice");
    let repo = repository(&mongo, &builder);

    let id = repo.create(new_user(&builder, "alice")).await.unwrap();

    repo.delete(&id).await.unwrap();
    assert!(repo.delete(&id).await.unwrap_err().is_not_found());
    assert!(repo.delete(&id).await.unwrap_err().is_not_found());
    assert!(repo.find_one(&id).await.unwrap_err().is_not_found());
}
