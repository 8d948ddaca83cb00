//! Unit tests for mock user repository

use crate::domain::entities::user::NewUser;
use crate::domain::value_objects::Credential;
use crate::errors::ErrorKind;
use crate::repositories::user::{MockUserRepository, UserRepository};

fn new_user(login: &str) -> NewUser {
    NewUser {
        login: login.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: format!("{}@example.com", login),
        credential: Credential::new(vec![1; 64], vec![2; 64]),
    }
}

#[tokio::test]
async fn test_mock_repository_create_and_find() {
    let repo = MockUserRepository::new();

    let created = repo.create(new_user("bob")).await.unwrap();
    assert_eq!(created.id, 1);

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found.unwrap().login, "bob");

    let by_login = repo.find_by_login("bob").await.unwrap();
    assert_eq!(by_login.unwrap().id, created.id);
}

#[tokio::test]
async fn test_mock_repository_duplicate_login() {
    let repo = MockUserRepository::new();

    repo.create(new_user("carol")).await.unwrap();
    let err = repo.create(new_user("carol")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn test_mock_repository_missing_user() {
    let repo = MockUserRepository::new();
    assert!(repo.find_by_id(99).await.unwrap().is_none());
    assert!(repo.find_by_login("nobody").await.unwrap().is_none());
}
