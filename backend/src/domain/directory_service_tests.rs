//! Tests for the user directory service.

use std::sync::Arc;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockDirectoryRepository;
use crate::domain::validation::{FieldName, ViolationKind};

fn draft(first: Option<&str>, last: Option<&str>) -> UserDraft {
    UserDraft {
        first_name: first.map(str::to_owned),
        last_name: last.map(str::to_owned),
    }
}

fn stored_user(id: u64, first: &str) -> User {
    let input = NewUser::try_from(draft(Some(first), Some("Smith"))).expect("valid user");
    User::new(UserId::new(id), input)
}

#[tokio::test]
async fn create_user_stores_validated_input() {
    let mut repo = MockDirectoryRepository::new();
    repo.expect_insert_user()
        .times(1)
        .withf(|input| input.first_name() == "Alex" && input.last_name() == Some("Smith"))
        .returning(|input| Ok(User::new(UserId::new(1), input)));

    let service = DirectoryService::new(Arc::new(repo));
    let user = service
        .create_user(draft(Some("Alex"), Some("Smith")))
        .await
        .expect("user created");

    assert_eq!(user.first_name(), "Alex");
    assert_eq!(user.last_name(), Some("Smith"));
}

#[tokio::test]
async fn create_user_rejects_missing_first_name_without_touching_store() {
    let mut repo = MockDirectoryRepository::new();
    repo.expect_insert_user().times(0);

    let service = DirectoryService::new(Arc::new(repo));
    let error = service
        .create_user(draft(None, Some("Smith")))
        .await
        .expect_err("validation failure");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    let violations = error.violations().expect("violations attached");
    assert_eq!(
        violations.get(FieldName::FIRST_NAME),
        Some(ViolationKind::NotNull)
    );
}

#[tokio::test]
async fn search_users_lowercases_and_trims_the_needle() {
    let mut repo = MockDirectoryRepository::new();
    repo.expect_search_users()
        .times(1)
        .withf(|needle| needle == "max")
        .returning(|_| Ok(vec![stored_user(2, "Max")]));

    let service = DirectoryService::new(Arc::new(repo));
    let users = service.search_users("  MAX ").await.expect("search");
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn get_user_maps_absence_to_not_found() {
    let mut repo = MockDirectoryRepository::new();
    repo.expect_find_user().returning(|_| Ok(None));

    let service = DirectoryService::new(Arc::new(repo));
    let error = service
        .get_user(UserId::new(5))
        .await
        .expect_err("missing user");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "user 5 not found");
}

#[tokio::test]
async fn delete_user_returns_removed_user() {
    let mut repo = MockDirectoryRepository::new();
    repo.expect_remove_user()
        .withf(|id| *id == UserId::new(3))
        .returning(|id| Ok(Some(stored_user(id.get(), "Mike"))));

    let service = DirectoryService::new(Arc::new(repo));
    let removed = service.delete_user(UserId::new(3)).await.expect("deleted");
    assert_eq!(removed.first_name(), "Mike");
}

#[tokio::test]
async fn delete_user_maps_absence_to_not_found() {
    let mut repo = MockDirectoryRepository::new();
    repo.expect_remove_user().returning(|_| Ok(None));

    let service = DirectoryService::new(Arc::new(repo));
    let error = service
        .delete_user(UserId::new(99))
        .await
        .expect_err("missing user");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn create_user_maps_exhausted_ids_to_internal_error() {
    let mut repo = MockDirectoryRepository::new();
    repo.expect_insert_user()
        .times(1)
        .return_once(|_| Err(DirectoryRepositoryError::ids_exhausted("user")));

    let service = DirectoryService::new(Arc::new(repo));
    let error = service
        .create_user(draft(Some("Alex"), None))
        .await
        .expect_err("store failure");
    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), "directory store ran out of user ids");
}
