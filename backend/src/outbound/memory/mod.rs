//! In-memory directory store.
//!
//! Users live in a `BTreeMap` keyed by id. Ids come from a monotonic counter,
//! so key order is insertion order. One `RwLock` guards the map and both id
//! counters, which serialises every mutation and gives readers a consistent
//! snapshot.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{DirectoryRepository, DirectoryRepositoryError};
use crate::domain::{Contact, ContactId, NewContact, NewUser, User, UserId};

#[derive(Debug, Default)]
struct DirectoryState {
    users: BTreeMap<UserId, User>,
    last_user_id: u64,
    last_contact_id: u64,
}

impl DirectoryState {
    fn next_user_id(&mut self) -> Result<UserId, DirectoryRepositoryError> {
        self.last_user_id = self
            .last_user_id
            .checked_add(1)
            .ok_or_else(|| DirectoryRepositoryError::ids_exhausted("user"))?;
        Ok(UserId::new(self.last_user_id))
    }

    fn next_contact_id(&mut self) -> Result<ContactId, DirectoryRepositoryError> {
        self.last_contact_id = self
            .last_contact_id
            .checked_add(1)
            .ok_or_else(|| DirectoryRepositoryError::ids_exhausted("contact"))?;
        Ok(ContactId::new(self.last_contact_id))
    }
}

/// Process-local [`DirectoryRepository`] backed by a locked map.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use phonebook::domain::DirectoryService;
/// use phonebook::outbound::memory::MemoryDirectoryRepository;
///
/// let service = DirectoryService::new(Arc::new(MemoryDirectoryRepository::new()));
/// # let _ = service;
/// ```
#[derive(Debug, Default)]
pub struct MemoryDirectoryRepository {
    state: RwLock<DirectoryState>,
}

impl MemoryDirectoryRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DirectoryRepository for MemoryDirectoryRepository {
    async fn list_users(&self) -> Result<Vec<User>, DirectoryRepositoryError> {
        let state = self.state.read().await;
        Ok(state.users.values().cloned().collect())
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>, DirectoryRepositoryError> {
        let state = self.state.read().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn search_users(&self, needle: &str) -> Result<Vec<User>, DirectoryRepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .rev()
            .filter(|user| user.matches_name(needle))
            .cloned()
            .collect())
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, DirectoryRepositoryError> {
        let mut state = self.state.write().await;
        let id = state.next_user_id()?;
        let stored = User::new(id, user);
        state.users.insert(id, stored.clone());
        debug!(user_id = %id, total = state.users.len(), "user inserted");
        Ok(stored)
    }

    async fn remove_user(&self, id: UserId) -> Result<Option<User>, DirectoryRepositoryError> {
        let mut state = self.state.write().await;
        Ok(state.users.remove(&id))
    }

    async fn append_contact(
        &self,
        owner: UserId,
        contact: NewContact,
    ) -> Result<Option<Contact>, DirectoryRepositoryError> {
        let mut state = self.state.write().await;
        if !state.users.contains_key(&owner) {
            return Ok(None);
        }
        let id = state.next_contact_id()?;
        let stored = Contact::new(id, contact);
        if let Some(user) = state.users.get_mut(&owner) {
            user.push_contact(stored.clone());
        }
        Ok(Some(stored))
    }
}

#[cfg(test)]
mod tests {
    //! Behavioural tests for the in-memory store.

    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;
    use crate::domain::{ContactDraft, UserDraft};
    use rstest::{fixture, rstest};

    fn new_user(first: &str, last: &str) -> NewUser {
        NewUser::try_from(UserDraft {
            first_name: Some(first.to_owned()),
            last_name: Some(last.to_owned()),
        })
        .expect("valid user")
    }

    fn new_contact(first: &str) -> NewContact {
        NewContact::try_from(ContactDraft {
            first_name: Some(first.to_owned()),
            last_name: Some("Harper".to_owned()),
            phone: Some("5555555555".to_owned()),
            email: Some("art@gmail.com".to_owned()),
        })
        .expect("valid contact")
    }

    #[fixture]
    fn repo() -> MemoryDirectoryRepository {
        MemoryDirectoryRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn empty_store_lists_nothing(repo: MemoryDirectoryRepository) {
        assert!(repo.list_users().await.expect("list").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn list_keeps_insertion_order(repo: MemoryDirectoryRepository) {
        for name in ["Alex", "Mike", "Max"] {
            repo.insert_user(new_user(name, "Smith")).await.expect("insert");
        }
        let names: Vec<String> = repo
            .list_users()
            .await
            .expect("list")
            .iter()
            .map(|user| user.first_name().to_owned())
            .collect();
        assert_eq!(names, ["Alex", "Mike", "Max"]);
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_not_reused_after_delete(repo: MemoryDirectoryRepository) {
        let first = repo.insert_user(new_user("Alex", "Smith")).await.expect("insert");
        repo.remove_user(first.id()).await.expect("remove");
        let second = repo.insert_user(new_user("Alex", "Smith")).await.expect("insert");
        assert!(second.id() > first.id());
    }

    #[rstest]
    #[tokio::test]
    async fn search_returns_newest_match_first(repo: MemoryDirectoryRepository) {
        repo.insert_user(new_user("Max", "Payne")).await.expect("insert");
        repo.insert_user(new_user("Alex", "Smith")).await.expect("insert");
        let newest = repo.insert_user(new_user("Max", "Smith")).await.expect("insert");

        let found = repo.search_users("max").await.expect("search");
        assert_eq!(found.len(), 2);
        assert_eq!(found.first().map(User::id), Some(newest.id()));
    }

    #[rstest]
    #[tokio::test]
    async fn search_without_match_is_empty(repo: MemoryDirectoryRepository) {
        repo.insert_user(new_user("Max", "Smith")).await.expect("insert");
        assert!(repo.search_users("jonas").await.expect("search").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_owned_contacts(repo: MemoryDirectoryRepository) {
        let user = repo.insert_user(new_user("Jordan", "Smith")).await.expect("insert");
        repo.append_contact(user.id(), new_contact("Arthur"))
            .await
            .expect("append");

        let removed = repo
            .remove_user(user.id())
            .await
            .expect("remove")
            .expect("user existed");
        assert_eq!(removed.contacts().len(), 1);
        assert!(repo.find_user(user.id()).await.expect("find").is_none());
        assert!(repo.remove_user(user.id()).await.expect("remove").is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn append_contact_to_unknown_user_writes_nothing(repo: MemoryDirectoryRepository) {
        let outcome = repo
            .append_contact(UserId::new(42), new_contact("Arthur"))
            .await
            .expect("append");
        assert!(outcome.is_none());

        let user = repo.insert_user(new_user("Jordan", "Smith")).await.expect("insert");
        let contact = repo
            .append_contact(user.id(), new_contact("Lee"))
            .await
            .expect("append")
            .expect("owner exists");
        assert_eq!(contact.id(), ContactId::new(1));
    }

    #[rstest]
    #[tokio::test]
    async fn contacts_keep_insertion_order(repo: MemoryDirectoryRepository) {
        let user = repo.insert_user(new_user("Jordan", "Smith")).await.expect("insert");
        for name in ["Arthur", "Lee", "Ann"] {
            repo.append_contact(user.id(), new_contact(name))
                .await
                .expect("append");
        }
        let stored = repo
            .find_user(user.id())
            .await
            .expect("find")
            .expect("user exists");
        let names: Vec<&str> = stored.contacts().iter().map(Contact::first_name).collect();
        assert_eq!(names, ["Arthur", "Lee", "Ann"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_get_distinct_ids() {
        let repo = Arc::new(MemoryDirectoryRepository::new());
        let tasks: Vec<_> = (0..64)
            .map(|n| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.insert_user(new_user(&format!("User{n}"), "Load"))
                        .await
                        .map(|user| user.id())
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for task in tasks {
            let id = task.await.expect("task joined").expect("insert");
            assert!(ids.insert(id), "duplicate id {id}");
        }
        assert_eq!(repo.list_users().await.expect("list").len(), 64);
    }
}
