//! User directory service.
//!
//! Implements the user driving ports on top of a [`DirectoryRepository`].
//! Validation happens before the repository is touched, so a rejected
//! request never mutates the store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{
    DirectoryRepository, DirectoryRepositoryError, UsersCommand, UsersQuery,
};
use crate::domain::{Error, NewUser, User, UserDraft, UserId};

pub(crate) fn map_repository_error(error: DirectoryRepositoryError) -> Error {
    error!(%error, "directory store failure");
    match error {
        DirectoryRepositoryError::IdsExhausted { kind } => {
            Error::internal(format!("directory store ran out of {kind} ids"))
        }
    }
}

pub(crate) fn user_not_found(id: UserId) -> Error {
    Error::not_found(format!("user {id} not found"))
}

/// Service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct DirectoryService<R> {
    repo: Arc<R>,
}

impl<R> DirectoryService<R> {
    /// Create a service over a shared repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UsersQuery for DirectoryService<R>
where
    R: DirectoryRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repo.list_users().await.map_err(map_repository_error)
    }

    async fn search_users(&self, name: &str) -> Result<Vec<User>, Error> {
        let needle = name.trim().to_lowercase();
        self.repo
            .search_users(&needle)
            .await
            .map_err(map_repository_error)
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.repo
            .find_user(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| user_not_found(id))
    }
}

#[async_trait]
impl<R> UsersCommand for DirectoryService<R>
where
    R: DirectoryRepository,
{
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        let input = NewUser::try_from(draft)?;
        let user = self
            .repo
            .insert_user(input)
            .await
            .map_err(map_repository_error)?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> Result<User, Error> {
        let removed = self
            .repo
            .remove_user(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| user_not_found(id))?;
        info!(
            user_id = %id,
            contacts = removed.contacts().len(),
            "user deleted"
        );
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "directory_service_tests.rs"]
mod tests;
