//! Driven port for the directory store.
//!
//! Adapters own id assignment. Every mutating call must be atomic: either the
//! whole change is visible to subsequent reads or none of it is.

use async_trait::async_trait;

use crate::domain::{Contact, NewContact, NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by directory store adapters.
    pub enum DirectoryRepositoryError {
        /// An identifier counter ran out of values.
        IdsExhausted { kind: String } => "directory store ran out of {kind} ids",
    }
}

/// Storage for users and the contacts they own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// All users in insertion order.
    async fn list_users(&self) -> Result<Vec<User>, DirectoryRepositoryError>;

    /// Look up one user.
    async fn find_user(&self, id: UserId) -> Result<Option<User>, DirectoryRepositoryError>;

    /// Users whose name contains `needle` (already lowercased), newest first.
    async fn search_users(&self, needle: &str) -> Result<Vec<User>, DirectoryRepositoryError>;

    /// Assign a fresh id and append the user.
    async fn insert_user(&self, user: NewUser) -> Result<User, DirectoryRepositoryError>;

    /// Remove a user together with its contacts, returning what was removed.
    async fn remove_user(&self, id: UserId) -> Result<Option<User>, DirectoryRepositoryError>;

    /// Assign a fresh contact id and append it to the owner's list.
    ///
    /// Returns `None` when `owner` does not exist; nothing is written then.
    async fn append_contact(
        &self,
        owner: UserId,
        contact: NewContact,
    ) -> Result<Option<Contact>, DirectoryRepositoryError>;
}
