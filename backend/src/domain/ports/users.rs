//! Driving ports for user use-cases.
//!
//! HTTP handlers depend on these traits only, so they can be exercised with
//! any implementation, including the in-memory one used in tests.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

/// Read-side user operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every user in insertion order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Users whose name matches `name`, most recently created first.
    async fn search_users(&self, name: &str) -> Result<Vec<User>, Error>;

    /// A single user, or [`crate::domain::ErrorCode::NotFound`].
    async fn get_user(&self, id: UserId) -> Result<User, Error>;
}

/// Write-side user operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Validate and store a new user.
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error>;

    /// Delete a user and every contact it owns.
    async fn delete_user(&self, id: UserId) -> Result<User, Error>;
}
