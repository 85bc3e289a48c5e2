//! Driving ports for the contacts sub-resource.

use async_trait::async_trait;

use crate::domain::{Contact, ContactDraft, Error, UserId};

/// Write-side contact operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsCommand: Send + Sync {
    /// Validate a contact and attach it to `owner`.
    async fn create_contact(&self, owner: UserId, draft: ContactDraft) -> Result<Contact, Error>;
}

/// Read-side contact operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsQuery: Send + Sync {
    /// Contacts of `owner` in insertion order.
    async fn list_contacts(&self, owner: UserId) -> Result<Vec<Contact>, Error>;
}
