//! Contacts sub-resource service.
//!
//! All four contact fields are validated before the owner is looked up, so a
//! request with bad input and an unknown owner reports the input problems.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::directory_service::{map_repository_error, user_not_found};
use crate::domain::ports::{ContactsCommand, ContactsQuery, DirectoryRepository};
use crate::domain::{Contact, ContactDraft, Error, NewContact, User, UserId};

/// Service implementing [`ContactsCommand`] and [`ContactsQuery`].
#[derive(Clone)]
pub struct ContactsService<R> {
    repo: Arc<R>,
}

impl<R> ContactsService<R> {
    /// Create a service over a shared repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ContactsCommand for ContactsService<R>
where
    R: DirectoryRepository,
{
    async fn create_contact(&self, owner: UserId, draft: ContactDraft) -> Result<Contact, Error> {
        let input = NewContact::try_from(draft)?;
        let contact = self
            .repo
            .append_contact(owner, input)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| user_not_found(owner))?;
        info!(user_id = %owner, contact_id = %contact.id(), "contact created");
        Ok(contact)
    }
}

#[async_trait]
impl<R> ContactsQuery for ContactsService<R>
where
    R: DirectoryRepository,
{
    async fn list_contacts(&self, owner: UserId) -> Result<Vec<Contact>, Error> {
        self.repo
            .find_user(owner)
            .await
            .map_err(map_repository_error)?
            .map(|user: User| user.contacts().to_vec())
            .ok_or_else(|| user_not_found(owner))
    }
}
