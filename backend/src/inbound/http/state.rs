//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and only ever see domain ports, so
//! they stay testable with mocks or the in-memory store.

use std::sync::Arc;

use crate::domain::ports::{
    ContactsCommand, ContactsQuery, DirectoryRepository, UsersCommand, UsersQuery,
};
use crate::domain::{ContactsService, DirectoryService, Locale};

/// Parameter object bundling the port implementations.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub contacts: Arc<dyn ContactsCommand>,
    pub contacts_query: Arc<dyn ContactsQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub contacts: Arc<dyn ContactsCommand>,
    pub contacts_query: Arc<dyn ContactsQuery>,
    /// Locale used when a request names none we support.
    pub default_locale: Locale,
}

impl HttpState {
    /// Construct state from a ports bundle.
    pub fn new(ports: HttpStatePorts, default_locale: Locale) -> Self {
        let HttpStatePorts {
            users,
            users_query,
            contacts,
            contacts_query,
        } = ports;
        Self {
            users,
            users_query,
            contacts,
            contacts_query,
            default_locale,
        }
    }

    /// Wire every port to services sharing one repository.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use phonebook::domain::Locale;
    /// use phonebook::inbound::http::state::HttpState;
    /// use phonebook::outbound::memory::MemoryDirectoryRepository;
    ///
    /// let state = HttpState::from_repository(
    ///     Arc::new(MemoryDirectoryRepository::new()),
    ///     Locale::En,
    /// );
    /// assert_eq!(state.default_locale, Locale::En);
    /// ```
    pub fn from_repository<R>(repo: Arc<R>, default_locale: Locale) -> Self
    where
        R: DirectoryRepository + 'static,
    {
        let directory = Arc::new(DirectoryService::new(Arc::clone(&repo)));
        let contacts = Arc::new(ContactsService::new(repo));
        Self::new(
            HttpStatePorts {
                users: directory.clone(),
                users_query: directory,
                contacts: contacts.clone(),
                contacts_query: contacts,
            },
            default_locale,
        )
    }
}
