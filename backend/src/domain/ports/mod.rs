//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`UsersQuery`, `UsersCommand`, `ContactsCommand`,
//! `ContactsQuery`) are called by inbound adapters. The driven
//! `DirectoryRepository` port is implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod contacts;
mod directory_repository;
mod users;

#[cfg(test)]
pub use contacts::{MockContactsCommand, MockContactsQuery};
pub use contacts::{ContactsCommand, ContactsQuery};
#[cfg(test)]
pub use directory_repository::MockDirectoryRepository;
pub use directory_repository::{DirectoryRepository, DirectoryRepositoryError};
#[cfg(test)]
pub use users::{MockUsersCommand, MockUsersQuery};
pub use users::{UsersCommand, UsersQuery};
