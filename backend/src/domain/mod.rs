//! Domain primitives, aggregates and services.
//!
//! Purpose: model the phonebook directory independently of HTTP and storage.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User / Contact: the directory aggregate and its owned records.
//! - validation / localization: field rules and their localised messages.
//! - DirectoryService / ContactsService: driving-port implementations.

pub mod contact;
pub mod contacts_service;
pub mod directory_service;
pub mod error;
pub mod localization;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod validation;

pub use self::contact::{Contact, ContactDraft, ContactId, NewContact};
pub use self::contacts_service::ContactsService;
pub use self::directory_service::DirectoryService;
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::localization::{Locale, MessageCatalog, UnsupportedLocale};
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, User, UserDraft, UserId};
pub use self::validation::{FieldName, ViolationKind, Violations};
