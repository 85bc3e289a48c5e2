//! Phonebook directory service library.
//!
//! Users own an ordered list of contacts; the HTTP adapter exposes both as
//! JSON and reports validation failures as localized per-field messages.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
