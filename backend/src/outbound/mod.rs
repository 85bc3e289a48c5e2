//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local directory store behind a single `RwLock`.
//!
//! Adapters translate between domain types and their storage shape and
//! contain no business rules.

pub mod memory;
