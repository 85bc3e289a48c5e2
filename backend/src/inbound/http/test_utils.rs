//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::Locale;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::MemoryDirectoryRepository;

/// Handler state backed by a fresh, empty in-memory store.
pub fn memory_state(default_locale: Locale) -> HttpState {
    HttpState::from_repository(Arc::new(MemoryDirectoryRepository::new()), default_locale)
}
