//! HTTP server configuration object.

use std::net::SocketAddr;

use phonebook::config::PhonebookSettings;
use phonebook::domain::Locale;

/// Values the server needs at construction time.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) default_locale: Locale,
}

impl ServerConfig {
    /// Construct a server configuration.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, default_locale: Locale) -> Self {
        Self {
            bind_addr,
            default_locale,
        }
    }

    /// Resolve the server configuration from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &PhonebookSettings) -> Self {
        Self::new(settings.bind_addr(), settings.default_locale())
    }

    /// Address the listener binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
