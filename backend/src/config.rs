//! Service settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `PHONEBOOK_*` environment variables and an
//! optional configuration file, in the usual OrthoConfig precedence.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;

use crate::domain::Locale;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Settings for the phonebook HTTP service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PHONEBOOK")]
pub struct PhonebookSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Locale for violation messages when `Accept-Language` names none we
    /// support.
    pub default_locale: Option<String>,
}

impl PhonebookSettings {
    /// Bind address on the configured port, with host `0.0.0.0` unless set.
    ///
    /// An unparseable host is logged and replaced by the default.
    pub fn bind_addr(&self) -> SocketAddr {
        let host = match self.host.as_deref().map(str::parse::<IpAddr>) {
            Some(Ok(ip)) => ip,
            Some(Err(error)) => {
                warn!(%error, host = ?self.host, "invalid host; using default");
                DEFAULT_HOST
            }
            None => DEFAULT_HOST,
        };
        SocketAddr::new(host, self.port)
    }

    /// Configured default locale; unknown tags fall back to English.
    pub fn default_locale(&self) -> Locale {
        match self.default_locale.as_deref().map(str::parse::<Locale>) {
            Some(Ok(locale)) => locale,
            Some(Err(error)) => {
                warn!(%error, "unsupported default locale; using en");
                Locale::default()
            }
            None => Locale::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> PhonebookSettings {
        PhonebookSettings::load_from_iter([OsString::from("phonebook")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("PHONEBOOK_HOST", None::<String>),
            ("PHONEBOOK_PORT", None::<String>),
            ("PHONEBOOK_DEFAULT_LOCALE", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.host, None);
        assert_eq!(
            settings.bind_addr(),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
        assert_eq!(settings.default_locale(), Locale::En);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("PHONEBOOK_HOST", Some("127.0.0.1".to_owned())),
            ("PHONEBOOK_PORT", Some("9090".to_owned())),
            ("PHONEBOOK_DEFAULT_LOCALE", Some("ru".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr(),
            SocketAddr::from(([127, 0, 0, 1], 9090))
        );
        assert_eq!(settings.default_locale(), Locale::Ru);
    }

    #[rstest]
    #[case(Some("fr"), Locale::En)]
    #[case(Some("ru-RU"), Locale::Ru)]
    #[case(None, Locale::En)]
    fn default_locale_falls_back_to_english(
        #[case] raw: Option<&str>,
        #[case] expected: Locale,
    ) {
        let settings = PhonebookSettings {
            host: None,
            port: 8080,
            default_locale: raw.map(str::to_owned),
        };
        assert_eq!(settings.default_locale(), expected);
    }

    #[rstest]
    fn invalid_host_falls_back_to_default() {
        let settings = PhonebookSettings {
            host: Some("not an address".to_owned()),
            port: 1234,
            default_locale: None,
        };
        assert_eq!(settings.bind_addr(), SocketAddr::new(DEFAULT_HOST, 1234));
    }
}
