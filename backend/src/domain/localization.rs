//! Localised validation messages.
//!
//! Messages are looked up in a table keyed by `(ViolationKind, Locale)`.
//! Field names are never translated; only the human readable text varies.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::domain::validation::{PHONE_PATTERN, ViolationKind, Violations};

/// Supported message locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (`en`).
    #[default]
    En,
    /// Russian (`ru`).
    Ru,
}

/// Returned when a language tag names no supported locale.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {tag}")]
pub struct UnsupportedLocale {
    tag: String,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Self; 2] = [Self::En, Self::Ru];

    /// Primary language subtag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// Pick the first supported locale from an `Accept-Language` value.
    ///
    /// Ranges are tried in descending `q` order; ties keep header order. Ranges
    /// with `q=0` and the `*` wildcard never select a locale.
    ///
    /// # Examples
    /// ```
    /// use phonebook::domain::Locale;
    ///
    /// assert_eq!(Locale::negotiate("fr-CH, ru;q=0.9, en;q=0.8"), Some(Locale::Ru));
    /// assert_eq!(Locale::negotiate("de"), None);
    /// ```
    pub fn negotiate(header: &str) -> Option<Self> {
        let mut ranges: Vec<(u16, Self)> = header
            .split(',')
            .filter_map(|range| {
                let mut parts = range.split(';');
                let tag = parts.next()?.trim();
                let weight = parts
                    .find_map(|param| param.trim().strip_prefix("q="))
                    .map_or(Some(1000), parse_weight)?;
                let locale = tag.parse::<Self>().ok()?;
                (weight > 0).then_some((weight, locale))
            })
            .collect();
        // Stable sort keeps header order among equal weights.
        ranges.sort_by(|a, b| b.0.cmp(&a.0));
        ranges.first().map(|(_, locale)| *locale)
    }
}

// Weights are kept in thousandths to avoid float comparisons.
fn parse_weight(raw: &str) -> Option<u16> {
    let raw = raw.trim();
    let (whole, fraction) = raw.split_once('.').unwrap_or((raw, ""));
    if fraction.len() > 3 || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let whole: u16 = match whole {
        "0" => 0,
        "1" => 1,
        _ => return None,
    };
    let padded = format!("{fraction:0<3}");
    let fraction: u16 = padded.parse().ok()?;
    let weight = whole * 1000 + fraction;
    (weight <= 1000).then_some(weight)
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    /// Parse a BCP 47 tag by its primary subtag, so `en-GB` and `RU` resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s.trim().split(['-', '_']).next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|locale| locale.as_str().eq_ignore_ascii_case(primary))
            .ok_or_else(|| UnsupportedLocale { tag: s.to_owned() })
    }
}

const PATTERN_PLACEHOLDER: &str = "{regexp}";

const CATALOG_ENTRIES: [(ViolationKind, Locale, &str); 8] = [
    (ViolationKind::NotNull, Locale::En, "must not be null"),
    (ViolationKind::NotNull, Locale::Ru, "должно быть задано"),
    (ViolationKind::NotBlank, Locale::En, "must not be blank"),
    (ViolationKind::NotBlank, Locale::Ru, "не может быть пусто"),
    (
        ViolationKind::PatternMismatch,
        Locale::En,
        "must match \"{regexp}\"",
    ),
    (
        ViolationKind::PatternMismatch,
        Locale::Ru,
        "должно соответствовать шаблону \"{regexp}\"",
    ),
    (
        ViolationKind::MalformedEmail,
        Locale::En,
        "must be a well-formed email address",
    ),
    (
        ViolationKind::MalformedEmail,
        Locale::Ru,
        "email определен в неверном формате",
    ),
];

/// Message lookup table for validation violations.
#[derive(Debug)]
pub struct MessageCatalog {
    messages: HashMap<(ViolationKind, Locale), String>,
}

impl MessageCatalog {
    fn build() -> Self {
        let messages = CATALOG_ENTRIES
            .iter()
            .map(|(kind, locale, template)| {
                let text = template.replace(PATTERN_PLACEHOLDER, PHONE_PATTERN);
                ((*kind, *locale), text)
            })
            .collect();
        Self { messages }
    }

    /// Process-wide catalog.
    pub fn global() -> &'static Self {
        static CATALOG: OnceLock<MessageCatalog> = OnceLock::new();
        CATALOG.get_or_init(Self::build)
    }

    /// Message for `kind` in `locale`, falling back to English.
    ///
    /// # Examples
    /// ```
    /// use phonebook::domain::validation::ViolationKind;
    /// use phonebook::domain::{Locale, MessageCatalog};
    ///
    /// let catalog = MessageCatalog::global();
    /// assert_eq!(catalog.message(ViolationKind::NotNull, Locale::En), "must not be null");
    /// ```
    pub fn message(&self, kind: ViolationKind, locale: Locale) -> &str {
        self.messages
            .get(&(kind, locale))
            .or_else(|| self.messages.get(&(kind, Locale::En)))
            .map_or("is invalid", String::as_str)
    }

    /// Render violations as a `field -> message` map.
    pub fn render(&self, violations: &Violations, locale: Locale) -> BTreeMap<String, String> {
        violations
            .iter()
            .map(|(field, kind)| (field.as_str().to_owned(), self.message(kind, locale).to_owned()))
            .collect()
    }
}
