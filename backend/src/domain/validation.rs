//! Field validation rules shared by users and contacts.
//!
//! Rules are pure functions of their input. They report a locale-independent
//! [`ViolationKind`] keyed by a [`FieldName`]; turning a violation into text is
//! the job of [`crate::domain::localization::MessageCatalog`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Pattern every contact phone number must match.
pub const PHONE_PATTERN: &str = "^[0-9]{10}$";

// Local part per RFC 5322 atext/dot-atom; each domain label must be non-empty.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*$";

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PHONE_PATTERN)
        .unwrap_or_else(|error| panic!("phone regex failed to compile: {error}"))
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(EMAIL_PATTERN)
        .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
});

/// Wire name of a validated field.
///
/// Field names are the JSON keys clients send and therefore never localised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldName(&'static str);

impl FieldName {
    /// `firstName` on users and contacts.
    pub const FIRST_NAME: Self = Self("firstName");
    /// `lastName` on users and contacts.
    pub const LAST_NAME: Self = Self("lastName");
    /// `phone` on contacts.
    pub const PHONE: Self = Self("phone");
    /// `email` on contacts.
    pub const EMAIL: Self = Self("email");

    /// Borrow the wire name.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Category of a failed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Required value was absent.
    NotNull,
    /// Required value was empty or whitespace only.
    NotBlank,
    /// Value did not match [`PHONE_PATTERN`].
    PatternMismatch,
    /// Value is not a well-formed email address.
    MalformedEmail,
}

/// Violations collected while validating one payload.
///
/// Holds at most one violation per field; the first failing rule wins.
/// Iteration is ordered by field name so rendered maps are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(BTreeMap<FieldName, ViolationKind>);

impl Violations {
    /// Record a violation unless the field already has one.
    pub fn push(&mut self, field: FieldName, kind: ViolationKind) {
        self.0.entry(field).or_insert(kind);
    }

    /// Record the outcome of a rule.
    pub fn check(&mut self, outcome: Result<(), (FieldName, ViolationKind)>) {
        if let Err((field, kind)) = outcome {
            self.push(field, kind);
        }
    }

    /// Whether no rule failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with a violation.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Violation recorded for `field`, if any.
    pub fn get(&self, field: FieldName) -> Option<ViolationKind> {
        self.0.get(&field).copied()
    }

    /// Names of the fields that failed, in key order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().map(FieldName::as_str)
    }

    /// Iterate `(field, kind)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, ViolationKind)> + '_ {
        self.0.iter().map(|(field, kind)| (*field, *kind))
    }

    /// `Ok(value)` when empty, otherwise the collected violations.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

type RuleOutcome = Result<(), (FieldName, ViolationKind)>;

/// Require a present, non-blank value.
///
/// # Examples
/// ```
/// use phonebook::domain::validation::{require_not_blank, FieldName, ViolationKind};
///
/// assert!(require_not_blank(FieldName::FIRST_NAME, Some("Alex")).is_ok());
/// assert_eq!(
///     require_not_blank(FieldName::FIRST_NAME, Some("  ")),
///     Err((FieldName::FIRST_NAME, ViolationKind::NotBlank)),
/// );
/// ```
pub fn require_not_blank(field: FieldName, value: Option<&str>) -> RuleOutcome {
    match value {
        None => Err((field, ViolationKind::NotNull)),
        Some(raw) if raw.trim().is_empty() => Err((field, ViolationKind::NotBlank)),
        Some(_) => Ok(()),
    }
}

/// Require a present value matching [`PHONE_PATTERN`].
pub fn require_phone(field: FieldName, value: Option<&str>) -> RuleOutcome {
    require_not_blank(field, value)?;
    match value {
        Some(raw) if PHONE_RE.is_match(raw) => Ok(()),
        _ => Err((field, ViolationKind::PatternMismatch)),
    }
}

/// Require a present, well-formed email address.
pub fn require_email(field: FieldName, value: Option<&str>) -> RuleOutcome {
    require_not_blank(field, value)?;
    match value {
        Some(raw) if EMAIL_RE.is_match(raw) => Ok(()),
        _ => Err((field, ViolationKind::MalformedEmail)),
    }
}
