//! Directory user aggregate.
//!
//! A [`User`] owns its [`Contact`] list outright: contacts are stored inside
//! the user record and disappear with it.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::contact::Contact;
use crate::domain::validation::{FieldName, Violations, require_not_blank};

/// Store-assigned user identifier.
///
/// Identifiers are handed out from a monotonic counter and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Unvalidated user fields as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Validated input for creating a user.
///
/// ## Invariants
/// - `first_name` is non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    first_name: String,
    last_name: Option<String>,
}

impl NewUser {
    /// Validated first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Optional last name.
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }
}

impl TryFrom<UserDraft> for NewUser {
    type Error = Violations;

    /// # Examples
    /// ```
    /// use phonebook::domain::{NewUser, UserDraft};
    ///
    /// let draft = UserDraft { first_name: None, last_name: Some("Smith".into()) };
    /// let violations = NewUser::try_from(draft).expect_err("first name missing");
    /// assert_eq!(violations.fields().collect::<Vec<_>>(), ["firstName"]);
    /// ```
    fn try_from(draft: UserDraft) -> Result<Self, Self::Error> {
        let mut violations = Violations::default();
        violations.check(require_not_blank(
            FieldName::FIRST_NAME,
            draft.first_name.as_deref(),
        ));
        let UserDraft {
            first_name,
            last_name,
        } = draft;
        match first_name {
            Some(first_name) if violations.is_empty() => Ok(Self {
                first_name,
                last_name,
            }),
            _ => Err(violations),
        }
    }
}

/// Directory entry.
///
/// ## Invariants
/// - `id` is unique for the lifetime of the process.
/// - `first_name` is non-blank.
/// - `contacts` keeps insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(value_type = u64, example = 1)]
    id: UserId,
    #[schema(example = "Alex")]
    first_name: String,
    #[schema(example = "Smith")]
    last_name: Option<String>,
    contacts: Vec<Contact>,
}

impl User {
    /// Materialise a new user with an empty contact list.
    pub fn new(id: UserId, input: NewUser) -> Self {
        let NewUser {
            first_name,
            last_name,
        } = input;
        Self {
            id,
            first_name,
            last_name,
            contacts: Vec::new(),
        }
    }

    /// Identifier assigned by the store.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// First name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name, when one was given.
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Owned contacts in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Append a contact, keeping insertion order.
    pub fn push_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Case-insensitive substring match on first, last or full name.
    ///
    /// `needle` must already be lowercased. An empty needle matches everyone.
    pub fn matches_name(&self, needle: &str) -> bool {
        let first = self.first_name.to_lowercase();
        let last = self
            .last_name
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();
        let full = format!("{first} {last}");
        first.contains(needle) || last.contains(needle) || full.contains(needle)
    }
}

#[cfg(test)]
mod tests;
