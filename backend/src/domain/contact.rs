//! Contact records owned by directory users.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::validation::{
    FieldName, Violations, require_email, require_not_blank, require_phone,
};

/// Store-assigned contact identifier, unique across all users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(u64);

impl ContactId {
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

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unvalidated contact fields as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Validated input for creating a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    first_name: String,
    last_name: String,
    phone: String,
    email: String,
}

impl TryFrom<ContactDraft> for NewContact {
    type Error = Violations;

    /// Every field is checked so one response can report all of them.
    fn try_from(draft: ContactDraft) -> Result<Self, Self::Error> {
        let mut violations = Violations::default();
        violations.check(require_not_blank(
            FieldName::FIRST_NAME,
            draft.first_name.as_deref(),
        ));
        violations.check(require_not_blank(
            FieldName::LAST_NAME,
            draft.last_name.as_deref(),
        ));
        violations.check(require_phone(FieldName::PHONE, draft.phone.as_deref()));
        violations.check(require_email(FieldName::EMAIL, draft.email.as_deref()));

        match draft {
            ContactDraft {
                first_name: Some(first_name),
                last_name: Some(last_name),
                phone: Some(phone),
                email: Some(email),
            } if violations.is_empty() => Ok(Self {
                first_name,
                last_name,
                phone,
                email,
            }),
            _ => Err(violations),
        }
    }
}

/// Person record owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[schema(value_type = u64, example = 1)]
    id: ContactId,
    #[schema(example = "Arthur")]
    first_name: String,
    #[schema(example = "Harper")]
    last_name: String,
    #[schema(example = "5555555555")]
    phone: String,
    #[schema(example = "art@gmail.com")]
    email: String,
}

impl Contact {
    /// Materialise a contact under a store-assigned id.
    pub fn new(id: ContactId, input: NewContact) -> Self {
        let NewContact {
            first_name,
            last_name,
            phone,
            email,
        } = input;
        Self {
            id,
            first_name,
            last_name,
            phone,
            email,
        }
    }

    /// Identifier assigned by the store.
    pub fn id(&self) -> ContactId {
        self.id
    }

    /// First name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Ten digit phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Email address.
    pub fn email(&self) -> &str {
        &self.email
    }
}
