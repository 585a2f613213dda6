//! Contact model and the request shapes that create or modify it.

use crate::domain::{ContactId, EmailAddress};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared reference to one immutable version of a Contact.
///
/// The store hands these out instead of cloning. An update never touches the
/// `Contact` behind an existing reference; it builds a new version and swaps
/// the reference held by the store, so earlier readers keep the old value.
///
/// ⚠️ **IMPORTANT:** Do not create reference cycles by adding `Arc<Contact>` fields
/// inside Contact.
pub type ContactRef = Arc<Contact>;

/// A stored address-book entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier, fixed at creation
    pub id: ContactId,

    /// Display name
    pub name: String,

    /// Phone number, free-form
    pub phone: String,

    /// Validated email address
    pub email: EmailAddress,
}

impl Contact {
    /// Assemble a contact from a creation request and an assigned identifier.
    pub fn from_new(id: ContactId, new_contact: NewContact) -> Self {
        Self {
            id,
            name: new_contact.name,
            phone: new_contact.phone,
            email: new_contact.email,
        }
    }

    /// Produce the next version of this contact with the supplied fields applied.
    ///
    /// Fields left as `None` in `update` keep their current values. The
    /// identifier is never changed, even if `update.id` differs.
    pub fn with_update(&self, update: &ContactUpdate) -> Self {
        Self {
            id: self.id,
            name: update.name.clone().unwrap_or_else(|| self.name.clone()),
            phone: update.phone.clone().unwrap_or_else(|| self.phone.clone()),
            email: update.email.clone().unwrap_or_else(|| self.email.clone()),
        }
    }

    /// Text that feeds the search index: the name and the email address.
    pub fn indexed_text(&self) -> [&str; 2] {
        [self.name.as_str(), self.email.as_str()]
    }
}

/// Request to create a contact. The identifier is assigned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub email: EmailAddress,
}

impl NewContact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: EmailAddress) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email,
        }
    }
}

/// Partial update of an existing contact.
///
/// Only fields that are `Some` are applied. Absent JSON fields deserialize to
/// `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactUpdate {
    pub id: ContactId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailAddress>,
}

impl ContactUpdate {
    /// An update for `id` that changes nothing until fields are set.
    pub fn new(id: ContactId) -> Self {
        Self {
            id,
            name: None,
            phone: None,
            email: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: EmailAddress) -> Self {
        self.email = Some(email);
        self
    }

    /// Whether any field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }
}

/// Body of a search request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
}
