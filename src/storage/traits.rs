//! The storage seam between the contact service and a concrete store.

use crate::domain::ContactId;
use crate::models::{Contact, ContactRef, ContactUpdate};
use std::collections::HashSet;

/// Store for contact records and their search index.
///
/// Every operation is synchronous and in-memory. A store never fails: "not
/// found" is reported as `None` or `false`. Implementations must keep their
/// search index consistent with the stored records after every mutation.
pub trait ContactStore: Send + Sync {
    /// Insert a contact and index its name and email.
    ///
    /// The identifier is supplied by the caller. If it is already present the
    /// previous record is replaced.
    fn create(&mut self, contact: Contact) -> ContactRef;

    /// Retrieve the current version of a contact.
    fn get_by_id(&self, id: &ContactId) -> Option<ContactRef>;

    /// Apply a partial update, returning the new version.
    ///
    /// Returns `None` without side effects when the identifier is unknown.
    fn update(&mut self, update: &ContactUpdate) -> Option<ContactRef>;

    /// Remove a contact and its index entries.
    ///
    /// Returns `false` without side effects when the identifier is unknown.
    fn delete(&mut self, id: &ContactId) -> bool;

    /// Identifiers whose name or email contains exactly the (lowercased) query
    /// as a word.
    fn search(&self, query: &str) -> HashSet<ContactId>;

    /// Number of stored contacts.
    fn len(&self) -> usize;

    /// Number of distinct words in the search index.
    fn indexed_word_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
