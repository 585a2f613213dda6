use crate::domain::ContactId;
use crate::models::{Contact, ContactRef, ContactUpdate};
use crate::search::{normalize_query, tokenize_all, InvertedIndex};
use crate::storage::traits::ContactStore;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, warn};

/// A disagreement between the primary map and the search index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexDiscrepancy {
    /// A stored contact's word has no index entry pointing at it.
    Missing { word: String, id: ContactId },

    /// An index entry points at a contact that is gone or no longer has the word.
    Stale { word: String, id: ContactId },
}

/// In-memory contact store paired with an inverted word index.
///
/// The primary map holds one immutable version per identifier behind an
/// `Arc`. Updates build a new version and replace the `Arc`, so references
/// handed out earlier never observe later changes.
#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    contacts: HashMap<ContactId, ContactRef>,
    index: InvertedIndex,
}

impl InMemoryContactStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn index_contact(&mut self, contact: &Contact) {
        let words = tokenize_all(contact.indexed_text());
        self.index.insert(contact.id, &words);
    }

    fn deindex_contact(&mut self, contact: &Contact) {
        let words = tokenize_all(contact.indexed_text());
        self.index.remove(&contact.id, &words);
    }

    /// Compare the live index with one rebuilt from the stored contacts.
    ///
    /// Returns every discrepancy found; an empty vector means the index is
    /// exactly what the stored records imply.
    pub fn index_discrepancies(&self) -> Vec<IndexDiscrepancy> {
        let mut expected = InvertedIndex::new();
        for contact in self.contacts.values() {
            expected.insert(contact.id, &tokenize_all(contact.indexed_text()));
        }

        let mut discrepancies = Vec::new();

        for (word, ids) in expected.iter() {
            let actual = self.index.lookup(word);
            for id in ids.difference(&actual) {
                discrepancies.push(IndexDiscrepancy::Missing {
                    word: word.to_string(),
                    id: *id,
                });
            }
        }

        for (word, ids) in self.index.iter() {
            let wanted = expected.lookup(word);
            for id in ids.difference(&wanted) {
                discrepancies.push(IndexDiscrepancy::Stale {
                    word: word.to_string(),
                    id: *id,
                });
            }
        }

        discrepancies
    }
}

impl ContactStore for InMemoryContactStore {
    fn create(&mut self, contact: Contact) -> ContactRef {
        if let Some(previous) = self.contacts.get(&contact.id).cloned() {
            // Drop the old words first so the overwritten record leaves nothing behind
            warn!(contact_id = %contact.id, "Overwriting existing contact on create");
            self.deindex_contact(&previous);
        }

        let contact = Arc::new(contact);
        self.contacts.insert(contact.id, contact.clone());
        self.index_contact(&contact);

        debug!(contact_id = %contact.id, "Contact created");
        contact
    }

    fn get_by_id(&self, id: &ContactId) -> Option<ContactRef> {
        self.contacts.get(id).cloned()
    }

    fn update(&mut self, update: &ContactUpdate) -> Option<ContactRef> {
        let current = self.get_by_id(&update.id)?;
        if update.is_empty() {
            return Some(current);
        }

        self.deindex_contact(&current);

        let next = Arc::new(current.with_update(update));
        self.contacts.insert(next.id, next.clone());

        self.index_contact(&next);

        debug!(contact_id = %next.id, "Contact updated");
        Some(next)
    }

    fn delete(&mut self, id: &ContactId) -> bool {
        let Some(current) = self.get_by_id(id) else {
            return false;
        };

        self.deindex_contact(&current);
        self.contacts.remove(id);

        debug!(contact_id = %id, "Contact deleted");
        true
    }

    fn search(&self, query: &str) -> HashSet<ContactId> {
        self.index.lookup(&normalize_query(query))
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }

    fn indexed_word_count(&self) -> usize {
        self.index.word_count()
    }
}
