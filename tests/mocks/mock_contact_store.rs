use address_book::domain::ContactId;
use address_book::models::{Contact, ContactRef, ContactUpdate};
use address_book::storage::ContactStore;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Keeps contacts in a plain map and answers searches from a scripted
/// word → ids table instead of tokenizing, so tests can make the index and
/// the records disagree. Clones share state and call counts.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactStore {
    contacts: Arc<Mutex<HashMap<ContactId, ContactRef>>>,
    search_results: Arc<Mutex<HashMap<String, HashSet<ContactId>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a new empty MockContactStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact directly, bypassing `create`.
    pub fn add_contact(&self, contact: Contact) {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(contact.id, Arc::new(contact));
    }

    /// Script the ids returned for `query` (already lowercase).
    pub fn set_search_result(&self, query: &str, ids: impl IntoIterator<Item = ContactId>) {
        let mut results = self.search_results.lock().unwrap();
        results.insert(query.to_string(), ids.into_iter().collect());
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactStore for MockContactStore {
    fn create(&mut self, contact: Contact) -> ContactRef {
        self.track_call("create");

        let contact = Arc::new(contact);
        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(contact.id, contact.clone());
        contact
    }

    fn get_by_id(&self, id: &ContactId) -> Option<ContactRef> {
        self.track_call("get_by_id");

        let contacts = self.contacts.lock().unwrap();
        contacts.get(id).cloned()
    }

    fn update(&mut self, update: &ContactUpdate) -> Option<ContactRef> {
        self.track_call("update");

        let mut contacts = self.contacts.lock().unwrap();
        let next = Arc::new(contacts.get(&update.id)?.with_update(update));
        contacts.insert(next.id, next.clone());
        Some(next)
    }

    fn delete(&mut self, id: &ContactId) -> bool {
        self.track_call("delete");

        let mut contacts = self.contacts.lock().unwrap();
        contacts.remove(id).is_some()
    }

    fn search(&self, query: &str) -> HashSet<ContactId> {
        self.track_call("search");

        let results = self.search_results.lock().unwrap();
        results
            .get(&query.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    fn indexed_word_count(&self) -> usize {
        self.search_results.lock().unwrap().len()
    }
}
