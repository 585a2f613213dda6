//! Contact service layer.
//!
//! Translates batch requests into single-record store operations and collects
//! the results. All store access goes through one `RwLock`: mutating batches
//! hold the write guard for the whole batch, searches hold the read guard
//! across the index lookup and the record resolution.

use crate::domain::ContactId;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{Contact, ContactRef, ContactUpdate, NewContact};
use crate::observability::{MetricsSummary, MetricsTracker, Timer};
use crate::storage::ContactStore;
use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::warn;

/// Snapshot of store size and operation counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub contacts: usize,
    pub indexed_words: usize,
    pub metrics: MetricsSummary,
}

/// Contact service trait for batch operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Create every contact, assigning fresh identifiers. Results keep input order.
    async fn create_contacts(&self, contacts: Vec<NewContact>) -> Vec<ContactRef>;

    /// Apply every update. Items whose identifier is unknown are left out of
    /// the result; the rest keep input order.
    async fn update_contacts(&self, updates: Vec<ContactUpdate>) -> Vec<ContactRef>;

    /// Delete every identifier and return how many existed.
    async fn delete_contacts(&self, ids: Vec<ContactId>) -> usize;

    /// Contacts whose name or email contains `query` as a whole word.
    ///
    /// Result order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::InvalidQuery` for a blank query.
    async fn search_contacts(&self, query: &str) -> ServiceResult<Vec<ContactRef>>;

    /// Current version of a single contact.
    async fn get_contact(&self, id: &ContactId) -> Option<ContactRef>;

    /// Store size and operation counters.
    async fn stats(&self) -> StoreStats;
}

/// Default implementation of ContactService over any `ContactStore`.
pub struct ContactServiceImpl {
    store: RwLock<Box<dyn ContactStore>>,
    metrics: MetricsTracker,
}

impl ContactServiceImpl {
    /// Create a new contact service that owns `store`.
    pub fn new(store: Box<dyn ContactStore>) -> Self {
        Self {
            store: RwLock::new(store),
            metrics: MetricsTracker::new(),
        }
    }

    /// Counters shared with this service.
    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    /// Validate search query.
    ///
    /// Length is not limited: indexed words have no length limit either.
    fn validate_search_query(&self, query: &str) -> ServiceResult<()> {
        if query.trim().is_empty() {
            return Err(ServiceError::InvalidQuery(
                "Query cannot be empty.".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn create_contacts(&self, contacts: Vec<NewContact>) -> Vec<ContactRef> {
        let timer = Timer::new("create_contacts");
        let mut store = self.store.write().await;

        let created: Vec<ContactRef> = contacts
            .into_iter()
            .map(|new_contact| store.create(Contact::from_new(ContactId::generate(), new_contact)))
            .collect();

        drop(store);
        self.metrics.track_create_batch(created.len(), timer.finish());
        created
    }

    async fn update_contacts(&self, updates: Vec<ContactUpdate>) -> Vec<ContactRef> {
        let timer = Timer::new("update_contacts");
        let requested = updates.len();
        let mut store = self.store.write().await;

        let updated: Vec<ContactRef> = updates
            .iter()
            .filter_map(|update| store.update(update))
            .collect();

        drop(store);
        self.metrics
            .track_update_batch(requested, updated.len(), timer.finish());
        updated
    }

    async fn delete_contacts(&self, ids: Vec<ContactId>) -> usize {
        let timer = Timer::new("delete_contacts");
        let mut store = self.store.write().await;

        let deleted = ids.iter().filter(|id| store.delete(id)).count();

        drop(store);
        self.metrics
            .track_delete_batch(ids.len(), deleted, timer.finish());
        deleted
    }

    async fn search_contacts(&self, query: &str) -> ServiceResult<Vec<ContactRef>> {
        if let Err(e) = self.validate_search_query(query) {
            self.metrics.track_rejected_query(&e.to_string());
            return Err(e);
        }

        let timer = Timer::new("search_contacts");
        let store = self.store.read().await;

        let matches: Vec<ContactRef> = store
            .search(query)
            .into_iter()
            .filter_map(|id| {
                let contact = store.get_by_id(&id);
                if contact.is_none() {
                    warn!(contact_id = %id, "Index entry does not resolve to a stored contact");
                }
                contact
            })
            .collect();

        drop(store);
        self.metrics.track_search_query(timer.finish(), matches.len());
        Ok(matches)
    }

    async fn get_contact(&self, id: &ContactId) -> Option<ContactRef> {
        self.store.read().await.get_by_id(id)
    }

    async fn stats(&self) -> StoreStats {
        let store = self.store.read().await;
        StoreStats {
            contacts: store.len(),
            indexed_words: store.indexed_word_count(),
            metrics: self.metrics.summary(),
        }
    }
}
