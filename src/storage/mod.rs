//! Contact storage.
//!
//! The store is the single source of truth for contact records and owns the
//! search index derived from them.

mod in_memory;
mod traits;

pub use in_memory::{InMemoryContactStore, IndexDiscrepancy};
pub use traits::ContactStore;
