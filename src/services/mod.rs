//! Application service layer.
//!
//! Services adapt batch requests into repeated store calls and are the only
//! entry point the transports use. They own the store lock.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl, StoreStats};

// Re-export common types used by services
pub use crate::models::{Contact, ContactRef, ContactUpdate, NewContact};
