//! Domain value objects and types.
//!
//! Type-safe wrappers for contact identifiers and email addresses. These value
//! objects validate at construction time, so malformed input is rejected at the
//! boundary and never reaches the store.

pub mod contact_id;
pub mod email;
pub mod errors;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
