//! Address Book Service - an in-memory contact store with a word search index.
//!
//! Contacts are kept in a primary map alongside an inverted index from
//! lowercase words of each contact's name and email to the contacts that
//! contain them. Every create, update and delete keeps the two in sync.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`ContactId`, `EmailAddress`)
//! - **models**: Contact records and request shapes
//! - **search**: Tokenizer and inverted index
//! - **storage**: `ContactStore` trait and the in-memory implementation
//! - **services**: Batch operations over a locked store
//! - **server**: HTTP routes (axum) and MCP tools (rmcp)
//! - **observability**: Operation counters and timers
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod search;
pub mod server;
pub mod services;
pub mod storage;

pub use config::{Config, Transport};
pub use domain::{ContactId, EmailAddress, ValidationError};
pub use error::{ConfigError, ServiceError};
pub use models::{Contact, ContactRef, ContactUpdate, NewContact, SearchRequest};
pub use observability::{MetricsSummary, MetricsTracker};
pub use search::InvertedIndex;
pub use server::AddressBookMcpServer;
pub use services::{ContactService, ContactServiceImpl, StoreStats};
pub use storage::{ContactStore, InMemoryContactStore};
