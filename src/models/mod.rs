//! Data models for address-book entities.
//!
//! This module contains the stored contact record and the request shapes used to
//! create, update and search contacts.

pub mod contact;

pub use contact::{Contact, ContactRef, ContactUpdate, NewContact, SearchRequest};
