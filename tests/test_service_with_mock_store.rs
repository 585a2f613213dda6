//! Contact service orchestration tested against a scripted store.

mod mocks;

use address_book::domain::{ContactId, EmailAddress};
use address_book::models::{Contact, ContactUpdate, NewContact};
use address_book::services::{ContactService, ContactServiceImpl};
use mocks::MockContactStore;

fn sample_contact(name: &str, email: &str) -> Contact {
    Contact {
        id: ContactId::generate(),
        name: name.to_string(),
        phone: "555".to_string(),
        email: EmailAddress::new(email).unwrap(),
    }
}

fn service_over(store: &MockContactStore) -> ContactServiceImpl {
    ContactServiceImpl::new(Box::new(store.clone()))
}

#[tokio::test]
async fn test_create_calls_store_once_per_item() {
    let store = MockContactStore::new();
    let service = service_over(&store);

    let created = service
        .create_contacts(vec![
            NewContact::new("A", "1", EmailAddress::new("a@example.com").unwrap()),
            NewContact::new("B", "2", EmailAddress::new("b@example.com").unwrap()),
            NewContact::new("C", "3", EmailAddress::new("c@example.com").unwrap()),
        ])
        .await;

    assert_eq!(store.get_call_count("create"), 3);
    let names: Vec<&str> = created.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_update_batch_omits_not_found_and_keeps_order() {
    let store = MockContactStore::new();
    let first = sample_contact("First", "first@example.com");
    let second = sample_contact("Second", "second@example.com");
    store.add_contact(first.clone());
    store.add_contact(second.clone());
    let service = service_over(&store);

    let updated = service
        .update_contacts(vec![
            ContactUpdate::new(second.id).phone("2"),
            ContactUpdate::new(ContactId::generate()).phone("x"),
            ContactUpdate::new(first.id).phone("1"),
        ])
        .await;

    assert_eq!(store.get_call_count("update"), 3);
    let ids: Vec<ContactId> = updated.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn test_delete_batch_returns_only_count() {
    let store = MockContactStore::new();
    let contact = sample_contact("Jane", "jane@example.com");
    store.add_contact(contact.clone());
    let service = service_over(&store);

    let deleted = service
        .delete_contacts(vec![contact.id, ContactId::generate(), contact.id])
        .await;

    assert_eq!(deleted, 1);
    assert_eq!(store.get_call_count("delete"), 3);
}

#[tokio::test]
async fn test_search_drops_ids_that_do_not_resolve() {
    let store = MockContactStore::new();
    let jane = sample_contact("Jane", "jane@example.com");
    store.add_contact(jane.clone());
    let phantom = ContactId::generate();
    store.set_search_result("jane", [jane.id, phantom]);
    let service = service_over(&store);

    let results = service.search_contacts("Jane").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, jane.id);
    assert_eq!(store.get_call_count("search"), 1);
    assert_eq!(store.get_call_count("get_by_id"), 2);
}

#[tokio::test]
async fn test_rejected_query_never_reaches_store() {
    let store = MockContactStore::new();
    let service = service_over(&store);

    assert!(service.search_contacts("   ").await.is_err());
    assert_eq!(store.get_call_count("search"), 0);
}
