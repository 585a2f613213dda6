//! End-to-end contact lifecycle through the service and the in-memory store.

use address_book::domain::{ContactId, EmailAddress};
use address_book::models::{ContactUpdate, NewContact};
use address_book::services::{ContactService, ContactServiceImpl};
use address_book::storage::InMemoryContactStore;
use std::collections::HashSet;
use std::sync::Arc;

fn service() -> ContactServiceImpl {
    ContactServiceImpl::new(Box::new(InMemoryContactStore::new()))
}

fn new_contact(name: &str, phone: &str, email: &str) -> NewContact {
    NewContact::new(name, phone, EmailAddress::new(email).unwrap())
}

async fn search_ids(service: &ContactServiceImpl, query: &str) -> HashSet<ContactId> {
    service
        .search_contacts(query)
        .await
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect()
}

#[tokio::test]
async fn test_search_matches_whole_words_of_name_and_email() {
    let service = service();
    let created = service
        .create_contacts(vec![new_contact("Jane Roe", "555-0100", "jane.roe@example.com")])
        .await;
    let jane = created[0].id;

    for query in ["jane", "ROE", "Example", "com"] {
        assert_eq!(search_ids(&service, query).await, HashSet::from([jane]), "query {query}");
    }

    // Separators are never part of a word
    assert!(search_ids(&service, "jane.roe").await.is_empty());
    assert!(search_ids(&service, "jan").await.is_empty());
    // Phone numbers are not indexed
    assert!(search_ids(&service, "555-0100").await.is_empty());
}

#[tokio::test]
async fn test_lifecycle_create_update_delete() {
    let service = service();
    let created = service
        .create_contacts(vec![
            new_contact("Jane Roe", "1", "jane@example.com"),
            new_contact("John Doe", "2", "john@home.org"),
        ])
        .await;
    let (jane, john) = (created[0].id, created[1].id);

    assert_eq!(search_ids(&service, "example").await, HashSet::from([jane]));

    let updated = service
        .update_contacts(vec![
            ContactUpdate::new(jane)
                .name("Janet Smith")
                .email(EmailAddress::new("janet@work.net").unwrap()),
            ContactUpdate::new(ContactId::generate()).name("Nobody"),
        ])
        .await;
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].phone, "1");

    assert!(search_ids(&service, "jane").await.is_empty());
    assert!(search_ids(&service, "roe").await.is_empty());
    assert!(search_ids(&service, "example").await.is_empty());
    assert_eq!(search_ids(&service, "janet").await, HashSet::from([jane]));
    assert_eq!(search_ids(&service, "work").await, HashSet::from([jane]));

    let deleted = service.delete_contacts(vec![jane, ContactId::generate()]).await;
    assert_eq!(deleted, 1);
    assert!(search_ids(&service, "janet").await.is_empty());
    assert_eq!(search_ids(&service, "doe").await, HashSet::from([john]));

    let stats = service.stats().await;
    assert_eq!(stats.contacts, 1);
    assert_eq!(stats.metrics.contacts_created_total, 2);
    assert_eq!(stats.metrics.contacts_updated_total, 1);
    assert_eq!(stats.metrics.update_misses_total, 1);
    assert_eq!(stats.metrics.contacts_deleted_total, 1);
    assert_eq!(stats.metrics.delete_misses_total, 1);
}

#[tokio::test]
async fn test_shared_word_maps_to_every_contact() {
    let service = service();
    let created = service
        .create_contacts(vec![
            new_contact("Ann Lee", "1", "ann@corp.io"),
            new_contact("Bob Lee", "2", "bob@corp.io"),
            new_contact("Cy Park", "3", "cy@home.io"),
        ])
        .await;

    let all: HashSet<ContactId> = created.iter().map(|c| c.id).collect();
    assert_eq!(search_ids(&service, "io").await, all);
    assert_eq!(
        search_ids(&service, "lee").await,
        HashSet::from([created[0].id, created[1].id])
    );

    service.delete_contacts(vec![created[0].id]).await;
    assert_eq!(search_ids(&service, "lee").await, HashSet::from([created[1].id]));
    assert_eq!(search_ids(&service, "corp").await, HashSet::from([created[1].id]));
}

#[tokio::test]
async fn test_earlier_reference_survives_update() {
    let service = service();
    let created = service
        .create_contacts(vec![new_contact("Jane Roe", "1", "jane@example.com")])
        .await;
    let before = created[0].clone();

    service
        .update_contacts(vec![ContactUpdate::new(before.id).name("Changed")])
        .await;

    assert_eq!(before.name, "Jane Roe");
    let after = service.get_contact(&before.id).await.unwrap();
    assert_eq!(after.name, "Changed");
    assert!(!Arc::ptr_eq(&before, &after));
}

#[tokio::test]
async fn test_invalid_queries_are_rejected() {
    let service = service();

    assert!(service.search_contacts("").await.is_err());
    assert!(service.search_contacts(" \t ").await.is_err());
    assert!(service.search_contacts("fine").await.unwrap().is_empty());

    let summary = service.metrics().summary();
    assert_eq!(summary.rejected_queries_total, 2);
    assert_eq!(summary.search_queries_total, 1);
}

#[tokio::test]
async fn test_every_indexed_word_is_searchable() {
    let service = service();
    let long_word = "x".repeat(2_000);
    let created = service
        .create_contacts(vec![new_contact(
            &format!("Jane {}", long_word),
            "1",
            &format!("jane@{}.com", "d".repeat(60)),
        )])
        .await;
    let jane = created[0].id;

    assert_eq!(search_ids(&service, &long_word).await, HashSet::from([jane]));
    assert_eq!(search_ids(&service, &long_word.to_uppercase()).await, HashSet::from([jane]));
    assert_eq!(search_ids(&service, &"d".repeat(60)).await, HashSet::from([jane]));
}

#[tokio::test]
async fn test_concurrent_batches_keep_store_consistent() {
    let service = Arc::new(service());

    let mut handles = Vec::new();
    for worker in 0..8 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            let batch = (0..10)
                .map(|i| {
                    new_contact(
                        &format!("Worker{worker} Item{i}"),
                        "0",
                        &format!("w{worker}i{i}@example.com"),
                    )
                })
                .collect();
            let created = service.create_contacts(batch).await;
            let half: Vec<ContactId> = created.iter().step_by(2).map(|c| c.id).collect();
            service.delete_contacts(half).await
        }));
    }

    let mut deleted = 0;
    for handle in handles {
        deleted += handle.await.unwrap();
    }

    assert_eq!(deleted, 40);
    assert_eq!(service.stats().await.contacts, 40);
    assert_eq!(search_ids(&service, "example").await.len(), 40);
}
