//! Property tests for the message store.

use chrono::DateTime;
use nfmsg_core::{MessageStore, StoreError};
use proptest::prelude::*;
use uuid::Uuid;

fn non_empty() -> impl Strategy<Value = String> {
    ".{1,64}"
}

proptest! {
    #[test]
    fn create_yields_uuid_and_rfc3339(content in non_empty(), author in non_empty()) {
        let store = MessageStore::new();
        let before = store.len();
        let msg = store.create(content.clone(), author.clone()).unwrap();

        prop_assert!(Uuid::parse_str(msg.id()).is_ok());
        prop_assert!(DateTime::parse_from_rfc3339(msg.time()).is_ok());
        prop_assert_eq!(msg.content(), content.as_str());
        prop_assert_eq!(msg.author(), author.as_str());
        prop_assert_eq!(store.len(), before + 1);
    }

    #[test]
    fn list_returns_creates_in_insertion_order(
        entries in prop::collection::vec((non_empty(), non_empty()), 0..20)
    ) {
        let store = MessageStore::new();
        let mut created = Vec::new();
        for (content, author) in &entries {
            created.push(store.create(content.clone(), author.clone()).unwrap());
        }
        prop_assert_eq!(store.list(), created);
    }

    #[test]
    fn every_created_message_is_retrievable(
        entries in prop::collection::vec((non_empty(), non_empty()), 1..10)
    ) {
        let store = MessageStore::new();
        for (content, author) in &entries {
            let msg = store.create(content.clone(), author.clone()).unwrap();
            let found = store.get_by_id(msg.id()).unwrap();
            prop_assert_eq!(found, msg);
        }
    }

    #[test]
    fn random_uuid_is_not_found(entries in prop::collection::vec((non_empty(), non_empty()), 0..5)) {
        let store = MessageStore::new();
        for (content, author) in &entries {
            store.create(content.clone(), author.clone()).unwrap();
        }
        let probe = Uuid::new_v4().to_string();
        let is_not_found = matches!(store.get_by_id(&probe), Err(StoreError::NotFound { .. }));
        prop_assert!(is_not_found);
    }
}
