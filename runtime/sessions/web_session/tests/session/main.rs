use std::{borrow::Cow, collections::HashMap};

use fixtures::{spy_store, store};
use web_session::SessionId;
use web_session::store::SessionRecordRef;

mod config;
mod fixtures;
mod incoming;

#[tokio::test]
async fn values_can_be_read_back_with_their_type() {
    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct User {
        name: String,
    }

    let store = store();
    let id = SessionId::random();
    let mut state = HashMap::new();
    state.insert(
        "user".to_owned(),
        serde_json::to_value(User {
            name: "Alice".into(),
        })
        .unwrap(),
    );
    store
        .create(
            &id,
            SessionRecordRef {
                state: Cow::Owned(state),
                ttl: std::time::Duration::from_secs(60),
            },
        )
        .await
        .unwrap();

    let record = store.load(&id).await.unwrap().unwrap();
    let user: Option<User> = record.get("user").unwrap();
    assert_eq!(
        user,
        Some(User {
            name: "Alice".into()
        })
    );
    assert!(record.get::<User>("missing").unwrap().is_none());
    // The stored value doesn't have the expected shape.
    assert!(record.get::<u64>("user").is_err());
}

#[tokio::test]
async fn the_store_forwards_calls_to_its_backend() {
    let (store, call_tracker) = spy_store();
    let id = SessionId::random();

    store
        .create(
            &id,
            SessionRecordRef {
                state: Cow::Owned(HashMap::new()),
                ttl: std::time::Duration::from_secs(60),
            },
        )
        .await
        .unwrap();
    store.load(&id).await.unwrap();
    store.delete(&id).await.unwrap();
    store.delete_expired(None).await.unwrap();

    let oplog = call_tracker.operation_log().await;
    assert_eq!(
        oplog,
        vec![
            format!("create {}", id.inner()),
            format!("load {}", id.inner()),
            format!("delete {}", id.inner()),
            "delete-expired".to_owned(),
        ]
    );
}
