use std::{num::NonZeroUsize, sync::Arc};

use tokio::sync::Mutex;
use web_session::{
    SessionId, SessionStore,
    store::{
        SessionRecord, SessionRecordRef, SessionStorageBackend,
        errors::{CreateError, DeleteError, DeleteExpiredError, LoadError},
    },
};
use web_session_memory_store::InMemorySessionStore;

/// An empty in-memory session store.
pub fn store() -> SessionStore {
    SessionStore::new(InMemorySessionStore::default())
}

/// An empty in-memory session store, with a mechanism to inspect
/// what calls were made to it.
pub fn spy_store() -> (SessionStore, CallTracker) {
    let spy_backend = SpyBackend::new(InMemorySessionStore::default());
    let call_tracker = spy_backend.call_tracker();
    (SessionStore::new(spy_backend), call_tracker)
}

/// A wrapper that keeps track of which methods have been called
/// on the underlying session storage backend.
#[derive(Debug)]
pub struct SpyBackend<B> {
    backend: B,
    call_tracker: CallTracker,
}

impl<B> SpyBackend<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            call_tracker: Default::default(),
        }
    }

    pub fn call_tracker(&self) -> CallTracker {
        self.call_tracker.clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CallTracker(Arc<Mutex<Vec<String>>>);

impl CallTracker {
    pub async fn operation_log(&self) -> Vec<String> {
        self.0.lock().await.clone()
    }

    async fn push_operation(&self, op: impl Into<String>) {
        self.0.lock().await.push(op.into());
    }
}

#[async_trait::async_trait]
impl<B: SessionStorageBackend> SessionStorageBackend for SpyBackend<B> {
    async fn create(
        &self,
        id: &SessionId,
        record: SessionRecordRef<'_>,
    ) -> Result<(), CreateError> {
        self.call_tracker
            .push_operation(format!("create {}", id.inner()))
            .await;
        self.backend.create(id, record).await
    }

    async fn load(&self, session_id: &SessionId) -> Result<Option<SessionRecord>, LoadError> {
        self.call_tracker
            .push_operation(format!("load {}", session_id.inner()))
            .await;
        self.backend.load(session_id).await
    }

    async fn delete(&self, session_id: &SessionId) -> Result<(), DeleteError> {
        self.call_tracker
            .push_operation(format!("delete {}", session_id.inner()))
            .await;
        self.backend.delete(session_id).await
    }

    async fn delete_expired(
        &self,
        batch_size: Option<NonZeroUsize>,
    ) -> Result<usize, DeleteExpiredError> {
        self.call_tracker.push_operation("delete-expired").await;
        self.backend.delete_expired(batch_size).await
    }
}
