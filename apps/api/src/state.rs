use std::sync::Arc;

use crate::assist::dispatcher::Dispatcher;
use crate::llm_client::LlmClient;
use crate::storage::manager::StorageManager;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Gemini client for the proxy endpoint. `None` when no API key is configured.
    pub llm: Option<LlmClient>,
    pub dispatcher: Arc<Dispatcher>,
    pub storage: StorageManager,
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::storage::store::{KeyValueStore, MemoryStore};

    /// Simulated dispatcher, no Gemini key, fresh in-memory storage.
    pub fn test_state() -> AppState {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        AppState {
            llm: None,
            dispatcher: Arc::new(Dispatcher::simulated()),
            storage: StorageManager::new(Some(store)),
        }
    }
}
