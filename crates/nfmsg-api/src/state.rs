//! # Application State
//!
//! Shared state handed to every route handler via the `State` extractor.
//! The message store is owned here and injected; there is no process-global
//! collection.

use nfmsg_core::MessageStore;

use crate::config::Config;

/// Shared application state. Cheap to clone: the store is an `Arc` handle.
#[derive(Debug, Clone)]
pub struct AppState {
    pub messages: MessageStore,
    pub config: Config,
}

impl AppState {
    /// Empty store, default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default(), MessageStore::new())
    }

    /// Default configuration around an existing store.
    pub fn with_store(messages: MessageStore) -> Self {
        Self::with_config(Config::default(), messages)
    }

    pub fn with_config(config: Config, messages: MessageStore) -> Self {
        Self { messages, config }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
