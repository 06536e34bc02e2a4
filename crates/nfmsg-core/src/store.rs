//! # Message Store
//!
//! Thread-safe, cloneable, append-only store of [`Message`] records kept in
//! insertion order.
//!
//! All operations are synchronous (the lock is `parking_lot`, not
//! `tokio::sync`) because the lock is never held across an `.await`.
//! `parking_lot::RwLock` does not poison, so a panicking handler cannot wedge
//! the store for every later request.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{StoreError, ValidationError};
use crate::message::{validate_fields, Message};

/// Ordered in-memory collection of messages.
///
/// Cloning the store clones the handle, not the data: every clone sees the
/// same collection.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl MessageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `messages`, in the given order.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self {
            messages: Arc::new(RwLock::new(messages)),
        }
    }

    /// Create a message and append it to the end of the collection.
    ///
    /// Returns the stored message. Fails with [`StoreError::Validation`] if
    /// `content` or `author` is empty, in which case the store is unchanged.
    pub fn create(
        &self,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Message, StoreError> {
        let content = content.into();
        let author = author.into();
        validate_fields(&content, &author)?;

        let mut guard = self.messages.write();
        let message = Message::stamped(content, author);
        guard.push(message.clone());
        Ok(message)
    }

    /// Snapshot of every message, oldest first.
    pub fn list(&self) -> Vec<Message> {
        self.messages.read().clone()
    }

    /// Find the first message whose id equals `id` exactly.
    pub fn get_by_id(&self, id: &str) -> Result<Message, StoreError> {
        if id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        self.messages
            .read()
            .iter()
            .find(|m| m.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// Number of stored messages.
    pub fn len(&self) -> usize {
        self.messages.read().len()
    }

    /// Whether the store holds no messages.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
