//! # Error Types
//!
//! Structured errors for message validation and lookup, built with
//! `thiserror`.

use thiserror::Error;

/// A required field was missing or empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `content` was empty.
    #[error("content must not be empty")]
    EmptyContent,

    /// `author` was empty.
    #[error("author must not be empty")]
    EmptyAuthor,

    /// A lookup was attempted with an empty message id.
    #[error("message id must not be empty")]
    EmptyId,
}

/// Errors returned by [`MessageStore`](crate::MessageStore) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Input failed required-field validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No message with the given id exists.
    #[error("message {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },
}
