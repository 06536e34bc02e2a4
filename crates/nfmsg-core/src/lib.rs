#![deny(missing_docs)]

//! # nfmsg-core — Message Records and Store
//!
//! Domain types for the nfmsg network function. The crate has no knowledge
//! of HTTP: it defines the immutable [`Message`] record, the ordered
//! in-memory [`MessageStore`], and the error types the HTTP layer maps into
//! response envelopes.
//!
//! ## Invariants
//!
//! 1. **Messages are immutable.** Fields are private; a [`Message`] can only
//!    be built by [`Message::new`] (fresh id and timestamp) or
//!    [`Message::from_parts`] (fixtures and seeding).
//!
//! 2. **The store is append-only and insertion-ordered.** There is no update
//!    or delete path.
//!
//! 3. **Every store operation is atomic** with respect to the collection:
//!    create holds the write lock for construction and append, reads hold
//!    the read lock for the duration of the scan.

pub mod error;
pub mod message;
pub mod store;

pub use error::{StoreError, ValidationError};
pub use message::Message;
pub use store::MessageStore;
