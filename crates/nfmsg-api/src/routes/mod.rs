//! # API Route Modules
//!
//! - `messages` — post, list, and fetch messages under `/message/`.

pub mod messages;
