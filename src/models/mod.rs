//! Data models for conversation messages.
//!
//! This module defines the record types the search engine operates on:
//!
//! - [`MessageRecord`] - A single message in a conversation transcript
//! - [`MessageId`] - Stable, comparable message identifier
//! - [`Sender`] - Direction of a message (outgoing/incoming)
//!
//! Only the identifier and body matter to the search engine itself; the
//! remaining fields exist for transcript parsing and display. Models use
//! serde for JSON deserialization with custom deserializers for special
//! fields (timestamps, conversation IDs) in the `parsers::deserializers`
//! module.

pub mod message;

pub use message::{MessageId, MessageRecord, Sender};
