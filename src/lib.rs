//! convo-search - In-conversation message search and result navigation
//!
//! This library implements the engine behind a conversation view's
//! "find in conversation" feature. It supports:
//!
//! - Case-insensitive substring search over an ordered message list
//! - Forward/backward stepping through matches with a display counter
//! - Incremental list maintenance as messages arrive or are deleted
//! - Loading conversation transcripts from JSONL files
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use convo_search::{MessageId, MessageRecord, SearchIndex, Sender};
//!
//! let mut index = SearchIndex::new();
//! index.add_message(MessageRecord {
//!     id: MessageId(1),
//!     body: "hello world".to_string(),
//!     sender: Sender::Outgoing,
//!     timestamp: Utc::now(),
//!     conversation_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
//! });
//!
//! index.search("HELLO");
//! assert_eq!(index.next_position(), Some(0));
//! ```

pub mod cli;
pub mod models;
pub mod parsers;
pub mod search;

// Re-export commonly used types
pub use models::{MessageId, MessageRecord, Sender};
pub use parsers::transcript::parse_transcript_file;
pub use search::{SearchIndex, SearchResult};
