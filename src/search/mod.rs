//! Conversation search and match navigation.
//!
//! # Mutation semantics
//!
//! The index holds two ordered lists: the message list (newest first) and the
//! match list produced by the last [`SearchIndex::search`] call. Adding a
//! message never updates the match list; callers re-run `search` to pick up
//! new arrivals. Deleting a message removes it from both lists. Positions
//! handed out during navigation are resolved against the *current* message
//! list, so they stay valid scroll targets even after the conversation has
//! grown or shrunk since the search ran.

pub mod index;

pub use index::{SearchIndex, SearchResult};
