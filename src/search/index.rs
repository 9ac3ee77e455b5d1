use crate::models::{MessageId, MessageRecord};

/// A single search hit: the matched message plus the index it occupied in the
/// message list when the search ran.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    position: usize,
    message: MessageRecord,
}

impl SearchResult {
    /// Index the message occupied in the message list at search time.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn message(&self) -> &MessageRecord {
        &self.message
    }
}

/// Search and navigation state for one open conversation view.
///
/// Owns the ordered message list (newest first), the match list from the most
/// recent search, and a cursor for next/previous stepping. All operations are
/// synchronous linear scans; the struct is single-owner and takes `&mut self`
/// for every mutation.
#[derive(Debug, Default)]
pub struct SearchIndex {
    /// Message list, newest first. Ids are unique.
    messages: Vec<MessageRecord>,
    /// Match list from the last search, ascending by snapshot position.
    results: Vec<SearchResult>,
    /// Current match during navigation. `None` = before the first match.
    cursor: Option<usize>,
    /// The last searched term, if any.
    term: Option<String>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from an already-ordered (newest first) message list.
    /// Later duplicates of an id are dropped.
    pub fn from_messages(messages: Vec<MessageRecord>) -> Self {
        let mut index = Self::new();
        for record in messages {
            if !index.messages.iter().any(|m| m.id == record.id) {
                index.messages.push(record);
            }
        }
        index
    }

    /// Rebuilds the match list for `term`, scanning messages newest to oldest.
    ///
    /// Matching is a case-insensitive substring test on the message body; the
    /// empty term matches every message. Any previous match list and cursor
    /// are discarded unconditionally, even when the term is unchanged. Match
    /// positions come out in ascending order as a consequence of the scan.
    pub fn search(&mut self, term: &str) {
        self.cursor = None;
        self.results.clear();
        self.term = Some(term.to_string());

        let needle = term.to_lowercase();
        for (position, message) in self.messages.iter().enumerate() {
            if message.body.to_lowercase().contains(&needle) {
                self.results.push(SearchResult { position, message: message.clone() });
            }
        }
    }

    /// Prepends a message unless its id is already present (silent no-op on
    /// duplicates). The match list is left as-is; re-run [`Self::search`] to
    /// surface the new message in results.
    pub fn add_message(&mut self, record: MessageRecord) {
        if self.messages.iter().any(|m| m.id == record.id) {
            return;
        }
        self.messages.insert(0, record);
    }

    /// Removes the message with `id` from both the message list and the match
    /// list. Unknown ids are ignored. The cursor is shifted down past any
    /// removed match entries so it keeps referring to the same neighborhood.
    pub fn delete_message(&mut self, id: MessageId) {
        self.messages.retain(|m| m.id != id);

        if let Some(cur) = self.cursor {
            let removed = self.results[..=cur].iter().filter(|r| r.message.id == id).count();
            self.cursor = cur.checked_sub(removed);
        }
        self.results.retain(|r| r.message.id != id);
    }

    /// Prepends a manually constructed match entry, bypassing the matching
    /// algorithm. The caller decides membership; no duplicate check is made.
    /// Intended for inserting a just-arrived message into an active search.
    pub fn add_result(&mut self, position: usize, record: MessageRecord) {
        self.results.insert(0, SearchResult { position, message: record });
        // Keep the cursor anchored to the entry it was on.
        if let Some(cur) = self.cursor {
            self.cursor = Some(cur + 1);
        }
    }

    /// Advances the cursor and returns the message-list position of the new
    /// current match. Returns `None` without moving when the cursor is
    /// already on the last match (no wrap-around).
    pub fn next_position(&mut self) -> Option<usize> {
        let next = match self.cursor {
            None => 0,
            Some(cur) => cur + 1,
        };
        if next >= self.results.len() {
            return None;
        }
        self.cursor = Some(next);
        Some(self.resolve_position(next))
    }

    /// Steps the cursor back and returns the message-list position of the new
    /// current match. Returns `None` without moving from the first match or
    /// from the unset state.
    pub fn previous_position(&mut self) -> Option<usize> {
        let cur = self.cursor?;
        if cur == 0 {
            return None;
        }
        self.cursor = Some(cur - 1);
        Some(self.resolve_position(cur - 1))
    }

    /// Current index of the matched message in the message list. Falls back
    /// to the search-time snapshot if the id is no longer present (only
    /// reachable via [`Self::add_result`] with a foreign record).
    fn resolve_position(&self, result_idx: usize) -> usize {
        let result = &self.results[result_idx];
        self.messages
            .iter()
            .position(|m| m.id == result.message.id)
            .unwrap_or(result.position)
    }

    /// The match the cursor is on, or `None` before navigation has started.
    pub fn current(&self) -> Option<&SearchResult> {
        self.cursor.map(|cur| &self.results[cur])
    }

    /// True iff some match entry references a message with the same id as
    /// `record`. Used as a rendering predicate ("highlight this message").
    pub fn is_match(&self, record: &MessageRecord) -> bool {
        self.results.iter().any(|r| r.message.id == record.id)
    }

    /// Clears the match list, cursor, and remembered term. The message list
    /// is untouched.
    pub fn reset(&mut self) {
        self.results.clear();
        self.cursor = None;
        self.term = None;
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn has_messages(&self) -> bool {
        !self.messages.is_empty()
    }

    /// One-based display counter ("result M of N"), derived from the cursor.
    /// 0 while the cursor is unset.
    pub fn counter(&self) -> usize {
        self.cursor.map_or(0, |cur| cur + 1)
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    /// Read-only view of the message list, newest first.
    pub fn messages(&self) -> &[MessageRecord] {
        &self.messages
    }

    /// Read-only view of the match list from the last search.
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }
}
