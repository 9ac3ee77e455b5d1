//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A transcript file living in its own temp directory
pub struct TranscriptFile {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl TranscriptFile {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Builder for JSONL transcript files
pub struct TranscriptBuilder {
    lines: Vec<String>,
}

impl TranscriptBuilder {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a well-formed message line (newest first, like the export format)
    pub fn with_message(self, line: &MessageLineBuilder) -> Self {
        self.with_raw_line(&line.to_json())
    }

    /// Add an arbitrary raw line (for malformed-input tests)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Write the transcript to a temp directory and return a handle to it
    pub fn build(self) -> TranscriptFile {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("transcript.jsonl");
        fs::write(&path, self.lines.join("\n")).expect("Failed to write transcript.jsonl");
        TranscriptFile { _temp_dir: temp_dir, path }
    }

    /// Write the transcript with the given raw content instead of built lines
    pub fn build_with_content(content: &str) -> TranscriptFile {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("transcript.jsonl");
        fs::write(&path, content).expect("Failed to write transcript.jsonl");
        TranscriptFile { _temp_dir: temp_dir, path }
    }
}

impl Default for TranscriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for individual transcript message lines
pub struct MessageLineBuilder {
    id: u64,
    body: String,
    sender: String,
    timestamp: i64,
    conversation_id: String,
}

impl MessageLineBuilder {
    /// Create a message line with default values
    pub fn new(id: u64) -> Self {
        Self {
            id,
            body: "Test message".to_string(),
            sender: "outgoing".to_string(),
            timestamp: 1_700_000_000_000,
            conversation_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
        }
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    pub fn sender(mut self, sender: &str) -> Self {
        self.sender = sender.to_string();
        self
    }

    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn to_json(&self) -> String {
        format!(
            r#"{{"id":{},"body":{},"sender":"{}","timestamp":{},"conversationId":"{}"}}"#,
            self.id,
            serde_json::to_string(&self.body).expect("body serializes"),
            self.sender,
            self.timestamp,
            self.conversation_id
        )
    }
}
