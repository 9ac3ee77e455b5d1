//! Transcript parsing for conversation JSONL files.
//!
//! Transcripts come from the message store's export path and occasionally
//! contain a bad line, so the parser skips and warns rather than failing the
//! whole load. Two backstops keep garbage files out: parsing aborts after
//! 100 unparseable lines in a row, and a file where more than half the lines
//! were skipped is rejected at the end. Files over 10MB are refused before
//! any line is read.

pub mod deserializers;
pub mod transcript;

pub use transcript::parse_transcript_file;
