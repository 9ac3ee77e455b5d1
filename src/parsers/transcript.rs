use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::models::MessageRecord;

/// Transcripts larger than this are refused outright (10MB).
const MAX_TRANSCRIPT_BYTES: u64 = 10 * 1024 * 1024;

/// Abort once this many lines in a row fail to parse.
const MAX_FAILURE_STREAK: usize = 100;

/// Reads a JSONL conversation transcript (one message per line, newest
/// first) into memory, keeping file order.
///
/// A bad line is skipped with a warning so one corrupt entry cannot lose the
/// whole conversation, but a file that is mostly bad is refused: the parse
/// aborts after 100 unparseable lines in a row, and a finished pass is
/// rejected when more than half of its non-blank lines were skipped.
pub fn parse_transcript_file(path: &Path) -> Result<Vec<MessageRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open transcript file: {}", path.display()))?;
    refuse_oversized(&file, path)?;

    let mut records = Vec::new();
    let mut seen_lines = 0usize;
    let mut bad_lines = 0usize;
    let mut failure_streak = 0usize;

    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line
            .with_context(|| format!("Failed to read transcript line {}", line_no + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        seen_lines += 1;

        match serde_json::from_str::<MessageRecord>(&line) {
            Ok(record) => {
                records.push(record);
                failure_streak = 0;
            }
            Err(e) => {
                eprintln!("Warning: skipping transcript line {}: {}", line_no + 1, e);
                bad_lines += 1;
                failure_streak += 1;
                if failure_streak >= MAX_FAILURE_STREAK {
                    bail!(
                        "Gave up on transcript after {} unparseable lines in a row",
                        failure_streak
                    );
                }
            }
        }
    }

    // bad/seen > 1/2, kept in integers
    if bad_lines * 2 > seen_lines {
        bail!(
            "Transcript mostly unparseable: {} of {} lines skipped",
            bad_lines,
            seen_lines
        );
    }

    if bad_lines > 0 {
        eprintln!(
            "Loaded {} messages from transcript ({} lines skipped)",
            records.len(),
            bad_lines
        );
    }

    Ok(records)
}

/// Size check on the already-open handle, so the bytes read afterwards come
/// from the same file the check saw.
fn refuse_oversized(file: &File, path: &Path) -> Result<()> {
    let len = file
        .metadata()
        .with_context(|| format!("Failed to stat transcript file: {}", path.display()))?
        .len();

    if len > MAX_TRANSCRIPT_BYTES {
        bail!(
            "File too large: {} is {} bytes (limit {})",
            path.display(),
            len,
            MAX_TRANSCRIPT_BYTES
        );
    }

    Ok(())
}
