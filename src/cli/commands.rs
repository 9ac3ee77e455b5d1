use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::models::Sender;
use crate::parsers::parse_transcript_file;
use crate::search::SearchIndex;

/// Longest body snippet printed per search hit
const SNIPPET_MAX_CHARS: usize = 60;

#[derive(Parser)]
#[command(name = "convo-search")]
#[command(version = "0.1.0")]
#[command(about = "Search through conversation transcripts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show statistics about a transcript
    Stats {
        /// Path to a JSONL transcript file
        file: PathBuf,
    },
    /// Search a transcript and list every match
    Search {
        /// Path to a JSONL transcript file
        file: PathBuf,
        /// Term to search for (case-insensitive substring)
        term: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Stats { file }) => {
            show_stats(file)?;
        }
        Some(Commands::Search { file, term }) => {
            run_search(file, term)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn show_stats(file: &Path) -> Result<()> {
    let messages = parse_transcript_file(file)?;

    let outgoing = messages.iter().filter(|m| matches!(m.sender, Sender::Outgoing)).count();
    let incoming = messages.iter().filter(|m| matches!(m.sender, Sender::Incoming)).count();

    println!("Conversation Transcript Statistics");
    println!("==================================");
    println!("Total messages: {}", messages.len());
    println!("  Outgoing: {}", outgoing);
    println!("  Incoming: {}", incoming);

    // Transcript order is newest first
    if let Some(oldest) = messages.last() {
        println!("Oldest message: {}", oldest.timestamp.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(newest) = messages.first() {
        println!("Newest message: {}", newest.timestamp.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}

fn run_search(file: &Path, term: &str) -> Result<()> {
    let messages = parse_transcript_file(file)?;
    let mut index = SearchIndex::from_messages(messages);

    index.search(term);

    let total = index.result_count();
    println!("{} matches for \"{}\"", total, term);

    while let Some(position) = index.next_position() {
        if let Some(result) = index.current() {
            println!(
                "result {} of {}: position {}: {}",
                index.counter(),
                total,
                position,
                snippet(&result.message().body)
            );
        }
    }

    Ok(())
}

/// Truncate a body for single-line display, on a char boundary.
fn snippet(body: &str) -> String {
    let mut out: String = body.chars().take(SNIPPET_MAX_CHARS).collect();
    if body.chars().count() > SNIPPET_MAX_CHARS {
        out.push('…');
    }
    out
}
