use crate::models::{LogEntry, TIMESTAMP_FORMAT};
use chrono::Local;
use log::{error, warn};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Append-only event log backed by a single text file.
///
/// One line per event: `timestamp,event_type,message`. The file is created
/// on first append and never truncated afterwards; the message is written
/// raw, so embedded delimiters survive the split-at-most-twice parse on the
/// way back out.
#[derive(Debug, Clone)]
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one timestamped event line, creating the file if absent.
    ///
    /// Returns false on IO failure; prior content is left untouched either
    /// way, and callers are expected to proceed regardless.
    pub fn append(&self, event_type: &str, message: &str) -> bool {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let result = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{},{},{}", timestamp, event_type, message));

        match result {
            Ok(()) => true,
            Err(err) => {
                error!("Error logging event to {}: {}", self.path.display(), err);
                false
            }
        }
    }

    /// Case-insensitive substring search over raw log lines.
    ///
    /// An empty term matches every line that parses. Matching lines split
    /// into at most three fields; lines with fewer than three are dropped,
    /// consistent with the tolerant record parsing elsewhere.
    pub fn search(&self, term: &str) -> Vec<LogEntry> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!("Log file not found: {}", self.path.display());
                return Vec::new();
            }
            Err(err) => {
                error!("Error searching logs in {}: {}", self.path.display(), err);
                return Vec::new();
            }
        };

        let needle = term.to_lowercase();
        let mut results = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    error!("Error reading log line from {}: {}", self.path.display(), err);
                    return Vec::new();
                }
            };
            if !line.to_lowercase().contains(&needle) {
                continue;
            }
            if let Some(entry) = LogEntry::parse(&line) {
                results.push(entry);
            }
        }
        results
    }
}
