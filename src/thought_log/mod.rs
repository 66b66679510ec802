//! Append-only archive of model thoughts.
//!
//! Every non-empty thought is appended to a per-day file in the configured
//! directory. Each entry is formatted in memory first and written with a
//! single `write_all` on a freshly opened append-mode handle, so concurrent
//! writers never interleave inside an entry.

pub mod filename;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::config::LogConfig;

pub use filename::{partition_file_name, sanitize_suffix};

/// Timestamp format of the entry header line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Errors that can occur while archiving a thought.
#[derive(Debug, thiserror::Error)]
pub enum ThoughtLogError {
    #[error("Failed to create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write thought log {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Destination for archived thoughts.
pub trait ThoughtSink: Send + Sync {
    /// Archive one thought. Empty text is ignored.
    fn record(&self, thought: &str) -> Result<(), ThoughtLogError>;
}

/// Sink that discards everything (archiving disabled).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ThoughtSink for NullSink {
    fn record(&self, _thought: &str) -> Result<(), ThoughtLogError> {
        Ok(())
    }
}

/// Format one log entry.
pub fn format_entry(timestamp: NaiveDateTime, title: &str, thought: &str) -> String {
    format!(
        "[{}] --- {} ---\n{}\n\n",
        timestamp.format(TIMESTAMP_FORMAT),
        title,
        thought
    )
}

/// Day-partitioned log files in one directory.
#[derive(Debug, Clone)]
pub struct ThoughtLog {
    directory: PathBuf,
    file_suffix: String,
    entry_title: String,
}

impl ThoughtLog {
    /// Create a log writing to `directory` with the default naming.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        let defaults = LogConfig::default();
        Self {
            directory: directory.into(),
            file_suffix: defaults.file_suffix,
            entry_title: defaults.entry_title,
        }
    }

    pub fn from_config(config: &LogConfig) -> Self {
        Self {
            directory: config.directory.clone(),
            file_suffix: config.file_suffix.clone(),
            entry_title: config.entry_title.clone(),
        }
    }

    pub fn with_file_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.file_suffix = suffix.into();
        self
    }

    pub fn with_entry_title(mut self, title: impl Into<String>) -> Self {
        self.entry_title = title.into();
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the file holding entries written at `timestamp`.
    pub fn partition_path(&self, timestamp: NaiveDateTime) -> PathBuf {
        self.directory
            .join(partition_file_name(timestamp.date(), &self.file_suffix))
    }

    /// Append a thought stamped with the current local time.
    pub fn append(&self, thought: &str) -> Result<Option<PathBuf>, ThoughtLogError> {
        self.append_at(thought, Local::now().naive_local())
    }

    /// Append a thought stamped with `timestamp`.
    ///
    /// Returns the file written, or `None` when `thought` is empty.
    pub fn append_at(
        &self,
        thought: &str,
        timestamp: NaiveDateTime,
    ) -> Result<Option<PathBuf>, ThoughtLogError> {
        if thought.is_empty() {
            return Ok(None);
        }

        fs::create_dir_all(&self.directory).map_err(|source| ThoughtLogError::CreateDir {
            path: self.directory.clone(),
            source,
        })?;

        let path = self.partition_path(timestamp);
        let entry = format_entry(timestamp, &self.entry_title, thought);

        let write_err = |source: std::io::Error| ThoughtLogError::Write {
            path: path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(write_err)?;
        file.write_all(entry.as_bytes()).map_err(write_err)?;

        Ok(Some(path))
    }
}

impl ThoughtSink for ThoughtLog {
    fn record(&self, thought: &str) -> Result<(), ThoughtLogError> {
        self.append(thought).map(|_| ())
    }
}
