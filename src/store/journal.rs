//! Daily Markdown memory files.
//!
//! The journal is the human-readable mirror of the activity feed: one
//! Markdown file per calendar day plus a cumulative `MEMORY.md`. Files
//! are opened in append mode and never rewritten; the day header is
//! written once, on the first entry of the day, and every entry after
//! that is a single appended line.
//!
//! Line format: `- [HH:MM] message` (24-hour, UTC). The cumulative
//! file carries the day stamp in each line instead of a per-day header.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use crate::error::Result;

use super::today_stamp;

/// A parsed journal line.
#[derive(Debug, Clone, Serialize)]
pub struct JournalEntry {
    /// Clock time of the entry, `HH:MM`.
    pub time: String,
    /// The message text.
    pub text: String,
}

/// Append-only writer/reader for the memory directory.
#[derive(Debug, Clone)]
pub struct Journal {
    memory_dir: PathBuf,
    main_path: PathBuf,
}

impl Journal {
    /// Create a journal over `memory_dir`, with the cumulative file at
    /// `main_path` (conventionally `MEMORY.md` next to the directory).
    #[must_use]
    pub fn new(memory_dir: PathBuf, main_path: PathBuf) -> Self {
        Self {
            memory_dir,
            main_path,
        }
    }

    /// The memory directory holding the per-day files.
    #[must_use]
    pub fn memory_dir(&self) -> &Path {
        &self.memory_dir
    }

    /// Path of a day's file.
    #[must_use]
    pub fn day_path(&self, date: &str) -> PathBuf {
        self.memory_dir.join(format!("{date}.md"))
    }

    /// Path of today's file.
    #[must_use]
    pub fn today_path(&self) -> PathBuf {
        self.day_path(&today_stamp())
    }

    /// Idempotent bootstrap: memory dir plus the cumulative file.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created.
    pub fn ensure_ready(&self) -> Result<()> {
        fs::create_dir_all(&self.memory_dir)?;
        if !self.main_path.exists() {
            fs::write(&self.main_path, "# Memory Log\n\n")?;
        }
        Ok(())
    }

    /// Append one entry to today's file and the cumulative file.
    ///
    /// The day header is written exactly once, when today's file comes
    /// into existence.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be appended to. Callers
    /// on the activity path treat this as best-effort.
    pub fn append(&self, message: &str) -> Result<()> {
        self.ensure_ready()?;

        let date = today_stamp();
        let time = Utc::now().format("%H:%M").to_string();
        let path = self.day_path(&date);

        let mut daily = OpenOptions::new().create(true).append(true).open(&path)?;
        if daily.metadata()?.len() == 0 {
            writeln!(daily, "# {date} - Daily Log\n")?;
        }
        writeln!(daily, "- [{time}] {message}")?;

        let mut main = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.main_path)?;
        writeln!(main, "- [{date} {time}] {message}")?;

        Ok(())
    }

    /// Contents of a day's file, if it exists.
    #[must_use]
    pub fn read_day(&self, date: &str) -> Option<String> {
        fs::read_to_string(self.day_path(date)).ok()
    }

    /// Contents of today's file, if any entries were written today.
    #[must_use]
    pub fn read_today(&self) -> Option<String> {
        self.read_day(&today_stamp())
    }

    /// Contents of the cumulative `MEMORY.md`, if it exists.
    #[must_use]
    pub fn read_main(&self) -> Option<String> {
        fs::read_to_string(&self.main_path).ok()
    }

    /// Parsed entries of a day's file, oldest first.
    ///
    /// Lines that are not `- [HH:MM] …` entries (the header, blanks)
    /// are skipped.
    #[must_use]
    pub fn entries(&self, date: &str) -> Vec<JournalEntry> {
        let Some(content) = self.read_day(date) else {
            return Vec::new();
        };

        content
            .lines()
            .filter_map(|line| {
                let rest = line.strip_prefix("- [")?;
                let (time, text) = rest.split_once("] ")?;
                Some(JournalEntry {
                    time: time.to_string(),
                    text: text.to_string(),
                })
            })
            .collect()
    }
}
