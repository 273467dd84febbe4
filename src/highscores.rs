//! High score table
//!
//! Keeps the top 5 scores, highest first, in a plain text file of exactly five
//! lines: `"{rank}: {score}"` for recorded slots and `"{rank}:"` for vacant
//! ones. Damaged lines never fail a load; an unreadable score counts as 0.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 5;

/// Default file name, relative to the working directory
pub const DEFAULT_FILE: &str = "highscores.txt";

/// High score table, sorted descending
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScores {
    entries: Vec<u32>,
}

impl HighScores {
    /// Create empty table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Recorded scores, highest first
    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    /// Check if a score would make the table
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Full table: must beat the current minimum
        self.entries.last().is_none_or(|&lowest| score > lowest)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|&e| score > e);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Record a finished session's score.
    ///
    /// Fills a vacant slot while fewer than five are recorded, otherwise
    /// replaces the lowest score only if the new one beats it.
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn record(&mut self, score: u32) -> Option<usize> {
        let rank = self.potential_rank(score)?;
        self.entries.insert(rank - 1, score);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().copied()
    }

    /// Encode as the five-line text format
    pub fn to_text(&self) -> String {
        (0..MAX_HIGH_SCORES)
            .map(|i| match self.entries.get(i) {
                Some(score) => format!("{}: {}\n", i + 1, score),
                None => format!("{}:\n", i + 1),
            })
            .collect()
    }

    /// Decode the text format. Only the first five lines are read.
    pub fn parse(text: &str) -> Self {
        let mut entries = Vec::with_capacity(MAX_HIGH_SCORES);

        for line in text.lines().take(MAX_HIGH_SCORES) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let value = match line.split_once(':') {
                Some((_, value)) => value.trim(),
                None => {
                    log::warn!("High score line without rank: {:?}", line);
                    entries.push(0);
                    continue;
                }
            };
            if value.is_empty() {
                // Vacant slot
                continue;
            }
            let score = value.parse::<u32>().unwrap_or_else(|_| {
                log::warn!("Unreadable high score {:?}, counting as 0", value);
                0
            });
            entries.push(score);
        }

        entries.sort_unstable_by(|a, b| b.cmp(a));
        Self { entries }
    }

    /// Load high scores from a file; a missing or unreadable file yields an empty table
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let scores = Self::parse(&text);
                log::info!("Loaded {} high scores", scores.entries.len());
                scores
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No high scores found, starting fresh");
                Self::new()
            }
            Err(err) => {
                log::warn!("Could not read {}: {}", path.display(), err);
                Self::new()
            }
        }
    }

    /// Save high scores to a file
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        std::fs::write(path, self.to_text())?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}
