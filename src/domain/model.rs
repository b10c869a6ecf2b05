use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Result of handling one entry of the file list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CopyOutcome {
    Copied {
        file: String,
        source: PathBuf,
        destination: PathBuf,
        bytes: u64,
    },
    /// Dry-run only: the source exists and would be copied.
    Planned {
        file: String,
        source: PathBuf,
        destination: PathBuf,
    },
    Missing { file: String, source: PathBuf },
}

impl CopyOutcome {
    pub fn file(&self) -> &str {
        match self {
            CopyOutcome::Copied { file, .. }
            | CopyOutcome::Planned { file, .. }
            | CopyOutcome::Missing { file, .. } => file,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CopyOutcome::Missing { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyReport {
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcomes: Vec<CopyOutcome>,
}

impl CopyReport {
    pub fn copied_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, CopyOutcome::Copied { .. }))
            .count()
    }

    pub fn missing_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_missing()).count()
    }

    pub fn missing_files(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.is_missing())
            .map(CopyOutcome::file)
            .collect()
    }

    pub fn bytes_copied(&self) -> u64 {
        self.outcomes
            .iter()
            .map(|o| match o {
                CopyOutcome::Copied { bytes, .. } => *bytes,
                _ => 0,
            })
            .sum()
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
