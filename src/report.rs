use serde::Serialize;
use std::path::Path;

use crate::patch::FileOutcome;

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub status: String,
    pub detail: Option<String>,
}

impl FileReport {
    pub fn new(path: &Path, outcome: &FileOutcome) -> Self {
        let detail = match outcome {
            FileOutcome::IoError(message) => Some(message.clone()),
            _ => None,
        };

        Self {
            path: path.display().to_string(),
            status: outcome.label().to_string(),
            detail,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub roots: Vec<String>,
    pub examined: usize,
    pub updated: usize,
    pub files: Vec<FileReport>,
}

pub fn status_line(path: &Path, outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Updated => format!("Updated {}", path.display()),
        FileOutcome::AlreadyPatched => format!(
            "Skipping {} - already has JavaBean-style getters",
            path.display()
        ),
        FileOutcome::NoAccessors => format!(
            "Skipping {} - no record-style accessors found",
            path.display()
        ),
        FileOutcome::NoInsertionPoint => format!(
            "Warning: Could not find closing brace in {}",
            path.display()
        ),
        FileOutcome::IoError(message) => {
            format!("Warning: Could not process {}: {message}", path.display())
        }
    }
}
