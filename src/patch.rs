use std::path::Path;

use crate::extract::extract_accessors;
use crate::insert::insert_before_closing_brace;
use crate::synth::render_getter_block;

pub const DEFAULT_MARKER: &str = "// JavaBean-style getters";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    Applied(String),
    AlreadyPatched,
    NoAccessors,
    NoInsertionPoint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Updated,
    AlreadyPatched,
    NoAccessors,
    NoInsertionPoint,
    IoError(String),
}

impl FileOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            FileOutcome::Updated => "updated",
            FileOutcome::AlreadyPatched => "already-patched",
            FileOutcome::NoAccessors => "no-accessors",
            FileOutcome::NoInsertionPoint => "no-insertion-point",
            FileOutcome::IoError(_) => "io-error",
        }
    }

    pub fn is_updated(&self) -> bool {
        matches!(self, FileOutcome::Updated)
    }
}

pub fn patch_source(content: &str, marker: &str) -> Patch {
    if content.contains(marker) {
        return Patch::AlreadyPatched;
    }

    let accessors = extract_accessors(content);
    if accessors.is_empty() {
        return Patch::NoAccessors;
    }

    let block = render_getter_block(&accessors, marker);
    match insert_before_closing_brace(content, &block) {
        Some(patched) => Patch::Applied(patched),
        None => Patch::NoInsertionPoint,
    }
}

pub fn patch_file(path: &Path, marker: &str) -> FileOutcome {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return FileOutcome::IoError(e.to_string()),
    };

    match patch_source(&content, marker) {
        Patch::AlreadyPatched => FileOutcome::AlreadyPatched,
        Patch::NoAccessors => FileOutcome::NoAccessors,
        Patch::NoInsertionPoint => FileOutcome::NoInsertionPoint,
        Patch::Applied(patched) => match std::fs::write(path, patched) {
            Ok(()) => FileOutcome::Updated,
            Err(e) => FileOutcome::IoError(e.to_string()),
        },
    }
}
