//! Error types for corpus access and intake

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while regenerating an unsegmented file
#[derive(Error, Debug)]
pub enum IntakeError {
    /// The per-document corpus directory does not exist
    #[error("unable to find corpus files {}", .0.display())]
    CorpusNotFound(PathBuf),

    /// A segmented file named or resolved for the document is not a file
    #[error("unable to locate segmented file {}", .0.display())]
    SegmentedFileNotFound(PathBuf),

    /// The segmented glob matched zero or several files
    #[error("expected exactly one segmented file matching {pattern}, found {}", describe(.candidates))]
    AmbiguousSource {
        pattern: String,
        candidates: Vec<PathBuf>,
    },

    /// The search pattern could not be compiled
    #[error("invalid segmented file pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl IntakeError {
    /// True for errors caused by the caller's arguments or corpus layout
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            IntakeError::CorpusNotFound(_)
                | IntakeError::SegmentedFileNotFound(_)
                | IntakeError::AmbiguousSource { .. }
                | IntakeError::Pattern { .. }
        )
    }
}

fn describe(candidates: &[PathBuf]) -> String {
    if candidates.is_empty() {
        return "none".to_string();
    }
    let names: Vec<String> = candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    format!("{}: {}", candidates.len(), names.join(", "))
}

/// Errors raised while reading an annotated corpus
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("corpus directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed document {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid corpus pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("invalid {field} filter: {source}")]
    Filter {
        field: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Result type for intake operations
pub type Result<T> = std::result::Result<T, IntakeError>;
