//! Segmented file resolution

use super::Layout;
use crate::error::{IntakeError, Result};
use glob::{glob, Pattern};
use std::path::{self, Path, PathBuf};

/// Glob pattern for the segmented transcripts of `doc` in `seg_dir`
///
/// Only the `*` between document name and suffix is a wildcard; the
/// directory, name and suffix are matched literally.
pub fn segmented_pattern(seg_dir: &Path, doc: &str, layout: &Layout) -> String {
    format!(
        "{}{}{}*{}",
        Pattern::escape(&seg_dir.to_string_lossy()),
        path::MAIN_SEPARATOR,
        Pattern::escape(doc),
        Pattern::escape(&layout.segmented_suffix)
    )
}

/// True if `file_name` is a segmented transcript name for `doc`
pub fn matches_segmented_name(doc: &str, file_name: &str, layout: &Layout) -> bool {
    let suffix = layout.segmented_suffix.as_str();
    file_name.len() >= doc.len() + suffix.len()
        && file_name.starts_with(doc)
        && file_name.ends_with(suffix)
}

/// The single candidate, or an error describing why there is not exactly one
pub fn select_unique(pattern: &str, mut candidates: Vec<PathBuf>) -> Result<PathBuf> {
    if candidates.len() == 1 {
        if let Some(only) = candidates.pop() {
            return Ok(only);
        }
    }
    candidates.sort();
    Err(IntakeError::AmbiguousSource {
        pattern: pattern.to_string(),
        candidates,
    })
}

/// Find the segmented transcript to read for `doc`
///
/// An explicit path wins over the search in the segmented directory.
pub fn resolve_source(
    doc_dir: &Path,
    doc: &str,
    explicit: Option<&Path>,
    layout: &Layout,
) -> Result<PathBuf> {
    let source = match explicit {
        Some(given) => {
            let absolute = path::absolute(given).map_err(|source| IntakeError::Io {
                path: given.to_path_buf(),
                source,
            })?;
            if !absolute.is_file() {
                return Err(IntakeError::SegmentedFileNotFound(absolute));
            }
            absolute
        }
        None => {
            let seg_dir = doc_dir.join(&layout.segmented_dir);
            let pattern = segmented_pattern(&seg_dir, doc, layout);
            log::debug!("Looking for segmented file with pattern {pattern}");

            let paths = glob(&pattern).map_err(|source| IntakeError::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
            // Unreadable entries cannot be the source; skip them.
            let candidates: Vec<PathBuf> = paths
                .filter_map(|p| p.ok())
                .filter(|p| {
                    p.file_name()
                        .and_then(|name| name.to_str())
                        .is_some_and(|name| matches_segmented_name(doc, name, layout))
                })
                .collect();
            select_unique(&pattern, candidates)?
        }
    };

    // A directory may match the search pattern too.
    if !source.is_file() {
        return Err(IntakeError::SegmentedFileNotFound(source));
    }
    Ok(source)
}
