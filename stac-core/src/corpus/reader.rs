//! Corpus discovery and document loading

use super::filter::CorpusFilter;
use super::key::DocumentKey;
use super::Corpus;
use crate::document::Document;
use crate::error::CorpusError;
use glob::{glob, Pattern};
use std::fs;
use std::path::{Path, PathBuf};

/// A document file found in the corpus
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorpusEntry {
    pub key: DocumentKey,
    pub path: PathBuf,
}

/// List the documents under `root` accepted by `filter`, in sort order
pub fn discover(root: &Path, filter: &CorpusFilter) -> Result<Vec<CorpusEntry>, CorpusError> {
    let root = fs::canonicalize(root)
        .ok()
        .filter(|p| p.is_dir())
        .ok_or_else(|| CorpusError::NotFound(root.to_path_buf()))?;

    let pattern = format!("{}/**/*.json", Pattern::escape(&root.to_string_lossy()));
    log::debug!("Searching corpus with pattern {pattern}");

    let mut entries = Vec::new();
    for path_result in glob(&pattern)? {
        let path = path_result.map_err(|e| {
            let path = e.path().to_path_buf();
            CorpusError::Io {
                path,
                source: e.into(),
            }
        })?;

        if !path.is_file() {
            continue;
        }

        let Some(key) = key_from_path(&root, &path) else {
            log::warn!(
                "Skipping {}: not laid out as <doc>/<stage>/[<annotator>/]<subdoc>.json",
                path.display()
            );
            continue;
        };

        if filter.accepts(&key) {
            entries.push(CorpusEntry { key, path });
        }
    }

    entries.sort_by_cached_key(|entry| entry.key.sort_path());
    Ok(entries)
}

/// Load a single JSON document
pub fn read_document(path: &Path) -> Result<Document, CorpusError> {
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| CorpusError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Corpus loading events passed to the `read_corpus` callback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadProgress<'a> {
    /// Discovery finished; this many documents will be read
    Discovered(usize),
    /// A document has been read
    Loaded(&'a DocumentKey),
}

/// Discover and load every document under `root` accepted by `filter`
///
/// `on_progress` receives one `Discovered` event, then one `Loaded` event
/// per document in sort order.
pub fn read_corpus<F>(
    root: &Path,
    filter: &CorpusFilter,
    mut on_progress: F,
) -> Result<Corpus, CorpusError>
where
    F: FnMut(LoadProgress<'_>),
{
    let entries = discover(root, filter)?;
    if entries.is_empty() {
        log::warn!("No documents found in {}", root.display());
    }
    on_progress(LoadProgress::Discovered(entries.len()));

    let mut corpus = Corpus::new();
    for entry in entries {
        log::debug!("Reading {}", entry.path.display());
        let document = read_document(&entry.path)?;
        on_progress(LoadProgress::Loaded(&entry.key));
        corpus.insert(entry.key, document);
    }
    log::info!("Read {} documents from {}", corpus.len(), root.display());
    Ok(corpus)
}

fn key_from_path(root: &Path, path: &Path) -> Option<DocumentKey> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<&str> = relative
        .iter()
        .map(|c| c.to_str())
        .collect::<Option<_>>()?;
    let subdoc = Path::new(parts.last()?).file_stem()?.to_str()?;

    match parts.as_slice() {
        [doc, stage, _] => Some(DocumentKey::new(*doc, subdoc, *stage, None)),
        [doc, stage, annotator, _] => Some(DocumentKey::new(
            *doc,
            subdoc,
            *stage,
            Some(annotator.to_string()),
        )),
        _ => None,
    }
}
