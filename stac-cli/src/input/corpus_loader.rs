//! Corpus loading with progress reporting

use crate::progress::ProgressReporter;
use anyhow::Result;
use stac_core::{read_corpus, Corpus, CorpusFilter, LoadProgress};
use std::path::Path;

/// Read every document under `root` accepted by `filter`
pub fn load_corpus(
    root: &Path,
    filter: &CorpusFilter,
    progress: &mut ProgressReporter,
) -> Result<Corpus> {
    let corpus = read_corpus(root, filter, |event| match event {
        LoadProgress::Discovered(total) => progress.init_documents(total as u64),
        LoadProgress::Loaded(key) => progress.document_loaded(key),
    });
    progress.finish();

    Ok(corpus?)
}
