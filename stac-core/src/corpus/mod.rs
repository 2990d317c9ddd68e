//! Annotated corpus access
//!
//! A corpus is a directory tree of JSON documents:
//!
//! ```text
//! <corpus>/<doc>/<stage>/<subdoc>.json
//! <corpus>/<doc>/<stage>/<annotator>/<subdoc>.json
//! ```
//!
//! Each file holds a [`Document`]: its text and the annotation units
//! anchored to it.

mod filter;
mod key;
mod reader;

pub use filter::CorpusFilter;
pub use key::DocumentKey;
pub use reader::{discover, read_corpus, read_document, CorpusEntry, LoadProgress};

use crate::document::Document;
use std::collections::BTreeMap;

/// Documents of a corpus, iterated in [`DocumentKey::sort_path`] order
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    documents: BTreeMap<String, (DocumentKey, Document)>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, replacing any document with the same key
    pub fn insert(&mut self, key: DocumentKey, document: Document) {
        self.documents.insert(key.sort_path(), (key, document));
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DocumentKey, &Document)> {
        self.documents.values().map(|(key, doc)| (key, doc))
    }
}
