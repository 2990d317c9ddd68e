//! Key filters for selecting part of a corpus

use super::key::DocumentKey;
use crate::error::CorpusError;
use regex::Regex;

/// Selects documents by matching key components against regular expressions
///
/// Each pattern must match the whole component. A key without an annotator
/// never passes an annotator filter.
#[derive(Clone, Debug, Default)]
pub struct CorpusFilter {
    doc: Option<Regex>,
    subdoc: Option<Regex>,
    stage: Option<Regex>,
    annotator: Option<Regex>,
}

impl CorpusFilter {
    /// Filter accepting every document
    pub fn new() -> Self {
        Self::default()
    }

    pub fn doc(mut self, pattern: &str) -> Result<Self, CorpusError> {
        self.doc = Some(compile("doc", pattern)?);
        Ok(self)
    }

    pub fn subdoc(mut self, pattern: &str) -> Result<Self, CorpusError> {
        self.subdoc = Some(compile("subdoc", pattern)?);
        Ok(self)
    }

    pub fn stage(mut self, pattern: &str) -> Result<Self, CorpusError> {
        self.stage = Some(compile("stage", pattern)?);
        Ok(self)
    }

    pub fn annotator(mut self, pattern: &str) -> Result<Self, CorpusError> {
        self.annotator = Some(compile("annotator", pattern)?);
        Ok(self)
    }

    /// True if every configured pattern matches the key
    pub fn accepts(&self, key: &DocumentKey) -> bool {
        let annotator_ok = match (&self.annotator, &key.annotator) {
            (None, _) => true,
            (Some(rx), Some(annotator)) => rx.is_match(annotator),
            (Some(_), None) => false,
        };

        annotator_ok
            && matches(&self.doc, &key.doc)
            && matches(&self.subdoc, &key.subdoc)
            && matches(&self.stage, &key.stage)
    }
}

fn compile(field: &'static str, pattern: &str) -> Result<Regex, CorpusError> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| CorpusError::Filter { field, source })
}

fn matches(rx: &Option<Regex>, value: &str) -> bool {
    rx.as_ref().map_or(true, |rx| rx.is_match(value))
}
