//! Annotated documents

use crate::span::Span;
use crate::unit::Unit;
use serde::{Deserialize, Serialize};

/// Text buffer together with the annotation units anchored to it
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub text: String,
    #[serde(default)]
    pub units: Vec<Unit>,
}

impl Document {
    pub fn new(text: impl Into<String>, units: Vec<Unit>) -> Self {
        Self {
            text: text.into(),
            units,
        }
    }

    /// Text covered by `span`, or the whole text for `None`
    ///
    /// Offsets count characters, not bytes. Offsets past the end of the
    /// text are clamped to it.
    pub fn text_of(&self, span: Option<&Span>) -> &str {
        match span {
            None => &self.text,
            Some(span) => {
                let start = byte_offset(&self.text, span.start);
                let end = byte_offset(&self.text, span.end).max(start);
                &self.text[start..end]
            }
        }
    }
}

fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
