//! Annotation units and their classification

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Unit types counted as elementary discourse units
pub const EDU_TYPES: &[&str] = &[
    "Segment",
    "Offer",
    "Counteroffer",
    "Accept",
    "Refusal",
    "Strategic_comment",
    "Question",
    "Other",
];

/// An annotation unit anchored to a document's text
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Local identifier within the document
    #[serde(default)]
    pub id: String,
    /// Annotation type, e.g. `Dialogue`, `Turn` or `Segment`
    #[serde(rename = "type")]
    pub unit_type: String,
    pub span: Span,
    /// Auxiliary attributes
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub features: BTreeMap<String, String>,
}

impl Unit {
    /// Create a unit without features
    pub fn new(id: impl Into<String>, unit_type: impl Into<String>, span: Span) -> Self {
        Self {
            id: id.into(),
            unit_type: unit_type.into(),
            span,
            features: BTreeMap::new(),
        }
    }

    /// Copy of this unit anchored at a different span
    pub fn with_span(&self, span: Span) -> Self {
        Self {
            span,
            ..self.clone()
        }
    }

    pub fn is_dialogue(&self) -> bool {
        self.unit_type == "Dialogue"
    }

    pub fn is_edu(&self) -> bool {
        EDU_TYPES.contains(&self.unit_type.as_str())
    }

    /// Coarse type used to pick display markers (`EDU` for all dialogue acts)
    pub fn rough_type(&self) -> &str {
        if self.is_edu() {
            "EDU"
        } else {
            &self.unit_type
        }
    }
}

/// Order units by start offset, preferring the wider unit on ties
///
/// The sort is stable, so units with identical spans keep their input order.
pub fn sorted_first_widest<'a, I>(units: I) -> Vec<&'a Unit>
where
    I: IntoIterator<Item = &'a Unit>,
{
    let mut sorted: Vec<&Unit> = units.into_iter().collect();
    sorted.sort_by_key(|u| (u.span.start, Reverse(u.span.end)));
    sorted
}
