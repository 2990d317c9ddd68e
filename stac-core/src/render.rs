//! Annotated text dumps, optionally restricted to the dialogue edges
//!
//! In edge mode only the first and last dialogue of a document are shown.
//! Each excerpt is rendered on its own: units enclosed by the dialogue are
//! copied with offsets relative to the dialogue start, so the corpus units
//! themselves are never touched.

use crate::annotate::{annotate, Inserts};
use crate::corpus::DocumentKey;
use crate::document::Document;
use crate::span::Span;
use crate::unit::{sorted_first_widest, Unit};

/// Rendered form of one document
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendering {
    /// The whole document
    Whole(String),
    /// First dialogue, and the last one when there are several
    Edges {
        leading: String,
        trailing: Option<String>,
    },
}

impl Rendering {
    /// Rendered excerpts in display order
    pub fn excerpts(&self) -> Vec<&str> {
        match self {
            Rendering::Whole(text) => vec![text.as_str()],
            Rendering::Edges { leading, trailing } => {
                let mut out = vec![leading.as_str()];
                out.extend(trailing.as_deref());
                out
            }
        }
    }
}

/// Render a document, restricted to its dialogue edges if `edges` is set
///
/// A document without dialogue units is rendered whole even in edge mode.
pub fn render_document(doc: &Document, edges: bool, inserts: &Inserts) -> Rendering {
    if edges {
        let dialogues = sorted_first_widest(doc.units.iter().filter(|u| u.is_dialogue()));
        if let (Some(first), Some(last)) = (dialogues.first(), dialogues.last()) {
            let leading = render_span(doc, Some(&first.span), inserts);
            let trailing =
                (dialogues.len() > 1).then(|| render_span(doc, Some(&last.span), inserts));
            return Rendering::Edges { leading, trailing };
        }
        log::debug!("No dialogue units found, rendering whole document");
    }
    Rendering::Whole(render_span(doc, None, inserts))
}

/// Annotated text for `span` (or the whole document), trimmed
pub fn render_span(doc: &Document, span: Option<&Span>, inserts: &Inserts) -> String {
    let text = doc.text_of(span);
    let annotated = match span {
        None => annotate(text, &doc.units, inserts),
        Some(span) => annotate(text, &relocate_units(&doc.units, span), inserts),
    };
    annotated.trim().to_string()
}

/// Copies of the units enclosed by `span`, with offsets relative to its start
pub fn relocate_units(units: &[Unit], span: &Span) -> Vec<Unit> {
    units
        .iter()
        .filter(|u| span.encloses(&u.span))
        .filter_map(|u| u.span.relative(span).map(|rel| u.with_span(rel)))
        .collect()
}

/// Text block for one document: header, excerpts and a trailing blank line
pub fn format_block(key: &DocumentKey, rendering: &Rendering) -> String {
    let mut out = format!("========== {key} ============\n\n");
    match rendering {
        Rendering::Whole(text) => {
            out.push_str(text);
            out.push('\n');
        }
        Rendering::Edges { leading, trailing } => {
            out.push_str(leading);
            out.push('\n');
            if let Some(trailing) = trailing {
                out.push_str("...\n\n");
                out.push_str(trailing);
                out.push('\n');
            }
        }
    }
    out.push('\n');
    out
}
