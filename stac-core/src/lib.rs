//! STAC corpus core library
//!
//! Provides the corpus model (spans, annotation units, documents), the
//! annotation renderer used for text dumps, and the intake routine that
//! regenerates unsegmented transcripts from segmented ones.

pub mod annotate;
pub mod corpus;
pub mod document;
pub mod error;
pub mod intake;
pub mod render;
pub mod span;
pub mod unit;

// Re-export key types
pub use annotate::{annotate, Insert, Inserts};
pub use corpus::{read_corpus, Corpus, CorpusFilter, DocumentKey, LoadProgress};
pub use document::Document;
pub use error::{CorpusError, IntakeError};
pub use intake::{create_unsegmented_file, Layout, UnsegmentReport};
pub use render::{format_block, render_document, Rendering};
pub use span::Span;
pub use unit::{sorted_first_widest, Unit};
