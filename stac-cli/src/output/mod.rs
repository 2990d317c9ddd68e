//! Output formatting module

use anyhow::Result;
use stac_core::{DocumentKey, Rendering};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single rendered document
    fn format_document(&mut self, key: &DocumentKey, rendering: &Rendering) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
