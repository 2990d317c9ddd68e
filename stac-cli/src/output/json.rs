//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use stac_core::{DocumentKey, Rendering};
use std::io::Write;

/// JSON formatter - outputs rendered documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Display form of the document key
    pub key: String,
    /// Relative corpus path of the document
    pub path: String,
    /// Annotated excerpts, in display order
    pub excerpts: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, key: &DocumentKey, rendering: &Rendering) -> Result<()> {
        self.documents.push(DocumentData {
            key: key.to_string(),
            path: key.sort_path(),
            excerpts: rendering.excerpts().into_iter().map(str::to_string).collect(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
