//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use stac_core::{format_block, DocumentKey, Rendering};
use std::io::{self, Write};

/// Plain text formatter - a header line, then the annotated excerpts
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::BufWriter<io::Stdout>> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::BufWriter::new(io::stdout()))
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, key: &DocumentKey, rendering: &Rendering) -> Result<()> {
        self.writer.write_all(format_block(key, rendering).as_bytes())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
