//! Segmented to unsegmented CSV transformation

use super::locate::resolve_source;
use super::Layout;
use crate::error::{IntakeError, Result};
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{self, Path, PathBuf};

const DELIMITER: u8 = b'\t';

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Outcome of a successful regeneration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsegmentReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Records parsed from the source
    pub rows_read: usize,
    /// Records written to the destination
    pub rows_written: usize,
}

/// Strip `&` from every cell, dropping the row if nothing but whitespace remains
pub fn clean_row<I, S>(cells: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let cleaned: Vec<String> = cells
        .into_iter()
        .map(|cell| cell.as_ref().replace('&', ""))
        .collect();

    if cleaned.iter().all(|cell| cell.trim().is_empty()) {
        None
    } else {
        Some(cleaned)
    }
}

/// Copy tab-separated rows from `input` to `output` through [`clean_row`]
///
/// Returns the number of records read and written. Output lines end with
/// `\n` whatever the input used. A leading byte order mark stays on the
/// first row.
pub fn transform<R: Read, W: Write>(input: R, output: W) -> csv::Result<(usize, usize)> {
    let mut input = BufReader::new(input);
    // The csv reader silently drops a leading mark, so it is taken out first.
    let mut mark = take_byte_order_mark(&mut input)?;

    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(output);

    let mut rows_read = 0;
    let mut rows_written = 0;
    let mut copy_row = |cells: Vec<String>| -> csv::Result<()> {
        rows_read += 1;
        if let Some(row) = clean_row(cells) {
            writer.write_record(&row)?;
            rows_written += 1;
        }
        Ok(())
    };

    if mark == LeadingMark::OwnLine {
        copy_row(vec![BYTE_ORDER_MARK.to_string()])?;
        mark = LeadingMark::Absent;
    }
    for record in reader.records() {
        let mut cells: Vec<String> = record?.iter().map(str::to_owned).collect();
        if mark == LeadingMark::FirstRecord {
            if let Some(first) = cells.first_mut() {
                first.insert(0, BYTE_ORDER_MARK);
            }
            mark = LeadingMark::Absent;
        }
        copy_row(cells)?;
    }
    writer.flush()?;

    Ok((rows_read, rows_written))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LeadingMark {
    Absent,
    /// Nothing else on the first line
    OwnLine,
    /// Part of the first cell of the first record
    FirstRecord,
}

fn take_byte_order_mark<B: BufRead>(input: &mut B) -> io::Result<LeadingMark> {
    let mut buf = [0; 3];
    let encoded = BYTE_ORDER_MARK.encode_utf8(&mut buf).as_bytes();
    if !input.fill_buf()?.starts_with(encoded) {
        return Ok(LeadingMark::Absent);
    }
    input.consume(encoded.len());

    let own_line = match input.fill_buf()?.first() {
        None | Some(b'\n') | Some(b'\r') => true,
        Some(_) => false,
    };
    Ok(if own_line {
        LeadingMark::OwnLine
    } else {
        LeadingMark::FirstRecord
    })
}

/// Rebuild `<doc>/unsegmented/<doc>.soclog.csv` from its segmented transcript
///
/// The destination is overwritten if present. Nothing is created on disk
/// unless the source resolves to exactly one file.
pub fn create_unsegmented_file(
    corpus_root: &Path,
    doc: &str,
    segmented: Option<&Path>,
    layout: &Layout,
) -> Result<UnsegmentReport> {
    let corpus_root = path::absolute(corpus_root).map_err(|source| IntakeError::Io {
        path: corpus_root.to_path_buf(),
        source,
    })?;
    let doc_dir = corpus_root.join(doc);
    if !doc_dir.is_dir() {
        return Err(IntakeError::CorpusNotFound(doc_dir));
    }

    let source = resolve_source(&doc_dir, doc, segmented, layout)?;
    log::info!("Using segmented file {}", source.display());

    let out_dir = doc_dir.join(&layout.unsegmented_dir);
    if !out_dir.is_dir() {
        fs::create_dir(&out_dir).map_err(|e| io_error(&out_dir, e))?;
        log::info!("Created {}", out_dir.display());
    }
    let destination = out_dir.join(format!("{doc}{}", layout.unsegmented_suffix));

    let input = File::open(&source).map_err(|e| io_error(&source, e))?;
    let output = File::create(&destination).map_err(|e| io_error(&destination, e))?;
    let (rows_read, rows_written) = transform(input, output).map_err(|e| IntakeError::Csv {
        path: source.clone(),
        source: e,
    })?;

    log::debug!(
        "Wrote {rows_written} of {rows_read} rows to {}",
        destination.display()
    );

    Ok(UnsegmentReport {
        source,
        destination,
        rows_read,
        rows_written,
    })
}

fn io_error(path: &Path, source: std::io::Error) -> IntakeError {
    IntakeError::Io {
        path: path.to_path_buf(),
        source,
    }
}
