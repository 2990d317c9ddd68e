//! Text dump command

use super::init_logging;
use crate::config::CliConfig;
use crate::input::{load_corpus, CorpusArgs};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Parser;
use stac_core::render_document;
use std::io;
use std::path::PathBuf;

/// Dump the text in documents with segment annotations
#[derive(Debug, Parser)]
#[command(name = "stac-text", version)]
pub struct TextArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// First/last dialogues only
    #[arg(long)]
    pub edges: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "STAC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Header line per document followed by the annotated text
    Text,
    /// JSON array of documents with their annotated excerpts
    Json,
}

impl TextArgs {
    /// Execute the command, writing to stdout
    pub fn execute(&self) -> Result<()> {
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::stdout()),
            OutputFormat::Json => Box::new(JsonFormatter::new(io::BufWriter::new(io::stdout()))),
        };
        self.execute_with(formatter.as_mut())
    }

    /// Execute the command with the given formatter
    pub fn execute_with(&self, formatter: &mut dyn OutputFormatter) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let inserts = config.annotate.inserts();
        let filter = self.corpus.filter()?;

        let mut progress = ProgressReporter::new(self.quiet);
        let corpus = load_corpus(&self.corpus.corpus, &filter, &mut progress)?;

        for (key, doc) in corpus.iter() {
            let rendering = render_document(doc, self.edges, &inserts);
            formatter.format_document(key, &rendering)?;
        }
        formatter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DOC: &str = r#"{
        "text": "hi all. bye now.",
        "units": [
            {"id": "d1", "type": "Dialogue", "span": {"start": 0, "end": 7}},
            {"id": "e1", "type": "Segment", "span": {"start": 0, "end": 7}},
            {"id": "d2", "type": "Dialogue", "span": {"start": 8, "end": 16}},
            {"id": "e2", "type": "Segment", "span": {"start": 8, "end": 16}}
        ]
    }"#;

    fn corpus() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("s1/units/GOLD");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("01.json"), DOC).unwrap();
        temp_dir
    }

    fn run(args: &[&str]) -> String {
        let parsed = TextArgs::try_parse_from(args.iter().copied()).unwrap();
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            parsed.execute_with(&mut formatter).unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_parse_arguments() {
        let parsed = TextArgs::try_parse_from([
            "stac-text",
            "corpus",
            "--doc",
            "pilot.*",
            "--edges",
            "-f",
            "json",
        ])
        .unwrap();

        assert_eq!(parsed.corpus.corpus, PathBuf::from("corpus"));
        assert_eq!(parsed.corpus.doc.as_deref(), Some("pilot.*"));
        assert!(parsed.edges);
        assert_eq!(parsed.format, OutputFormat::Json);
    }

    #[test]
    fn test_whole_dump() {
        let temp_dir = corpus();
        let root = temp_dir.path().to_str().unwrap();

        let output = run(&["stac-text", root, "-q"]);
        assert_eq!(
            output,
            "========== s1 [01] units GOLD ============\n\n{hi all.} \n\n{bye now.}\n\n"
        );
    }

    #[test]
    fn test_edges_dump() {
        let temp_dir = corpus();
        let root = temp_dir.path().to_str().unwrap();

        let output = run(&["stac-text", root, "--edges", "-q"]);
        assert_eq!(
            output,
            "========== s1 [01] units GOLD ============\n\n{hi all.}\n...\n\n{bye now.}\n\n"
        );
    }

    #[test]
    fn test_filter_excludes_everything() {
        let temp_dir = corpus();
        let root = temp_dir.path().to_str().unwrap();

        let output = run(&["stac-text", root, "--stage", "discourse", "-q"]);
        assert_eq!(output, "");
    }
}
