//! Unsegmented file regeneration command

use super::init_logging;
use crate::config::CliConfig;
use anyhow::Result;
use clap::Parser;
use stac_core::create_unsegmented_file;
use std::path::PathBuf;

/// Re-create an unsegmented csv file from segmented
///
/// Writes `<DIR>/<DOC>/unsegmented/<DOC>.soclog.csv` from the file
/// `<DIR>/<DOC>/segmented/<DOC>*.soclog.seg.csv`, dropping blank rows and
/// `&` characters.
#[derive(Debug, Parser)]
#[command(name = "create-unsegmented", version)]
pub struct UnsegmentArgs {
    /// Folder of the corpus
    #[arg(value_name = "DIR")]
    pub corpus_dir: PathBuf,

    /// Document
    #[arg(value_name = "DOC")]
    pub doc: String,

    /// Segmented file to use (if more than one in segmented/)
    #[arg(long, value_name = "FILE")]
    pub segmented: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "STAC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl UnsegmentArgs {
    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let report = create_unsegmented_file(
            &self.corpus_dir,
            &self.doc,
            self.segmented.as_deref(),
            &config.layout,
        )?;

        log::info!(
            "Wrote {} ({} of {} rows kept)",
            report.destination.display(),
            report.rows_written,
            report.rows_read
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(corpus_dir: PathBuf, doc: &str) -> UnsegmentArgs {
        UnsegmentArgs {
            corpus_dir,
            doc: doc.to_string(),
            segmented: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_parse_arguments() {
        let parsed = UnsegmentArgs::try_parse_from([
            "create-unsegmented",
            "data/pilot",
            "pilot01",
            "--segmented",
            "x.soclog.seg.csv",
            "-vv",
        ])
        .unwrap();

        assert_eq!(parsed.corpus_dir, PathBuf::from("data/pilot"));
        assert_eq!(parsed.doc, "pilot01");
        assert_eq!(parsed.segmented, Some(PathBuf::from("x.soclog.seg.csv")));
        assert_eq!(parsed.verbose, 2);
    }

    #[test]
    fn test_missing_positional_is_rejected() {
        assert!(UnsegmentArgs::try_parse_from(["create-unsegmented", "data"]).is_err());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let seg_dir = temp_dir.path().join("s1/segmented");
        fs::create_dir_all(&seg_dir).unwrap();
        fs::write(seg_dir.join("s1.soclog.seg.csv"), "1\tbob\thi & bye\n\t\n").unwrap();

        args(temp_dir.path().to_path_buf(), "s1").execute().unwrap();

        let output =
            fs::read_to_string(temp_dir.path().join("s1/unsegmented/s1.soclog.csv")).unwrap();
        assert_eq!(output, "1\tbob\thi  bye\n");
    }

    #[test]
    fn test_execute_missing_document() {
        let temp_dir = TempDir::new().unwrap();
        let err = args(temp_dir.path().to_path_buf(), "ghost")
            .execute()
            .unwrap_err();
        assert_eq!(crate::error::exit_status(&err), 2);
    }
}
