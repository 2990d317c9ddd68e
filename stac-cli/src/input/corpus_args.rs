//! Usual corpus input arguments

use clap::Args;
use stac_core::{CorpusError, CorpusFilter};
use std::path::PathBuf;

/// Corpus location and document filters
#[derive(Debug, Args)]
pub struct CorpusArgs {
    /// Corpus directory
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Document name filter (regex)
    #[arg(long, value_name = "REGEX")]
    pub doc: Option<String>,

    /// Subdocument filter (regex)
    #[arg(long, value_name = "REGEX")]
    pub subdoc: Option<String>,

    /// Annotation stage filter (regex), e.g. `units|discourse`
    #[arg(long, value_name = "REGEX")]
    pub stage: Option<String>,

    /// Annotator filter (regex)
    #[arg(long, value_name = "REGEX")]
    pub annotator: Option<String>,
}

impl CorpusArgs {
    /// Build the document filter from the given patterns
    pub fn filter(&self) -> Result<CorpusFilter, CorpusError> {
        let mut filter = CorpusFilter::new();
        if let Some(doc) = &self.doc {
            filter = filter.doc(doc)?;
        }
        if let Some(subdoc) = &self.subdoc {
            filter = filter.subdoc(subdoc)?;
        }
        if let Some(stage) = &self.stage {
            filter = filter.stage(stage)?;
        }
        if let Some(annotator) = &self.annotator {
            filter = filter.annotator(annotator)?;
        }
        Ok(filter)
    }
}
