//! Intake: regenerating unsegmented transcripts
//!
//! The weaving scripts need `unsegmented/<doc>.soclog.csv` next to the
//! segmented transcript. When it is missing it can be rebuilt from
//! `segmented/<doc>*.soclog.seg.csv` by dropping blank rows and the `&`
//! segment markers.

mod locate;
mod unsegment;

pub use locate::{matches_segmented_name, resolve_source, segmented_pattern, select_unique};
pub use unsegment::{clean_row, create_unsegmented_file, transform, UnsegmentReport};

use serde::{Deserialize, Serialize};

/// Directory and file naming conventions of a corpus document
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Layout {
    /// Directory holding segmented transcripts, relative to the document
    pub segmented_dir: String,
    /// Directory receiving the unsegmented transcript
    pub unsegmented_dir: String,
    /// File name suffix of segmented transcripts
    pub segmented_suffix: String,
    /// File name suffix of the unsegmented transcript
    pub unsegmented_suffix: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            segmented_dir: "segmented".to_string(),
            unsegmented_dir: "unsegmented".to_string(),
            segmented_suffix: ".soclog.seg.csv".to_string(),
            unsegmented_suffix: ".soclog.csv".to_string(),
        }
    }
}
