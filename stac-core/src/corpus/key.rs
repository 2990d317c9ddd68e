//! Document identifiers

use serde::Serialize;
use std::fmt;

/// Identifies one annotated document within a corpus
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DocumentKey {
    /// Game or document name, e.g. `pilot01`
    pub doc: String,
    /// Subdocument, e.g. `01`
    pub subdoc: String,
    /// Annotation stage, e.g. `unannotated`, `units`, `discourse`
    pub stage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotator: Option<String>,
}

impl DocumentKey {
    pub fn new(
        doc: impl Into<String>,
        subdoc: impl Into<String>,
        stage: impl Into<String>,
        annotator: Option<String>,
    ) -> Self {
        Self {
            doc: doc.into(),
            subdoc: subdoc.into(),
            stage: stage.into(),
            annotator,
        }
    }

    /// Relative corpus path of the document, without extension
    ///
    /// Documents are listed in the order of this path.
    pub fn sort_path(&self) -> String {
        match &self.annotator {
            Some(annotator) => format!("{}/{}/{}/{}", self.doc, self.stage, annotator, self.subdoc),
            None => format!("{}/{}/{}", self.doc, self.stage, self.subdoc),
        }
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.doc, self.subdoc, self.stage)?;
        if let Some(annotator) = &self.annotator {
            write!(f, " {annotator}")?;
        }
        Ok(())
    }
}
