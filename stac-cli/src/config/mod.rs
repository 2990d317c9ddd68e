//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stac_core::{Inserts, Layout};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Corpus file layout
    #[serde(default)]
    pub layout: Layout,

    /// Annotation markers for text dumps
    #[serde(default)]
    pub annotate: AnnotateConfig,
}

/// Annotation-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct AnnotateConfig {
    /// Keep the built-in markers for types not listed in `inserts`
    #[serde(default = "default_true")]
    pub keep_defaults: bool,

    /// Markers keyed by rough unit type (`EDU`, `Turn`, `Dialogue`, ...)
    #[serde(default = "Inserts::empty")]
    pub inserts: Inserts,
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            keep_defaults: true,
            inserts: Inserts::empty(),
        }
    }
}

impl AnnotateConfig {
    /// Effective marker table
    pub fn inserts(&self) -> Inserts {
        let mut inserts = if self.keep_defaults {
            Inserts::default()
        } else {
            Inserts::empty()
        };
        inserts.extend(self.inserts.clone());
        inserts
    }
}

fn default_true() -> bool {
    true
}

impl CliConfig {
    /// Load configuration from a TOML file, or defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.is_file() {
            return Err(CliError::ConfigNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration: {}", path.display()))?;
        let config: CliConfig =
            toml::from_str(&content).map_err(|e| CliError::ConfigError(e.to_string()))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stac_core::Insert;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_file_gives_defaults() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config.layout, Layout::default());
        assert_eq!(config.annotate.inserts(), Inserts::default());
    }

    #[test]
    fn test_partial_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"
[layout]
segmented_suffix = ".seg.tsv"

[annotate.inserts]
EDU = {{ open = "[", close = "]" }}
"#
        )
        .unwrap();

        let config = CliConfig::load(Some(temp_file.path())).unwrap();
        assert_eq!(config.layout.segmented_suffix, ".seg.tsv");
        assert_eq!(config.layout.segmented_dir, "segmented");

        let inserts = config.annotate.inserts();
        assert_eq!(inserts.get("EDU"), Some(&Insert::new("[", "]")));
        assert_eq!(inserts.get("Turn"), Some(&Insert::new("\n", "")));
    }

    #[test]
    fn test_without_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"
[annotate]
keep_defaults = false

[annotate.inserts]
Turn = {{ open = "| " }}
"#
        )
        .unwrap();

        let config = CliConfig::load(Some(temp_file.path())).unwrap();
        let inserts = config.annotate.inserts();
        assert_eq!(inserts.get("Turn"), Some(&Insert::new("| ", "")));
        assert!(inserts.get("EDU").is_none());
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/stac.toml"))).unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[layout\nsegmented_dir = 3").unwrap();

        let err = CliConfig::load(Some(temp_file.path())).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
