//! Error handling for the CLI application

use stac_core::IntakeError;
use std::fmt;
use std::process::ExitCode;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file not found or inaccessible
    ConfigNotFound(String),
    /// Configuration file could not be parsed
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigNotFound(path) => write!(f, "Configuration file not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

/// Exit status for a failed command
///
/// Bad arguments or corpus layout exit with 2, like clap usage errors;
/// everything else exits with 1.
pub fn exit_status(error: &anyhow::Error) -> u8 {
    let invalid_input = error.chain().any(|cause| {
        cause
            .downcast_ref::<IntakeError>()
            .is_some_and(IntakeError::is_invalid_input)
            || cause.downcast_ref::<CliError>().is_some()
    });

    if invalid_input {
        2
    } else {
        1
    }
}

/// Print `error` with its causes and return the matching exit status
pub fn report(error: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {error:#}");
    ExitCode::from(exit_status(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_config_not_found_display() {
        let error = CliError::ConfigNotFound("stac.toml".to_string());
        assert_eq!(error.to_string(), "Configuration file not found: stac.toml");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::ConfigError("bad".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ConfigError"));
    }

    #[test]
    fn test_invalid_input_exit_code() {
        let error = anyhow::Error::new(IntakeError::CorpusNotFound(PathBuf::from("/c/s1")));
        assert_eq!(exit_status(&error), 2);

        let wrapped = anyhow::Error::new(CliError::ConfigNotFound("x".to_string()))
            .context("Failed to load configuration");
        assert_eq!(exit_status(&wrapped), 2);
    }

    #[test]
    fn test_other_failures_exit_code() {
        let error = anyhow::Error::new(IntakeError::Io {
            path: PathBuf::from("out.csv"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        });
        assert_eq!(exit_status(&error), 1);
        assert_eq!(exit_status(&anyhow::anyhow!("boom")), 1);
    }
}
