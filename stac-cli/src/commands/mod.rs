//! CLI command implementations

pub mod text;
pub mod unsegment;

pub use text::TextArgs;
pub use unsegment::UnsegmentArgs;

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the verbosity flags. Nothing is logged
/// in quiet mode.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init()
        .ok();
}
