//! Dump the text in corpus documents with their annotations

use clap::Parser;
use stac_cli::commands::TextArgs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = TextArgs::parse();

    match args.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => stac_cli::error::report(&e),
    }
}
