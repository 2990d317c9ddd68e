//! Re-create an unsegmented csv file given an existing segmented file

use clap::Parser;
use stac_cli::commands::UnsegmentArgs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = UnsegmentArgs::parse();

    match args.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => stac_cli::error::report(&e),
    }
}
