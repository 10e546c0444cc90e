//! Command-line entry point for `spec-graph`.

use std::process::ExitCode;

use clap::Parser;

mod cli;

use cli::Cli;

/// Exit status for command-line usage errors (`EX_USAGE` from `sysexits.h`).
const EX_USAGE: u8 = 64;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            // Help and usage errors alike exit with EX_USAGE. A failure to
            // print them leaves nothing else to report, so it is ignored.
            let _ = error.print();
            return ExitCode::from(EX_USAGE);
        }
    };

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:?}");
            ExitCode::FAILURE
        }
    }
}
