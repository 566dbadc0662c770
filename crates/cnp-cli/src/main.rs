//! cnpv - command-line CNP validator.
//!
//! Exit codes: 0 when every candidate is valid, 1 when any is invalid,
//! 2 on usage or input errors.

use std::process::ExitCode;

use clap::Parser;

mod commands;
mod logging;

use commands::{Cli, Outcome};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("warning: {e:#}");
    }

    let mut stdout = std::io::stdout().lock();
    match cli.run(&mut stdout) {
        Ok(Outcome::AllValid) => ExitCode::SUCCESS,
        Ok(Outcome::SomeInvalid) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
