//! fraudscan: flag messages that carry common fraud-pattern signals.

use std::process::ExitCode;

use clap::Parser;

mod cli;

use cli::{Cli, Outcome};

fn main() -> ExitCode {
    let args = Cli::parse();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match cli::run(args, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(Outcome::Clean) => ExitCode::SUCCESS,
        Ok(Outcome::Suspicious) => ExitCode::from(2),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
