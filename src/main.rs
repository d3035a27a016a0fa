mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use pdftext::commands;
use std::io;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.input {
        Some(input) => {
            let args = commands::extract::ExtractArgs {
                input: &input,
                pages: cli.pages.as_deref(),
                output: cli.output.as_deref(),
                quiet: cli.quiet,
            };
            if let Err(e) = commands::extract::run(&args, &mut io::stdout().lock()) {
                eprintln!("Error: {:#}", e);
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let end = commands::interactive::run(io::stdin().lock(), io::stdout().lock())?;
            Ok(end.exit_code())
        }
    }
}
