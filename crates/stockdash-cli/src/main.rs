mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let result = commands::run(cli).await?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    output::render(&result, cli.format, cli.pretty, &mut writer)?;
    writer.flush()?;
    Ok(())
}
