mod args;

use std::io::{Result as IoResult, Stdout, Write, stdout};
use std::process::ExitCode;

use args::Cli;
use harness::bench::runner;
use harness::bench::types::{Config, Event, Phase, Results};
use lib::DEFAULT_REPORT_PRECISION;
use lib::utils::json;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use env_logger::Env;
use log::{error, warn};

/// Builds hash-linked chains for every configured scenario, prints the average construction
/// time per scenario and optionally saves the results as JSON.
fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli: Cli = Cli::parse();
    return match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    };
}

fn run(cli: &Cli) -> Result<()> {
    let config: Config = cli.config()?;
    let mut out: Stdout = stdout();

    execute!(out, SetForegroundColor(Color::Cyan), Print("--- Running scenarios ---\n"), ResetColor)?;

    let results: Results = runner::run_with(&config, |phase: Phase, event: Event<'_>| {
        if let Err(e) = print_progress(&mut stdout(), phase, event) {
            warn!("Failed to print progress: {}", e);
        }
    })?;

    execute!(out, SetForegroundColor(Color::Cyan), Print("\n--- Final results ---\n"), ResetColor, Print(&results))?;

    if let Some(filename) = &cli.json {
        json::write(&results, filename)?;
    }
    return Ok(());
}

/// Prints the average of each scenario once all of its runs are done.
fn print_progress<W: Write>(out: &mut W, phase: Phase, event: Event<'_>) -> IoResult<()> {
    if let (Phase::Averaged, Event::Averaged(result)) = (phase, event) {
        execute!(
            out,
            Print(format!("\nScenario: {}\n", result.label)),
            SetForegroundColor(Color::Green),
            Print(format!("  | Average time: {:.*} ms\n", DEFAULT_REPORT_PRECISION, result.average_ms)),
            ResetColor
        )?;
    }
    return Ok(());
}
