mod cli;
mod logging;
mod terminal;

use std::io;
use std::process::ExitCode;

use april_dispatch::{CommandRunner, GitRunner, PrintRunner, dispatch};
use april_palette::{Outcome, PaletteStyle};
use clap::Parser;
use cli::Cli;
use tracing::{info, warn};

fn main() -> ExitCode {
	let cli = Cli::parse();
	logging::init(cli.log_dir.as_deref(), cli.verbose);

	let outcome = match terminal::run_palette(PaletteStyle::default()) {
		Ok(outcome) => outcome,
		Err(err) => {
			warn!(error = %format!("{err:#}"), "palette failed");
			eprintln!("error: {err:#}");
			return ExitCode::FAILURE;
		}
	};

	match outcome {
		Outcome::NoSelection => {
			info!("quit without selection");
			ExitCode::SUCCESS
		}
		Outcome::Selected(title) => run_selection(&title, cli.dry_run),
	}
}

/// Echoes the choice, collects its argument and dispatches it.
fn run_selection(title: &str, dry_run: bool) -> ExitCode {
	println!("april: {title}");
	let mut stdout = io::stdout();

	let mut input = io::stdin().lock();
	let mut runner: Box<dyn CommandRunner> = if dry_run { Box::new(PrintRunner::new(io::stdout())) } else { Box::new(GitRunner::default()) };

	match dispatch(title, &mut input, &mut stdout, runner.as_mut()) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) if err.is_input_failure() => {
			warn!(error = %err, "argument read failed");
			eprintln!("error: {err}");
			ExitCode::FAILURE
		}
		Err(err) => {
			warn!(error = %err, "dispatch failed");
			eprintln!("Error executing command: {err}");
			ExitCode::SUCCESS
		}
	}
}
