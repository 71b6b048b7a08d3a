//! CLI schema for the april binary.

use std::path::PathBuf;

use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;

/// Environment variable naming a directory for log files.
pub const LOG_DIR_ENV: &str = "APRIL_LOG_DIR";

/// Help colors.
pub fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Yellow.on_default().bold())
		.usage(AnsiColor::Yellow.on_default().bold())
		.literal(AnsiColor::Green.on_default())
		.placeholder(AnsiColor::Cyan.on_default())
}

#[derive(Parser, Debug)]
#[command(name = "april")]
#[command(about = "Pick a git command from a palette and run it")]
#[command(version)]
#[command(styles = cli_styles())]
/// Command-line arguments.
pub struct Cli {
	/// Print the resolved git command instead of running it
	#[arg(long)]
	pub dry_run: bool,

	/// Write logs to `<DIR>/april.<pid>.log`
	#[arg(long, value_name = "DIR", env = LOG_DIR_ENV)]
	pub log_dir: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}
