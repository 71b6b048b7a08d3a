//! File-only tracing setup.
//!
//! The palette owns the terminal, so logs never go to stdout or stderr. When
//! no log directory is configured no subscriber is installed at all.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Default filter directive when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
	if verbose { "april=debug,info" } else { "april=info,warn" }
}

/// Log file path for this process inside `dir`.
pub fn log_path(dir: &Path) -> PathBuf {
	dir.join(format!("april.{}.log", std::process::id()))
}

/// Installs a file subscriber under `log_dir`, returning the file path.
///
/// Failures to create the directory or file leave logging disabled.
pub fn init(log_dir: Option<&Path>, verbose: bool) -> Option<PathBuf> {
	let dir = log_dir?;
	std::fs::create_dir_all(dir).ok()?;
	let path = log_path(dir);
	let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
	let file_layer = tracing_subscriber::fmt::layer().with_writer(file).with_ansi(false).with_target(true);

	tracing_subscriber::registry().with(filter).with(file_layer).try_init().ok()?;
	tracing::info!(path = %path.display(), "tracing initialized");
	Some(path)
}
