//! Process execution seam.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::{Error, PROGRAM, ResolvedCommand};

/// Executes a resolved command.
pub trait CommandRunner {
	fn run(&mut self, command: &ResolvedCommand) -> Result<(), Error>;
}

/// Runs `git` (or an injected program) with the parent's stdio, blocking
/// until it exits.
#[derive(Debug, Clone)]
pub struct GitRunner {
	program: String,
}

impl Default for GitRunner {
	fn default() -> Self {
		Self::with_program(PROGRAM)
	}
}

impl GitRunner {
	/// Runs `program` instead of `git`, looked up the same way.
	pub fn with_program(program: impl Into<String>) -> Self {
		Self { program: program.into() }
	}

	pub fn program(&self) -> &str {
		&self.program
	}
}

impl CommandRunner for GitRunner {
	fn run(&mut self, command: &ResolvedCommand) -> Result<(), Error> {
		let program = self.program.as_str();
		let launch_error = |source: io::Error| Error::Launch {
			program: program.to_string(),
			source,
		};

		let path = which::which(program).map_err(|err| launch_error(io::Error::new(io::ErrorKind::NotFound, err)))?;
		debug!(path = %path.display(), argv = ?command.argv, "runner.spawn");

		// `status` waits for the child, so it is always reaped.
		let status = Command::new(&path)
			.args(&command.argv)
			.stdin(Stdio::inherit())
			.stdout(Stdio::inherit())
			.stderr(Stdio::inherit())
			.status()
			.map_err(launch_error)?;

		if status.success() {
			debug!("runner.exit_ok");
			return Ok(());
		}

		warn!(%status, "runner.exit_failed");
		Err(Error::Exit {
			program: program.to_string(),
			code: status.code(),
		})
	}
}

/// Writes the command line instead of running it (`--dry-run`).
#[derive(Debug)]
pub struct PrintRunner<W> {
	out: W,
}

impl<W: Write> PrintRunner<W> {
	pub fn new(out: W) -> Self {
		Self { out }
	}

	pub fn into_inner(self) -> W {
		self.out
	}
}

impl<W: Write> CommandRunner for PrintRunner<W> {
	fn run(&mut self, command: &ResolvedCommand) -> Result<(), Error> {
		writeln!(self.out, "{command}").map_err(|source| Error::Launch {
			program: command.program().to_string(),
			source,
		})
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn print_runner_writes_command_line() {
		let mut runner = PrintRunner::new(Vec::new());
		let command = ResolvedCommand::resolve("git checkout -b", Some("feature/x")).unwrap();
		runner.run(&command).unwrap();
		assert_eq!(String::from_utf8(runner.into_inner()).unwrap(), "git checkout -b feature/x\n");
	}

	#[test]
	fn git_runner_defaults_to_git() {
		assert_eq!(GitRunner::default().program(), "git");
	}

	#[test]
	fn git_runner_reports_child_exit_code() {
		let command = ResolvedCommand::resolve("git definitely-not-a-subcommand", None).unwrap();
		match GitRunner::default().run(&command) {
			Err(Error::Exit { program, code }) => {
				assert_eq!(program, "git");
				assert!(matches!(code, Some(code) if code != 0), "unexpected code {code:?}");
			}
			other => panic!("expected Exit, got {other:?}"),
		}
	}

	#[test]
	fn git_runner_succeeds_on_zero_exit() {
		let command = ResolvedCommand::resolve("git --version", None).unwrap();
		GitRunner::default().run(&command).unwrap();
	}

	#[test]
	fn missing_program_is_launch_failure() {
		let command = ResolvedCommand::resolve("git status", None).unwrap();
		let err = GitRunner::with_program("april-no-such-binary").run(&command).unwrap_err();
		match &err {
			Error::Launch { program, source } => {
				assert_eq!(program, "april-no-such-binary");
				assert_eq!(source.kind(), io::ErrorKind::NotFound);
			}
			other => panic!("expected Launch, got {other:?}"),
		}
		assert!(!err.is_input_failure());
	}

	#[test]
	fn launch_error_names_program() {
		let err = Error::Launch {
			program: "git".to_string(),
			source: io::Error::new(io::ErrorKind::NotFound, "cannot find binary path"),
		};
		assert_eq!(err.to_string(), "failed to start git: cannot find binary path");
		assert!(!err.is_input_failure());
	}

	#[test]
	fn exit_error_reports_status() {
		let err = Error::Exit {
			program: "git".to_string(),
			code: Some(128),
		};
		assert_eq!(err.to_string(), "git exited with exit status 128");
		let err = Error::Exit {
			program: "git".to_string(),
			code: None,
		};
		assert_eq!(err.to_string(), "git exited with termination by signal");
	}
}
