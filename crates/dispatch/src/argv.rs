//! Template-to-argv decomposition.

use std::fmt;

use crate::Error;

/// Executable every template runs, resolved through `PATH`.
pub const PROGRAM: &str = "git";

/// Arguments for one git invocation, excluding the executable itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
	pub argv: Vec<String>,
}

impl ResolvedCommand {
	/// Builds the argv for `title` plus the operator's optional `argument`.
	///
	/// For `git commit -m` the argument becomes exactly one argv element, so a
	/// commit message is never split. Every other template has the argument
	/// appended to the title *before* whitespace splitting, which means a
	/// branch name containing spaces turns into several argv elements. The
	/// leading `git` token is dropped in both cases.
	pub fn resolve(title: &str, argument: Option<&str>) -> Result<Self, Error> {
		let tokens: Vec<&str> = title.split_whitespace().collect();
		if tokens.is_empty() {
			return Err(Error::EmptyCommand);
		}

		if is_commit_with_message(&tokens) {
			let message = match argument {
				Some(message) => message.to_string(),
				None => tokens[3..].join(" "),
			};
			return Ok(Self {
				argv: vec!["commit".to_string(), "-m".to_string(), message],
			});
		}

		let line = match argument {
			Some(argument) => format!("{title} {argument}"),
			None => title.to_string(),
		};
		let argv = line.split_whitespace().skip(1).map(str::to_string).collect();
		Ok(Self { argv })
	}

	pub fn program(&self) -> &'static str {
		PROGRAM
	}
}

fn is_commit_with_message(tokens: &[&str]) -> bool {
	matches!(tokens, [_, "commit", "-m", ..])
}

/// Shell-like rendering; elements with whitespace or empty ones are quoted.
impl fmt::Display for ResolvedCommand {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(PROGRAM)?;
		for arg in &self.argv {
			if arg.is_empty() || arg.contains(char::is_whitespace) {
				write!(f, " {arg:?}")?;
			} else {
				write!(f, " {arg}")?;
			}
		}
		Ok(())
	}
}
