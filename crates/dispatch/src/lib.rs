//! Turns a chosen template into a running git process.
//!
//! After the palette quits with a selection, [`dispatch`] collects the
//! template's argument (if it needs one), builds the argv with
//! [`ResolvedCommand::resolve`] and hands it to a [`CommandRunner`].

mod argv;
mod error;
mod prompt;
mod runner;

use std::io::{BufRead, Write};

pub use april_catalog::ArgumentPrompt;
pub use argv::{PROGRAM, ResolvedCommand};
pub use error::Error;
pub use prompt::read_argument;
pub use runner::{CommandRunner, GitRunner, PrintRunner};
use tracing::info;

/// Runs the post-palette stage for `title`.
///
/// Prompts on `output` and reads from `input` only when the title requires an
/// argument. A read failure returns [`Error::InputRead`] before anything is
/// resolved or run.
pub fn dispatch<R, W, C>(title: &str, input: &mut R, output: &mut W, runner: &mut C) -> Result<(), Error>
where
	R: BufRead + ?Sized,
	W: Write + ?Sized,
	C: CommandRunner + ?Sized,
{
	let argument = match ArgumentPrompt::for_title(title) {
		Some(prompt) => Some(read_argument(prompt, input, output)?),
		None => None,
	};
	let command = ResolvedCommand::resolve(title, argument.as_deref())?;
	info!(%command, "dispatch");
	runner.run(&command)
}
