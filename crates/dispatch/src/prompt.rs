//! Blocking single-line argument collection.

use std::io::{self, BufRead, Write};

use april_catalog::ArgumentPrompt;
use tracing::debug;

use crate::Error;

/// Writes the prompt for `prompt` and reads one newline-terminated line.
///
/// The line is trimmed of surrounding whitespace. End of input, before or in
/// the middle of the line, is a failure rather than an empty answer.
pub fn read_argument<R, W>(prompt: ArgumentPrompt, input: &mut R, output: &mut W) -> Result<String, Error>
where
	R: BufRead + ?Sized,
	W: Write + ?Sized,
{
	let fail = |source: io::Error| Error::InputRead {
		subject: prompt.subject(),
		source,
	};

	output.write_all(prompt.prompt().as_bytes()).map_err(fail)?;
	output.flush().map_err(fail)?;

	let mut line = String::new();
	let read = input.read_line(&mut line).map_err(fail)?;
	if read == 0 || !line.ends_with('\n') {
		return Err(fail(io::Error::new(io::ErrorKind::UnexpectedEof, "unexpected end of input")));
	}

	let argument = line.trim().to_string();
	debug!(subject = prompt.subject(), len = argument.len(), "prompt.read");
	Ok(argument)
}
