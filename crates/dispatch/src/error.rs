use std::io;

/// Failures between a palette selection and a finished git process.
///
/// Every kind ends the current invocation; none are retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The title split into zero tokens.
	#[error("empty command")]
	EmptyCommand,
	/// Reading the operator's argument failed (including end of input).
	#[error("failed to read {subject}: {source}")]
	InputRead {
		subject: &'static str,
		#[source]
		source: io::Error,
	},
	/// The executable could not be found or started.
	#[error("failed to start {program}: {source}")]
	Launch {
		program: String,
		#[source]
		source: io::Error,
	},
	/// The child ran and exited unsuccessfully.
	#[error("{program} exited with {}", describe_exit(.code))]
	Exit { program: String, code: Option<i32> },
}

impl Error {
	/// Whether this failure happened before dispatch (no process was started).
	pub fn is_input_failure(&self) -> bool {
		matches!(self, Self::InputRead { .. })
	}
}

fn describe_exit(code: &Option<i32>) -> String {
	match code {
		Some(code) => format!("exit status {code}"),
		None => "termination by signal".to_string(),
	}
}
