//! The fixed catalog of git command templates offered by the palette.
//!
//! Each template's title is the literal command prefix that the dispatcher
//! later decomposes into argv, so the catalog is the single source of truth
//! for which commands exist.

/// Capabilities a list entry exposes to the palette.
///
/// The palette never inspects concrete entry types; it only needs a title, a
/// description and the key used for filtering.
pub trait PaletteItem {
	/// Primary line shown for the entry.
	fn title(&self) -> &str;
	/// Secondary, display-only line.
	fn description(&self) -> &str;
	/// Text the filter query is matched against.
	fn filter_value(&self) -> &str {
		self.title()
	}
}

impl<T: PaletteItem + ?Sized> PaletteItem for &T {
	fn title(&self) -> &str {
		(**self).title()
	}

	fn description(&self) -> &str {
		(**self).description()
	}

	fn filter_value(&self) -> &str {
		(**self).filter_value()
	}
}

/// A catalog entry pairing a literal command prefix with a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandTemplate {
	/// Command prefix, e.g. `git commit -m`. First token is always `git`.
	pub title: &'static str,
	/// Human-readable summary.
	pub description: &'static str,
}

impl CommandTemplate {
	/// Creates a template.
	pub const fn new(title: &'static str, description: &'static str) -> Self {
		Self { title, description }
	}

	/// Returns the argument prompt this template requires, if any.
	pub fn argument_prompt(&self) -> Option<ArgumentPrompt> {
		ArgumentPrompt::for_title(self.title)
	}
}

impl PaletteItem for CommandTemplate {
	fn title(&self) -> &str {
		self.title
	}

	fn description(&self) -> &str {
		self.description
	}
}

/// Every command the palette offers, in display order.
pub static CATALOG: &[CommandTemplate] = &[
	CommandTemplate::new("git status", "show working tree status"),
	CommandTemplate::new("git add .", "add all changes to staging"),
	CommandTemplate::new("git commit -m", "commit staged changes"),
	CommandTemplate::new("git push", "push commits to remote"),
	CommandTemplate::new("git pull", "pull changes from remote"),
	CommandTemplate::new("git branch", "list branches"),
	CommandTemplate::new("git checkout -b", "create and switch to new branch"),
	CommandTemplate::new("git checkout main", "switch to main branch"),
	CommandTemplate::new("git log", "show commit logs"),
	CommandTemplate::new("git fetch", "download objects and refs from remote"),
];

/// Free-text argument a template needs before it can be dispatched.
///
/// Detected structurally from the title: `commit -m` asks for a commit
/// message, `checkout -b` asks for a branch name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentPrompt {
	/// Free-text commit message, passed to git as a single argument.
	CommitMessage,
	/// New branch name, appended to the title before splitting.
	BranchName,
}

impl ArgumentPrompt {
	/// Substring of a title that triggers the commit message prompt.
	pub const COMMIT_MARKER: &'static str = "commit -m";
	/// Substring of a title that triggers the branch name prompt.
	pub const BRANCH_MARKER: &'static str = "checkout -b";

	/// Detects the prompt a title requires. Commit takes precedence.
	pub fn for_title(title: &str) -> Option<Self> {
		if title.contains(Self::COMMIT_MARKER) {
			Some(Self::CommitMessage)
		} else if title.contains(Self::BRANCH_MARKER) {
			Some(Self::BranchName)
		} else {
			None
		}
	}

	/// Text written before the argument is read, without a trailing newline.
	pub fn prompt(self) -> &'static str {
		match self {
			Self::CommitMessage => "Enter commit message: ",
			Self::BranchName => "Enter branch name: ",
		}
	}

	/// What is being read, for error reports.
	pub fn subject(self) -> &'static str {
		match self {
			Self::CommitMessage => "commit message",
			Self::BranchName => "branch name",
		}
	}
}
