//! Palette state machine.
//!
//! `Browsing` is the only interactive state; `Quit` is terminal. Abort and
//! confirm are the only exits, every other key is either navigation or handed
//! to the list widget for its own filtering behavior.

use std::io;

use tracing::{debug, info};

use crate::PaletteItem;
use crate::key::{Key, KeyCode};
use crate::list::{FilterList, ListAction};
use crate::style::PaletteStyle;

/// Input consumed by [`Palette::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteEvent {
	Key(Key),
	/// The terminal was resized to `width` x `height` cells.
	Resize { width: u16, height: u16 },
}

impl From<Key> for PaletteEvent {
	fn from(key: Key) -> Self {
		Self::Key(key)
	}
}

/// Logical meaning of a key press to the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKey {
	Abort,
	MoveUp,
	MoveDown,
	Confirm,
	/// Anything else, forwarded to the list widget verbatim.
	Passthrough(Key),
}

impl PaletteKey {
	pub fn from_key(key: Key) -> Self {
		match key.code {
			KeyCode::Char('c') if key.modifiers.ctrl => Self::Abort,
			KeyCode::Char('n') if key.modifiers.ctrl => Self::MoveDown,
			KeyCode::Char('p') if key.modifiers.ctrl => Self::MoveUp,
			KeyCode::Enter => Self::Confirm,
			_ => Self::Passthrough(key),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	Browsing,
	Quit,
}

/// What the driver must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
	/// Keep reading events.
	None,
	/// The palette reached [`Mode::Quit`]; stop the loop.
	Quit,
}

/// Result of a finished palette interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	/// The operator aborted without choosing.
	NoSelection,
	/// The operator confirmed the template with this title.
	Selected(String),
}

/// The palette: list widget state plus the browse/quit machine.
pub struct Palette<T> {
	list: FilterList<T>,
	mode: Mode,
	selected_title: Option<String>,
	style: PaletteStyle,
}

impl<T: PaletteItem> Palette<T> {
	pub fn new(items: Vec<T>, style: PaletteStyle) -> Self {
		Self {
			list: FilterList::new(items),
			mode: Mode::Browsing,
			selected_title: None,
			style,
		}
	}

	pub fn list(&self) -> &FilterList<T> {
		&self.list
	}

	pub fn mode(&self) -> Mode {
		self.mode
	}

	pub fn style(&self) -> &PaletteStyle {
		&self.style
	}

	/// Title chosen on confirm. `Some` only after a confirmed quit.
	pub fn selected_title(&self) -> Option<&str> {
		self.selected_title.as_deref()
	}

	/// The final outcome, or `None` while still browsing.
	pub fn outcome(&self) -> Option<Outcome> {
		match self.mode {
			Mode::Browsing => None,
			Mode::Quit => Some(match &self.selected_title {
				Some(title) => Outcome::Selected(title.clone()),
				None => Outcome::NoSelection,
			}),
		}
	}

	/// Ends the interaction without a selection.
	pub fn abort(&mut self) {
		self.mode = Mode::Quit;
		self.selected_title = None;
	}

	/// Applies one event. Events after quitting are ignored.
	pub fn update(&mut self, event: PaletteEvent) -> Effect {
		if self.mode == Mode::Quit {
			return Effect::Quit;
		}

		match event {
			PaletteEvent::Resize { width, height } => {
				let (frame_w, frame_h) = self.style.frame_size();
				self.list.set_size(width.saturating_sub(frame_w), height.saturating_sub(frame_h));
				debug!(width, height, per_page = self.list.per_page(), "palette.resize");
				Effect::None
			}
			PaletteEvent::Key(key) => self.handle_key(key),
		}
	}

	fn handle_key(&mut self, key: Key) -> Effect {
		match PaletteKey::from_key(key) {
			PaletteKey::Abort => {
				debug!("palette.abort");
				self.abort();
				Effect::Quit
			}
			PaletteKey::MoveDown => {
				self.list.cursor_down();
				Effect::None
			}
			PaletteKey::MoveUp => {
				self.list.cursor_up();
				Effect::None
			}
			PaletteKey::Confirm => match self.list.selected_item() {
				Some(item) => {
					let title = item.title().to_string();
					info!(%title, "palette.selected");
					self.selected_title = Some(title);
					self.mode = Mode::Quit;
					Effect::Quit
				}
				// Nothing under the cursor: the list decides (accepts a typed filter).
				None => self.forward(key),
			},
			PaletteKey::Passthrough(key) => self.forward(key),
		}
	}

	fn forward(&mut self, key: Key) -> Effect {
		match self.list.handle_key(key) {
			ListAction::None => Effect::None,
			ListAction::Quit => {
				debug!("palette.list_quit");
				self.abort();
				Effect::Quit
			}
		}
	}
}

/// Source of palette events, typically a terminal.
pub trait EventSource {
	/// Blocks for the next event. `Ok(None)` means the source is exhausted.
	fn next_event(&mut self) -> io::Result<Option<PaletteEvent>>;
}

/// Drives `palette` until it quits, calling `draw` before every event.
///
/// An exhausted source counts as an abort.
pub fn run<T, S, D>(palette: &mut Palette<T>, events: &mut S, mut draw: D) -> io::Result<Outcome>
where
	T: PaletteItem,
	S: EventSource + ?Sized,
	D: FnMut(&Palette<T>) -> io::Result<()>,
{
	loop {
		draw(palette)?;
		let Some(event) = events.next_event()? else {
			palette.abort();
			break;
		};
		if palette.update(event) == Effect::Quit {
			break;
		}
	}
	Ok(palette.outcome().unwrap_or(Outcome::NoSelection))
}

#[cfg(test)]
mod tests;
