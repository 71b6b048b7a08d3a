//! Raw-mode terminal session driving the palette.

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use april_catalog::{CATALOG, CommandTemplate};
use april_palette::{EventSource, Key, KeyCode, Modifiers, Outcome, Palette, PaletteEvent, PaletteStyle};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use crossterm::{cursor, execute};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, warn};

/// Raw mode plus alternate screen, restored on drop.
struct TerminalGuard;

impl TerminalGuard {
	fn enter() -> Result<Self> {
		enable_raw_mode().context("enable raw mode")?;
		let guard = Self;
		execute!(io::stdout(), EnterAlternateScreen, cursor::Hide).context("enter alternate screen")?;
		Ok(guard)
	}
}

impl Drop for TerminalGuard {
	fn drop(&mut self) {
		if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show) {
			warn!(error = %err, "terminal.leave_alternate_screen");
		}
		if let Err(err) = disable_raw_mode() {
			warn!(error = %err, "terminal.disable_raw_mode");
		}
	}
}

/// Blocking crossterm event reader.
struct TerminalEvents;

impl EventSource for TerminalEvents {
	fn next_event(&mut self) -> io::Result<Option<PaletteEvent>> {
		loop {
			if let Some(event) = palette_event(event::read()?) {
				return Ok(Some(event));
			}
		}
	}
}

/// Runs the catalog palette on the real terminal until the operator quits.
///
/// The terminal is restored before this returns, on success or failure.
pub fn run_palette(style: PaletteStyle) -> Result<Outcome> {
	let guard = TerminalGuard::enter()?;
	let mut terminal: Terminal<CrosstermBackend<Stdout>> = Terminal::new(CrosstermBackend::new(io::stdout())).context("create terminal")?;
	terminal.clear().context("clear terminal")?;

	let mut palette: Palette<CommandTemplate> = Palette::new(CATALOG.to_vec(), style);
	let (width, height) = crossterm::terminal::size().context("query terminal size")?;
	palette.update(PaletteEvent::Resize { width, height });

	let outcome = april_palette::run(&mut palette, &mut TerminalEvents, |palette| {
		terminal.draw(|frame| frame.render_widget(palette, frame.area()))?;
		Ok(())
	})
	.context("palette event loop")?;

	drop(guard);
	debug!(?outcome, "terminal.palette_done");
	Ok(outcome)
}

/// Translates a crossterm event, dropping the ones the palette ignores.
pub fn palette_event(event: Event) -> Option<PaletteEvent> {
	match event {
		Event::Key(key) => palette_key(key).map(PaletteEvent::Key),
		Event::Resize(width, height) => Some(PaletteEvent::Resize { width, height }),
		_ => None,
	}
}

fn palette_key(event: KeyEvent) -> Option<Key> {
	if event.kind == KeyEventKind::Release {
		return None;
	}

	use crossterm::event::KeyCode as Ct;
	let code = match event.code {
		Ct::Char(c) => KeyCode::Char(c),
		Ct::Enter => KeyCode::Enter,
		Ct::Esc => KeyCode::Esc,
		Ct::Backspace => KeyCode::Backspace,
		Ct::Tab => KeyCode::Tab,
		Ct::Up => KeyCode::Up,
		Ct::Down => KeyCode::Down,
		Ct::Left => KeyCode::Left,
		Ct::Right => KeyCode::Right,
		Ct::Home => KeyCode::Home,
		Ct::End => KeyCode::End,
		Ct::PageUp => KeyCode::PageUp,
		Ct::PageDown => KeyCode::PageDown,
		_ => return None,
	};
	let modifiers = Modifiers {
		ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
		alt: event.modifiers.contains(KeyModifiers::ALT),
		shift: event.modifiers.contains(KeyModifiers::SHIFT),
	};
	Some(Key { code, modifiers })
}
