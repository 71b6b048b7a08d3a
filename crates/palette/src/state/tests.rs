use std::collections::VecDeque;
use std::io;

use april_catalog::{CATALOG, CommandTemplate};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;
use crate::list::FilterState;

fn palette() -> Palette<CommandTemplate> {
	Palette::new(CATALOG.to_vec(), PaletteStyle::default())
}

fn key(code: KeyCode) -> PaletteEvent {
	PaletteEvent::Key(Key::new(code))
}

fn ctrl(c: char) -> PaletteEvent {
	PaletteEvent::Key(Key::ctrl(c))
}

fn char_key(c: char) -> PaletteEvent {
	PaletteEvent::Key(Key::char(c))
}

struct Scripted(VecDeque<PaletteEvent>);

impl Scripted {
	fn new(events: impl IntoIterator<Item = PaletteEvent>) -> Self {
		Self(events.into_iter().collect())
	}
}

impl EventSource for Scripted {
	fn next_event(&mut self) -> io::Result<Option<PaletteEvent>> {
		Ok(self.0.pop_front())
	}
}

struct Failing;

impl EventSource for Failing {
	fn next_event(&mut self) -> io::Result<Option<PaletteEvent>> {
		Err(io::Error::other("tty went away"))
	}
}

fn run_script(events: impl IntoIterator<Item = PaletteEvent>) -> Outcome {
	let mut palette = palette();
	run(&mut palette, &mut Scripted::new(events), |_| Ok(())).unwrap()
}

#[rstest]
#[case(Key::ctrl('c'), PaletteKey::Abort)]
#[case(Key::ctrl('n'), PaletteKey::MoveDown)]
#[case(Key::ctrl('p'), PaletteKey::MoveUp)]
#[case(Key::new(KeyCode::Enter), PaletteKey::Confirm)]
#[case(Key::char('n'), PaletteKey::Passthrough(Key::char('n')))]
#[case(Key::new(KeyCode::Down), PaletteKey::Passthrough(Key::new(KeyCode::Down)))]
fn keys_map_to_logical_names(#[case] key: Key, #[case] expected: PaletteKey) {
	assert_eq!(PaletteKey::from_key(key), expected);
}

#[test]
fn abort_right_away_yields_no_selection() {
	let mut palette = palette();
	assert_eq!(palette.update(ctrl('c')), Effect::Quit);
	assert_eq!(palette.mode(), Mode::Quit);
	assert_eq!(palette.selected_title(), None);
	assert_eq!(palette.outcome(), Some(Outcome::NoSelection));
}

#[test]
fn confirm_selects_item_under_cursor() {
	let outcome = run_script([ctrl('n'), ctrl('n'), key(KeyCode::Enter)]);
	assert_eq!(outcome, Outcome::Selected("git commit -m".to_string()));
}

#[test]
fn browsing_has_no_outcome() {
	let mut palette = palette();
	assert_eq!(palette.update(ctrl('n')), Effect::None);
	assert_eq!(palette.mode(), Mode::Browsing);
	assert_eq!(palette.outcome(), None);
}

#[test]
fn move_down_past_end_is_idempotent() {
	let mut palette = palette();
	for _ in 0..CATALOG.len() * 2 {
		palette.update(ctrl('n'));
	}
	assert_eq!(palette.list().cursor(), CATALOG.len() - 1);
	palette.update(ctrl('n'));
	assert_eq!(palette.list().cursor(), CATALOG.len() - 1);
}

#[test]
fn move_up_at_top_stays_at_zero() {
	let mut palette = palette();
	palette.update(ctrl('p'));
	assert_eq!(palette.list().cursor(), 0);
}

#[test]
fn resize_subtracts_frame() {
	let mut palette = palette();
	assert_eq!(palette.update(PaletteEvent::Resize { width: 80, height: 24 }), Effect::None);
	assert_eq!(palette.list().size(), (76, 22));
	palette.update(PaletteEvent::Resize { width: 1, height: 1 });
	assert_eq!(palette.list().size(), (0, 0));
}

#[test]
fn repeated_resize_leaves_state_untouched() {
	let mut palette = palette();
	palette.update(ctrl('n'));
	palette.update(ctrl('n'));
	palette.update(PaletteEvent::Resize { width: 60, height: 30 });
	let before = (palette.list().cursor(), palette.list().size(), palette.mode());
	palette.update(PaletteEvent::Resize { width: 60, height: 30 });
	assert_eq!((palette.list().cursor(), palette.list().size(), palette.mode()), before);
	assert_eq!(palette.selected_title(), None);
}

#[test]
fn passthrough_filters_then_confirm_picks_match() {
	let mut events = vec![char_key('/')];
	events.extend("branch".chars().map(char_key));
	events.push(key(KeyCode::Enter));
	assert_eq!(run_script(events), Outcome::Selected("git branch".to_string()));
}

#[test]
fn confirm_with_no_matches_accepts_filter_instead() {
	let mut palette = palette();
	palette.update(char_key('/'));
	for c in "zzz".chars() {
		palette.update(char_key(c));
	}
	assert_eq!(palette.list().visible_len(), 0);
	assert_eq!(palette.update(key(KeyCode::Enter)), Effect::None);
	assert_eq!(palette.mode(), Mode::Browsing);
	assert_eq!(palette.list().filter_state(), FilterState::FilterApplied);
}

#[test]
fn list_quit_binding_aborts() {
	assert_eq!(run_script([char_key('q')]), Outcome::NoSelection);
	assert_eq!(run_script([key(KeyCode::Esc)]), Outcome::NoSelection);
}

#[test]
fn ctrl_c_aborts_while_filtering() {
	assert_eq!(run_script([char_key('/'), char_key('l'), ctrl('c')]), Outcome::NoSelection);
}

#[test]
fn events_after_quit_are_ignored() {
	let mut palette = palette();
	palette.update(key(KeyCode::Enter));
	assert_eq!(palette.update(ctrl('n')), Effect::Quit);
	assert_eq!(palette.update(ctrl('c')), Effect::Quit);
	assert_eq!(palette.outcome(), Some(Outcome::Selected("git status".to_string())));
}

#[test]
fn exhausted_source_counts_as_abort() {
	assert_eq!(run_script([ctrl('n')]), Outcome::NoSelection);
}

#[test]
fn run_draws_before_each_event() {
	let mut palette = palette();
	let mut draws = 0;
	let outcome = run(&mut palette, &mut Scripted::new([ctrl('n'), key(KeyCode::Enter)]), |_| {
		draws += 1;
		Ok(())
	})
	.unwrap();
	assert_eq!(draws, 2);
	assert_eq!(outcome, Outcome::Selected("git add .".to_string()));
}

#[test]
fn run_propagates_source_errors() {
	let mut palette = palette();
	let err = run(&mut palette, &mut Failing, |_| Ok(())).unwrap_err();
	assert_eq!(err.to_string(), "tty went away");
}

#[test]
fn empty_palette_confirm_is_noop() {
	let mut palette: Palette<CommandTemplate> = Palette::new(Vec::new(), PaletteStyle::default());
	assert_eq!(palette.update(key(KeyCode::Enter)), Effect::None);
	assert_eq!(palette.update(ctrl('c')), Effect::Quit);
	assert_eq!(palette.outcome(), Some(Outcome::NoSelection));
}

fn nav_event() -> impl Strategy<Value = PaletteEvent> {
	prop_oneof![
		Just(ctrl('n')),
		Just(ctrl('p')),
		Just(key(KeyCode::Up)),
		Just(key(KeyCode::Down)),
		(1u16..200, 1u16..80).prop_map(|(width, height)| PaletteEvent::Resize { width, height }),
	]
}

proptest! {
	#[test]
	fn navigation_keeps_cursor_in_bounds(events in prop::collection::vec(nav_event(), 0..80)) {
		let mut palette = palette();
		for event in events {
			prop_assert_eq!(palette.update(event), Effect::None);
			prop_assert!(palette.list().cursor() < palette.list().visible_len());
		}
		prop_assert_eq!(palette.mode(), Mode::Browsing);
	}

	#[test]
	fn selection_iff_confirmed(downs in 0usize..20, abort in any::<bool>()) {
		let mut palette = palette();
		for _ in 0..downs {
			palette.update(ctrl('n'));
		}
		let last = if abort { ctrl('c') } else { key(KeyCode::Enter) };
		prop_assert_eq!(palette.update(last), Effect::Quit);
		prop_assert_eq!(palette.selected_title().is_some(), !abort);
		if !abort {
			let expected = CATALOG[downs.min(CATALOG.len() - 1)].title;
			prop_assert_eq!(palette.selected_title(), Some(expected));
		}
	}
}
