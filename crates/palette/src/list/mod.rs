//! Scrollable, filterable list widget state.
//!
//! Owns the cursor, the viewport size and the filter query. The cursor always
//! indexes the *visible* (filtered) entries and stays within
//! `0..visible_len()` whenever that range is non-empty.

mod filter;

use filter::FuzzyFilter;
use tracing::trace;

use crate::PaletteItem;
use crate::key::{Key, KeyCode};

/// Rows taken by the heading and status line above the entries.
pub const HEADER_ROWS: u16 = 2;
/// Rows per entry: title, description and a spacer.
pub const ITEM_ROWS: u16 = 3;

/// Where the list is in its filtering lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
	/// No query; every entry is visible.
	#[default]
	Unfiltered,
	/// The operator is typing a query.
	Filtering,
	/// A query is in effect but no longer being edited.
	FilterApplied,
}

/// What the list asks of its owner after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
	None,
	/// The list's own quit binding fired.
	Quit,
}

/// List widget over a fixed set of entries.
pub struct FilterList<T> {
	items: Vec<T>,
	visible: Vec<usize>,
	filter_state: FilterState,
	query: String,
	cursor: usize,
	width: u16,
	height: u16,
	fuzzy: FuzzyFilter,
}

impl<T: PaletteItem> FilterList<T> {
	pub fn new(items: Vec<T>) -> Self {
		let visible = (0..items.len()).collect();
		Self {
			items,
			visible,
			filter_state: FilterState::Unfiltered,
			query: String::new(),
			cursor: 0,
			width: 0,
			height: 0,
			fuzzy: FuzzyFilter::new(),
		}
	}

	/// All entries, unfiltered.
	pub fn items(&self) -> &[T] {
		&self.items
	}

	/// Entries currently shown, in display order.
	pub fn visible_items(&self) -> impl Iterator<Item = &T> {
		self.visible.iter().map(|&idx| &self.items[idx])
	}

	pub fn visible_len(&self) -> usize {
		self.visible.len()
	}

	/// Cursor position within the visible entries.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// The entry under the cursor, if any entry is visible.
	pub fn selected_item(&self) -> Option<&T> {
		self.visible.get(self.cursor).map(|&idx| &self.items[idx])
	}

	pub fn filter_state(&self) -> FilterState {
		self.filter_state
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	/// Viewport size as last set by [`FilterList::set_size`].
	pub fn size(&self) -> (u16, u16) {
		(self.width, self.height)
	}

	pub fn set_size(&mut self, width: u16, height: u16) {
		self.width = width;
		self.height = height;
	}

	/// Number of entries that fit in the viewport, never less than one.
	pub fn per_page(&self) -> usize {
		usize::from((self.height.saturating_sub(HEADER_ROWS) / ITEM_ROWS).max(1))
	}

	/// Index of the page holding the cursor.
	pub fn page(&self) -> usize {
		self.cursor / self.per_page()
	}

	/// Range of visible entry indices on the cursor's page.
	pub fn page_bounds(&self) -> std::ops::Range<usize> {
		let start = self.page() * self.per_page();
		let end = (start + self.per_page()).min(self.visible.len());
		start.min(end)..end
	}

	fn last_index(&self) -> usize {
		self.visible.len().saturating_sub(1)
	}

	pub fn cursor_down(&mut self) {
		self.cursor = (self.cursor + 1).min(self.last_index());
	}

	pub fn cursor_up(&mut self) {
		self.cursor = self.cursor.saturating_sub(1);
	}

	pub fn go_to_start(&mut self) {
		self.cursor = 0;
	}

	pub fn go_to_end(&mut self) {
		self.cursor = self.last_index();
	}

	pub fn next_page(&mut self) {
		self.cursor = (self.cursor + self.per_page()).min(self.last_index());
	}

	pub fn prev_page(&mut self) {
		self.cursor = self.cursor.saturating_sub(self.per_page());
	}

	/// Replaces the query and recomputes the visible entries.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = query.into();
		self.refilter();
	}

	/// Enters query editing, keeping any applied query.
	pub fn start_filtering(&mut self) {
		self.filter_state = FilterState::Filtering;
	}

	/// Stops editing the query. An empty query drops back to unfiltered.
	pub fn accept_filter(&mut self) {
		self.filter_state = if self.query.is_empty() {
			FilterState::Unfiltered
		} else {
			FilterState::FilterApplied
		};
	}

	/// Clears the query and shows every entry again.
	pub fn reset_filter(&mut self) {
		self.filter_state = FilterState::Unfiltered;
		self.set_query(String::new());
	}

	fn refilter(&mut self) {
		self.visible = self.fuzzy.rank(&self.items, &self.query);
		self.cursor = 0;
		trace!(query = %self.query, matches = self.visible.len(), "list.refilter");
	}

	/// Applies the list's built-in key bindings.
	pub fn handle_key(&mut self, key: Key) -> ListAction {
		match self.filter_state {
			FilterState::Filtering => self.handle_filtering_key(key),
			FilterState::Unfiltered | FilterState::FilterApplied => self.handle_browsing_key(key),
		}
	}

	fn handle_filtering_key(&mut self, key: Key) -> ListAction {
		match key.code {
			KeyCode::Esc => self.reset_filter(),
			KeyCode::Enter | KeyCode::Tab => self.accept_filter(),
			KeyCode::Up => self.cursor_up(),
			KeyCode::Down => self.cursor_down(),
			KeyCode::Backspace => {
				let mut query = std::mem::take(&mut self.query);
				query.pop();
				self.set_query(query);
			}
			_ => {
				if let Some(c) = key.text() {
					let mut query = std::mem::take(&mut self.query);
					query.push(c);
					self.set_query(query);
				}
			}
		}
		ListAction::None
	}

	fn handle_browsing_key(&mut self, key: Key) -> ListAction {
		if !key.modifiers.is_empty() && key.text().is_none() {
			return ListAction::None;
		}
		match key.code {
			KeyCode::Up => self.cursor_up(),
			KeyCode::Down => self.cursor_down(),
			KeyCode::Home => self.go_to_start(),
			KeyCode::End => self.go_to_end(),
			KeyCode::PageUp | KeyCode::Left => self.prev_page(),
			KeyCode::PageDown | KeyCode::Right => self.next_page(),
			KeyCode::Esc if self.filter_state == FilterState::FilterApplied => self.reset_filter(),
			KeyCode::Esc => return ListAction::Quit,
			KeyCode::Char(c) => match c {
				'k' => self.cursor_up(),
				'j' => self.cursor_down(),
				'g' => self.go_to_start(),
				'G' => self.go_to_end(),
				'h' | 'b' => self.prev_page(),
				'l' | 'f' => self.next_page(),
				'/' => self.start_filtering(),
				'q' => return ListAction::Quit,
				_ => {}
			},
			KeyCode::Enter | KeyCode::Backspace | KeyCode::Tab => {}
		}
		ListAction::None
	}
}
