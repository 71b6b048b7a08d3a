//! Pure rendering of palette state into a ratatui buffer.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::PaletteItem;
use crate::list::{FilterList, FilterState, ITEM_ROWS};
use crate::state::Palette;

const ACCENT: Color = Color::Magenta;
const MARKER: &str = "│ ";
const GUTTER: &str = "  ";

fn title_style() -> Style {
	Style::new().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD)
}

fn dim() -> Style {
	Style::new().fg(Color::DarkGray)
}

/// Draws `palette` into `area`, inside the style's margin.
pub fn render<T: PaletteItem>(palette: &Palette<T>, area: Rect, buf: &mut Buffer) {
	let inner = palette.style().inner(area.intersection(buf.area));
	if inner.is_empty() {
		return;
	}

	let list = palette.list();
	let mut rows = Rows::new(inner, buf);
	rows.push(&heading(palette.style().title.as_str(), list));
	rows.push(&status_line(list));

	for (offset, item) in list.visible_items().enumerate().skip(list.page_bounds().start).take(list.per_page()) {
		let selected = offset == list.cursor();
		let (gutter, title, description) = if selected {
			let accent = Style::new().fg(ACCENT);
			(Span::styled(MARKER, accent), accent.add_modifier(Modifier::BOLD), accent)
		} else {
			(Span::raw(GUTTER), Style::new(), dim())
		};
		rows.push(&Line::from(vec![gutter.clone(), Span::styled(item.title(), title)]));
		rows.push(&Line::from(vec![gutter, Span::styled(item.description(), description)]));
		rows.skip(usize::from(ITEM_ROWS) - 2);
	}
}

fn heading<T: PaletteItem>(title: &str, list: &FilterList<T>) -> Line<'static> {
	match list.filter_state() {
		FilterState::Filtering => Line::from(vec![
			Span::styled("Filter: ", Style::new().fg(ACCENT)),
			Span::raw(list.query().to_string()),
		]),
		FilterState::Unfiltered | FilterState::FilterApplied => Line::from(Span::styled(format!(" {title} "), title_style())),
	}
}

fn status_line<T: PaletteItem>(list: &FilterList<T>) -> Line<'static> {
	let total = list.items().len();
	let visible = list.visible_len();
	let text = match (list.filter_state(), visible) {
		(_, 0) => "No items".to_string(),
		(FilterState::Unfiltered, 1) => "1 item".to_string(),
		(FilterState::Unfiltered, n) => format!("{n} items"),
		(_, n) => format!("{n}/{total} items"),
	};
	Line::from(Span::styled(text, dim()))
}

/// Sequential line writer that never draws outside its area.
struct Rows<'a> {
	area: Rect,
	next: u16,
	buf: &'a mut Buffer,
}

impl<'a> Rows<'a> {
	fn new(area: Rect, buf: &'a mut Buffer) -> Self {
		Self { area, next: 0, buf }
	}

	fn push(&mut self, line: &Line<'_>) {
		if self.next < self.area.height {
			self.buf.set_line(self.area.x, self.area.y + self.next, line, self.area.width);
		}
		self.next = self.next.saturating_add(1);
	}

	fn skip(&mut self, rows: usize) {
		self.next = self.next.saturating_add(u16::try_from(rows).unwrap_or(u16::MAX));
	}
}

impl<T: PaletteItem> Widget for &Palette<T> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		render(self, area, buf);
	}
}
