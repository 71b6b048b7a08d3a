use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::PaletteItem;

/// Fuzzy ranking of list entries against a query.
pub(super) struct FuzzyFilter {
	matcher: Matcher,
	buf: Vec<char>,
}

impl FuzzyFilter {
	pub(super) fn new() -> Self {
		Self {
			matcher: Matcher::new(Config::DEFAULT),
			buf: Vec::new(),
		}
	}

	/// Returns indices of matching items, best score first.
	///
	/// Equal scores keep catalog order. A blank query matches everything.
	pub(super) fn rank<T: PaletteItem>(&mut self, items: &[T], query: &str) -> Vec<usize> {
		if query.trim().is_empty() {
			return (0..items.len()).collect();
		}

		let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
		let mut scored: Vec<(usize, u32)> = items
			.iter()
			.enumerate()
			.filter_map(|(idx, item)| {
				self.buf.clear();
				let haystack = Utf32Str::new(item.filter_value(), &mut self.buf);
				pattern.score(haystack, &mut self.matcher).map(|score| (idx, score))
			})
			.collect();
		scored.sort_by(|a, b| b.1.cmp(&a.1));
		scored.into_iter().map(|(idx, _)| idx).collect()
	}
}
