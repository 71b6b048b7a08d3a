//! Layout configuration handed to the palette at construction.

use ratatui::layout::Rect;

/// Blank space kept around the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margin {
	/// Rows above and below.
	pub vertical: u16,
	/// Columns left and right.
	pub horizontal: u16,
}

/// Static presentation settings for a palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteStyle {
	/// Heading shown above the list.
	pub title: String,
	pub margin: Margin,
}

impl Default for PaletteStyle {
	fn default() -> Self {
		Self {
			title: "april".to_string(),
			margin: Margin {
				vertical: 1,
				horizontal: 2,
			},
		}
	}
}

impl PaletteStyle {
	/// Total `(width, height)` consumed by the margin on both sides.
	pub fn frame_size(&self) -> (u16, u16) {
		(self.margin.horizontal.saturating_mul(2), self.margin.vertical.saturating_mul(2))
	}

	/// Shrinks `area` by the margin, collapsing to an empty rect when too small.
	pub fn inner(&self, area: Rect) -> Rect {
		let (frame_w, frame_h) = self.frame_size();
		Rect {
			x: area.x.saturating_add(self.margin.horizontal),
			y: area.y.saturating_add(self.margin.vertical),
			width: area.width.saturating_sub(frame_w),
			height: area.height.saturating_sub(frame_h),
		}
	}
}
