//! Interactive palette for choosing a command template.
//!
//! The palette is an explicit state machine: [`Palette::update`] consumes one
//! [`PaletteEvent`] and reports an [`Effect`], and rendering is a separate
//! pure function of the palette state (see [`render`]). Nothing here touches
//! a real terminal, so the whole interaction is testable with scripted events.

pub mod key;
pub mod list;
pub mod render;
pub mod state;
pub mod style;

pub use april_catalog::PaletteItem;
pub use key::{Key, KeyCode, Modifiers};
pub use list::{FilterList, FilterState, ListAction};
pub use state::{Effect, EventSource, Mode, Outcome, Palette, PaletteEvent, PaletteKey, run};
pub use style::{Margin, PaletteStyle};
