//! UI building blocks shared across rendering and state modules.

/// Static attribution lines.
pub mod footer;
/// Title row and search prompt.
pub mod header;
/// Detail overlay for the selected game.
pub mod overlay;
/// Scrollbar for the game table.
pub mod scrollbar;
/// Game table rendering and name highlighting.
pub mod tables;
/// Image references shown as thumbnails.
pub mod thumbnail;

pub use footer::{FOOTER_HEIGHT, render_footer};
pub use header::{HEADER_HEIGHT, HeaderContext, render_header};
pub use overlay::{OverlayAreas, render_overlay};
pub use scrollbar::point_in_rect;
pub use tables::{GameTable, render_game_table};
pub use thumbnail::{FileNameImageLoader, ImageLoader, Thumbnail};
