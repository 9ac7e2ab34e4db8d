//! Visual styling for the browser.

pub mod theme;

pub use theme::{Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names};

/// Styling knobs applied to the UI. Themes hold the colours.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	pub theme: Theme,
}

impl StyleConfig {
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
