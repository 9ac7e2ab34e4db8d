//! Search and selection state for the browser screen.
//!
//! The [`Controller`] owns the transient state of the screen: the search text
//! and the game currently opened in the detail overlay. It borrows the catalog
//! and derives the visible list on demand. Every operation is total.

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::catalog::{Catalog, Game};
use crate::search;

/// A single controller operation expressed as a value.
///
/// The presentation layer turns each recognised gesture into exactly one
/// command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<'a> {
	SetSearchTerm(String),
	SelectGame(&'a Game),
	CloseOverlay,
}

/// Search and selection state over a borrowed catalog.
#[derive(Debug, Clone)]
pub struct Controller<'a> {
	catalog: &'a Catalog,
	search_term: String,
	selected: Option<&'a Game>,
	overlay_visible: bool,
}

impl<'a> Controller<'a> {
	/// Mount a controller with an empty search and no selection.
	#[must_use]
	pub fn new(catalog: &'a Catalog) -> Self {
		Self {
			catalog,
			search_term: String::new(),
			selected: None,
			overlay_visible: false,
		}
	}

	/// Mount a controller with a pre-filled search term.
	#[must_use]
	pub fn with_search_term(catalog: &'a Catalog, term: impl Into<String>) -> Self {
		let mut controller = Self::new(catalog);
		controller.search_term = term.into();
		controller
	}

	/// Replace the search term. Any text is accepted.
	pub fn set_search_term(&mut self, text: impl Into<String>) {
		self.search_term = text.into();
		debug!(term = %self.search_term, "search term updated");
	}

	/// Open the detail overlay for `game`.
	///
	/// The game does not have to come from the catalog; its fields are shown
	/// as they are.
	pub fn select_game(&mut self, game: &'a Game) {
		self.selected = Some(game);
		self.overlay_visible = true;
		debug!(id = game.id, name = %game.name, "game selected");
	}

	/// Hide the overlay and drop the selection together.
	pub fn close_overlay(&mut self) {
		self.overlay_visible = false;
		self.selected = None;
		debug!("overlay closed");
	}

	/// Apply a command produced by the presentation layer.
	pub fn apply(&mut self, command: Command<'a>) {
		match command {
			Command::SetSearchTerm(text) => self.set_search_term(text),
			Command::SelectGame(game) => self.select_game(game),
			Command::CloseOverlay => self.close_overlay(),
		}
	}

	/// Games matching the current term, ordered by name.
	#[must_use]
	pub fn visible_list(&self) -> Vec<&'a Game> {
		search::visible_list(self.catalog, &self.search_term)
	}

	#[must_use]
	pub fn search_term(&self) -> &str {
		&self.search_term
	}

	#[must_use]
	pub fn selected_game(&self) -> Option<&'a Game> {
		self.selected
	}

	#[must_use]
	pub fn overlay_visible(&self) -> bool {
		self.overlay_visible
	}

	/// The game to render in the overlay, if the overlay is showing.
	#[must_use]
	pub fn overlay_game(&self) -> Option<&'a Game> {
		self.selected.filter(|_| self.overlay_visible)
	}

	#[must_use]
	pub fn catalog(&self) -> &'a Catalog {
		self.catalog
	}
}
