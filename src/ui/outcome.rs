use crate::catalog::Game;

/// What the browser leaves behind when it exits.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseOutcome {
	/// Search text at exit.
	pub query: String,
	/// Most recent game shown in the overlay, if any was opened.
	pub last_opened: Option<Game>,
}
