//! The read-only catalog of games the browser lists.
//!
//! A [`Catalog`] is built once at startup, either from the document embedded
//! in the binary or from a JSON file, and is never mutated afterwards. Loading
//! enforces the two invariants the rest of the crate relies on: every `id` is
//! unique and every `name` is non-empty.

mod error;
mod game;

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub use error::CatalogError;
pub use game::{Game, GameId};

const BUNDLED_CATALOG: &str = include_str!("../../assets/games.json");

/// Where a catalog was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
	Bundled,
	File(PathBuf),
	Memory,
}

impl fmt::Display for CatalogOrigin {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bundled => f.write_str("(bundled)"),
			Self::File(path) => write!(f, "{}", path.display()),
			Self::Memory => f.write_str("(in memory)"),
		}
	}
}

/// An ordered, immutable sequence of games.
#[derive(Debug, Clone)]
pub struct Catalog {
	games: Vec<Game>,
	origin: CatalogOrigin,
}

impl Catalog {
	/// Validate and wrap an in-memory list of games.
	pub fn from_games(games: Vec<Game>) -> Result<Self, CatalogError> {
		Self::validated(games, CatalogOrigin::Memory)
	}

	/// Parse a JSON array of games.
	pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
		let games: Vec<Game> = serde_json::from_str(json)?;
		Self::validated(games, CatalogOrigin::Memory)
	}

	/// Read and parse a JSON catalog from disk.
	pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
		let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let games: Vec<Game> = serde_json::from_str(&contents)?;
		Self::validated(games, CatalogOrigin::File(path.to_path_buf()))
	}

	/// The catalog shipped inside the binary.
	pub fn bundled() -> Result<Self, CatalogError> {
		let games: Vec<Game> = serde_json::from_str(BUNDLED_CATALOG)?;
		Self::validated(games, CatalogOrigin::Bundled)
	}

	fn validated(games: Vec<Game>, origin: CatalogOrigin) -> Result<Self, CatalogError> {
		let mut seen: HashMap<GameId, usize> = HashMap::with_capacity(games.len());
		for (position, game) in games.iter().enumerate() {
			if game.name.is_empty() {
				return Err(CatalogError::EmptyName {
					id: game.id,
					position,
				});
			}
			if let Some(first) = seen.insert(game.id, position) {
				return Err(CatalogError::DuplicateId {
					id: game.id,
					first,
					second: position,
				});
			}
		}

		Ok(Self { games, origin })
	}

	/// All games in catalog order.
	#[must_use]
	pub fn games(&self) -> &[Game] {
		&self.games
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Game> {
		self.games.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.games.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.games.is_empty()
	}

	/// Look up a game by id.
	#[must_use]
	pub fn get(&self, id: GameId) -> Option<&Game> {
		self.games.iter().find(|game| game.id == id)
	}

	#[must_use]
	pub fn origin(&self) -> &CatalogOrigin {
		&self.origin
	}
}

impl<'a> IntoIterator for &'a Catalog {
	type Item = &'a Game;
	type IntoIter = std::slice::Iter<'a, Game>;

	fn into_iter(self) -> Self::IntoIter {
		self.games.iter()
	}
}
