use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::GameId;

/// Reasons a catalog document can be refused at load time.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("failed to read catalog file {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("catalog is not a valid list of games: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("game id {id} appears more than once (at positions {first} and {second})")]
	DuplicateId {
		id: GameId,
		first: usize,
		second: usize,
	},
	#[error("game id {id} at position {position} has an empty name")]
	EmptyName { id: GameId, position: usize },
}
