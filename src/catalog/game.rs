use serde::{Deserialize, Serialize};

/// Stable identifier of a [`Game`] within a catalog.
pub type GameId = u32;

/// A single catalog entry.
///
/// Only `id` and `name` carry meaning for the browser: `id` identifies the
/// record and `name` is both the search key and the sort key. Every other field
/// is display-only text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
	pub id: GameId,
	pub name: String,
	pub platform: String,
	pub genre: String,
	pub developer: String,
	pub release_date: String,
	pub rating: String,
	pub rating_score: f64,
	/// Reference to a displayable image, resolved by an
	/// [`ImageLoader`](crate::ui::components::ImageLoader).
	pub image: String,
}

impl Game {
	/// Build a game with the given identity and blank display fields.
	#[must_use]
	pub fn new(id: GameId, name: impl Into<String>) -> Self {
		Self {
			id,
			name: name.into(),
			platform: String::new(),
			genre: String::new(),
			developer: String::new(),
			release_date: String::new(),
			rating: String::new(),
			rating_score: 0.0,
			image: String::new(),
		}
	}

	#[must_use]
	pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
		self.platform = platform.into();
		self
	}

	#[must_use]
	pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
		self.genre = genre.into();
		self
	}

	#[must_use]
	pub fn with_developer(mut self, developer: impl Into<String>) -> Self {
		self.developer = developer.into();
		self
	}

	#[must_use]
	pub fn with_release_date(mut self, release_date: impl Into<String>) -> Self {
		self.release_date = release_date.into();
		self
	}

	#[must_use]
	pub fn with_rating(mut self, rating: impl Into<String>, score: f64) -> Self {
		self.rating = rating.into();
		self.rating_score = score;
		self
	}

	#[must_use]
	pub fn with_image(mut self, image: impl Into<String>) -> Self {
		self.image = image.into();
		self
	}

	/// The "genre - platform" summary shown beneath a list entry.
	#[must_use]
	pub fn genre_and_platform(&self) -> String {
		format!("{} - {}", self.genre, self.platform)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deserializes_camel_case_fields() {
		let json = r#"{
			"id": 7,
			"name": "Celeste",
			"platform": "Switch",
			"genre": "Platformer",
			"developer": "Maddy Makes Games",
			"releaseDate": "2018-01-25",
			"rating": "E10+",
			"ratingScore": 9.4,
			"image": "images/celeste.png"
		}"#;

		let game: Game = serde_json::from_str(json).expect("game");
		assert_eq!(game.id, 7);
		assert_eq!(game.release_date, "2018-01-25");
		assert_eq!(game.rating_score, 9.4);
		assert_eq!(game.genre_and_platform(), "Platformer - Switch");
	}

	#[test]
	fn missing_field_is_rejected() {
		let json = r#"{ "id": 1, "name": "Missing the rest" }"#;
		assert!(serde_json::from_str::<Game>(json).is_err());
	}
}
