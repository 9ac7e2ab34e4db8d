use std::ops::Range;

use super::collate::NameCollator;
use crate::catalog::Game;

/// Whether `name` contains `term`, ignoring case.
#[must_use]
pub fn matches_name(name: &str, term: &str) -> bool {
	contains_folded(name, &term.to_lowercase())
}

fn contains_folded(name: &str, needle: &str) -> bool {
	needle.is_empty() || name.to_lowercase().contains(needle)
}

/// Filter `games` by name and order the survivors by collated name.
///
/// Games whose names collate equal keep their relative input order.
pub fn visible_list<'a, I>(games: I, term: &str) -> Vec<&'a Game>
where
	I: IntoIterator<Item = &'a Game>,
{
	let needle = term.to_lowercase();
	let mut visible: Vec<(usize, &'a Game)> = games
		.into_iter()
		.enumerate()
		.filter(|(_, game)| contains_folded(&game.name, &needle))
		.collect();

	let collator = NameCollator::root();
	visible.sort_unstable_by(|(a_index, a), (b_index, b)| {
		collator
			.compare(&a.name, &b.name)
			.then_with(|| a_index.cmp(b_index))
	});
	visible.into_iter().map(|(_, game)| game).collect()
}

/// Character range of the first case-insensitive occurrence of `term` in
/// `name`, for highlighting.
///
/// Returns `None` for an empty term or when the term does not occur.
#[must_use]
pub fn match_range(name: &str, term: &str) -> Option<Range<usize>> {
	if term.is_empty() {
		return None;
	}

	let mut folded = String::with_capacity(name.len());
	// Char index in `name` for every byte of `folded`.
	let mut owners = Vec::with_capacity(name.len());
	for (char_index, ch) in name.chars().enumerate() {
		for lower in ch.to_lowercase() {
			folded.push(lower);
			owners.extend(std::iter::repeat_n(char_index, lower.len_utf8()));
		}
	}

	let needle = term.to_lowercase();
	let start = folded.find(&needle)?;
	let last = start + needle.len() - 1;
	Some(owners[start]..owners[last] + 1)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn names<'a>(games: &[&'a Game]) -> Vec<&'a str> {
		games.iter().map(|game| game.name.as_str()).collect()
	}

	fn sample() -> Vec<Game> {
		vec![
			Game::new(1, "Zelda"),
			Game::new(2, "Mario"),
			Game::new(3, "Elden Ring"),
		]
	}

	#[test]
	fn filters_case_insensitively_and_sorts() {
		let games = sample();
		assert_eq!(names(&visible_list(&games, "e")), ["Elden Ring", "Zelda"]);
		assert_eq!(names(&visible_list(&games, "E")), ["Elden Ring", "Zelda"]);
		assert_eq!(names(&visible_list(&games, "MAR")), ["Mario"]);
	}

	#[test]
	fn empty_term_keeps_everything_sorted() {
		let games = sample();
		assert_eq!(
			names(&visible_list(&games, "")),
			["Elden Ring", "Mario", "Zelda"]
		);
	}

	#[test]
	fn unmatched_term_yields_empty_list() {
		assert!(visible_list(&sample(), "xyz").is_empty());
	}

	#[test]
	fn whitespace_is_part_of_the_term() {
		let games = sample();
		assert_eq!(names(&visible_list(&games, "n r")), ["Elden Ring"]);
		assert!(visible_list(&games, " zelda").is_empty());
	}

	#[test]
	fn equal_names_keep_catalog_order() {
		let games = vec![Game::new(9, "Tetris"), Game::new(4, "Tetris")];
		let ids: Vec<_> = visible_list(&games, "").iter().map(|game| game.id).collect();
		assert_eq!(ids, [9, 4]);
	}

	#[test]
	fn unicode_names_sort_in_collation_order() {
		let games = vec![
			Game::new(1, "Zelda"),
			Game::new(2, "Æon Flux"),
			Game::new(3, "Afterparty"),
			Game::new(4, "Łódź"),
		];
		assert_eq!(
			names(&visible_list(&games, "")),
			["Æon Flux", "Afterparty", "Łódź", "Zelda"]
		);
	}

	#[test]
	fn canonically_equal_names_keep_catalog_order() {
		let games = vec![Game::new(2, "Poke\u{301}mon"), Game::new(1, "Pok\u{e9}mon")];
		let ids: Vec<_> = visible_list(&games, "").iter().map(|game| game.id).collect();
		assert_eq!(ids, [2, 1]);
	}

	#[test]
	fn matches_name_ignores_case() {
		assert!(matches_name("Pokémon", "POKÉ"));
		assert!(matches_name("anything", ""));
		assert!(!matches_name("Hades", "hadesII"));
	}

	#[test]
	fn match_range_reports_char_positions() {
		assert_eq!(match_range("Elden Ring", "RING"), Some(6..10));
		assert_eq!(match_range("Pokémon Legends", "émon"), Some(3..7));
		assert_eq!(match_range("Hades", ""), None);
		assert_eq!(match_range("Hades", "zz"), None);
	}
}
