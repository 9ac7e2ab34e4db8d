use anyhow::Result;
use gamecat::{BrowseOutcome, Game};
use serde_json::{Value, json};

use super::OutputFormat;

/// Print the games matching a query, one per line or as a JSON array.
pub(crate) fn print_list(games: &[&Game], format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Plain => print!("{}", format_list_plain(games)),
		OutputFormat::Json => println!("{}", format_list_json(games)?),
	}
	Ok(())
}

/// Print what the browser ended with.
pub(crate) fn print_outcome(outcome: &BrowseOutcome, format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Plain => println!("{}", format_outcome_plain(outcome)),
		OutputFormat::Json => println!("{}", format_outcome_json(outcome)?),
	}
	Ok(())
}

fn format_list_plain(games: &[&Game]) -> String {
	games
		.iter()
		.map(|game| {
			format!(
				"{}\t{}\t{}\t{}\n",
				game.id,
				game.name,
				game.genre_and_platform(),
				game.rating
			)
		})
		.collect()
}

fn format_list_json(games: &[&Game]) -> Result<String> {
	Ok(serde_json::to_string_pretty(games)?)
}

fn format_outcome_plain(outcome: &BrowseOutcome) -> String {
	match &outcome.last_opened {
		Some(game) => format!("Last opened: {} (query: '{}')", game.name, outcome.query),
		None => format!("No game opened (query: '{}')", outcome.query),
	}
}

fn format_outcome_json(outcome: &BrowseOutcome) -> Result<String> {
	let last_opened = match &outcome.last_opened {
		Some(game) => json!({
			"id": game.id,
			"name": game.name,
		}),
		None => Value::Null,
	};

	let payload = json!({
		"query": outcome.query,
		"lastOpened": last_opened,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}
