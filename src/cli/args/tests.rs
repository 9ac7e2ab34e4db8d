use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn defaults_to_plain_output_without_overrides() {
	let parsed = CliArgs::parse_from(["gamecat"]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(!parsed.list);
	assert!(parsed.catalog.is_none());
	assert!(parsed.initial_query.is_none());
}

#[test]
fn parses_listing_flags() {
	let parsed = CliArgs::parse_from([
		"gamecat",
		"--catalog",
		"games.json",
		"-q",
		"zelda",
		"-l",
		"-o",
		"json",
		"-c",
		"a.toml",
		"-c",
		"b.toml",
	]);
	assert_eq!(parsed.catalog, Some(PathBuf::from("games.json")));
	assert_eq!(parsed.initial_query.as_deref(), Some("zelda"));
	assert!(parsed.list);
	assert_eq!(parsed.output, OutputFormat::Json);
	assert_eq!(parsed.config, [PathBuf::from("a.toml"), PathBuf::from("b.toml")]);
}
