use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use gamecat::app_dirs;

use crate::cli::CliArgs;

/// Prefix of configuration environment variables, e.g. `GAMECAT__UI__THEME`.
pub(super) const ENV_PREFIX: &str = "GAMECAT";
const ENV_SEPARATOR: &str = "__";

/// Build a [`Config`] from the default locations, `--config` files and the
/// environment. Also returns the files that exist and were merged.
pub(super) fn build_config(cli: &CliArgs) -> Result<(Config, Vec<PathBuf>)> {
	let mut builder = Config::builder();
	let mut merged = Vec::new();

	if !cli.no_config {
		for path in default_config_files() {
			if path.is_file() {
				merged.push(path.clone());
			}
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		merged.push(path.clone());
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix(ENV_PREFIX)
			.separator(ENV_SEPARATOR)
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("ui.footer"),
	);

	let config = builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})?;
	Ok((config, merged))
}

/// Environment variable that sets `key`, e.g. `ui.theme` -> `GAMECAT__UI__THEME`.
pub(super) fn env_var_for(key: &str) -> String {
	let mut name = String::from(ENV_PREFIX);
	for part in key.split('.') {
		name.push_str(ENV_SEPARATOR);
		name.push_str(&part.to_ascii_uppercase());
	}
	name
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".gamecat.toml"));
		files.push(current_dir.join("gamecat.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".gamecat.toml")));
		assert!(files.iter().any(|path| path.ends_with("gamecat.toml")));
	}

	#[test]
	fn env_var_names_follow_the_key_path() {
		assert_eq!(env_var_for("ui.theme"), "GAMECAT__UI__THEME");
		assert_eq!(env_var_for("catalog.image_root"), "GAMECAT__CATALOG__IMAGE_ROOT");
	}
}
