use std::env;
use std::path::PathBuf;

use anyhow::Result;
use gamecat::logging::LogSettings;
use gamecat::ui::UiLabels;
use gamecat::ui::style::by_name;
use serde::Deserialize;

use super::resolved::{ConfigError, ResolvedConfig, SettingSource};
use super::sources::env_var_for;
use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "slate";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) catalog: CatalogSection,
	pub(super) ui: UiSection,
	pub(super) logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
	pub(super) path: Option<PathBuf>,
	pub(super) image_root: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) footer: Option<Vec<String>>,
	pub(super) empty_label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) file: Option<PathBuf>,
	pub(super) filter: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.catalog.clone() {
			self.catalog.path = Some(path);
		}
		if let Some(root) = cli.image_root.clone() {
			self.catalog.image_root = Some(root);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(file) = cli.log_file.clone() {
			self.logging.file = Some(file);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs, files: Vec<PathBuf>) -> Result<ResolvedConfig> {
		let theme_name = self
			.ui
			.theme
			.clone()
			.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let theme = by_name(&theme_name).ok_or_else(|| {
			ConfigError::invalid(
				"ui.theme",
				theme_name.clone(),
				detect_source(cli.theme.is_some(), "--theme", "ui.theme"),
				"unknown theme (see --list-themes)",
			)
		})?;

		if let Some(path) = &self.catalog.path
			&& path.as_os_str().is_empty()
		{
			return Err(ConfigError::invalid(
				"catalog.path",
				String::new(),
				detect_source(cli.catalog.is_some(), "--catalog", "catalog.path"),
				"must not be empty",
			)
			.into());
		}

		let mut labels = UiLabels::default();
		if let Some(title) = self.ui.title {
			labels.title = title;
		}
		if let Some(placeholder) = self.ui.placeholder {
			labels.placeholder = placeholder;
		}
		if let Some(empty_label) = self.ui.empty_label {
			labels.empty_label = empty_label;
		}
		if let Some(footer) = self.ui.footer {
			labels.set_footer(footer);
		}

		Ok(ResolvedConfig {
			catalog_path: self.catalog.path,
			image_root: self.catalog.image_root,
			labels,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			theme_name,
			theme,
			logging: LogSettings {
				file: self.logging.file,
				filter: self.logging.filter,
			},
			files,
		})
	}
}

fn detect_source(cli_present: bool, cli_flag: &'static str, key: &'static str) -> SettingSource {
	if cli_present {
		return SettingSource::CliFlag(cli_flag);
	}

	let env_var = env_var_for(key);
	if env::var_os(&env_var).is_some() {
		return SettingSource::Environment(env_var);
	}

	SettingSource::ConfigKey(key)
}
