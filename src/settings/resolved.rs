use std::fmt;
use std::path::PathBuf;

use gamecat::logging::LogSettings;
use gamecat::ui::UiLabels;
use gamecat::ui::style::Theme;
use thiserror::Error;

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	/// Catalog file; `None` means the bundled catalog.
	pub catalog_path: Option<PathBuf>,
	pub image_root: Option<PathBuf>,
	pub labels: UiLabels,
	pub initial_query: String,
	pub theme_name: String,
	pub theme: Theme,
	pub logging: LogSettings,
	/// Config files that were merged, in order.
	pub files: Vec<PathBuf>,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", self.summary());
	}

	fn summary(&self) -> String {
		let mut lines = vec!["Effective configuration:".to_string()];
		let catalog = self
			.catalog_path
			.as_ref()
			.map_or_else(|| "(bundled)".to_string(), |path| path.display().to_string());
		lines.push(format!("  Catalog: {catalog}"));
		if let Some(root) = &self.image_root {
			lines.push(format!("  Image root: {}", root.display()));
		}
		lines.push(format!("  Title: {}", self.labels.title));
		lines.push(format!("  Placeholder: {}", self.labels.placeholder));
		if !self.initial_query.is_empty() {
			lines.push(format!("  Initial query: {}", self.initial_query));
		}
		lines.push(format!("  UI theme: {}", self.theme_name));
		lines.push(format!("  Footer: {}", self.labels.footer_lines().join(" / ")));
		if let Some(file) = &self.logging.file {
			lines.push(format!("  Log file: {}", file.display()));
		}
		if self.files.is_empty() {
			lines.push("  Config files: (none)".to_string());
		} else {
			for file in &self.files {
				lines.push(format!("  Config file: {}", file.display()));
			}
		}

		let mut summary = lines.join("\n");
		summary.push('\n');
		summary
	}
}

/// Where an invalid setting came from.
#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(String),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn invalid(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		reason: impl Into<String>,
	) -> Self {
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}
