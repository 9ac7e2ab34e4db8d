//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI, so log output always goes to a file. The
//! filter comes from `GAMECAT_LOG` when set, then from configuration, then
//! defaults to `info`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

pub const FILTER_ENV: &str = "GAMECAT_LOG";
const DEFAULT_FILTER: &str = "info";
const LOG_FILE_NAME: &str = "gamecat.log";

/// Where and how much to log.
#[derive(Debug, Clone, Default)]
pub struct LogSettings {
	pub file: Option<PathBuf>,
	pub filter: Option<String>,
}

impl LogSettings {
	/// The log file to use, falling back to the data directory.
	pub fn resolved_file(&self) -> Result<PathBuf> {
		match &self.file {
			Some(path) => Ok(path.clone()),
			None => Ok(app_dirs::data_dir()?.join(LOG_FILE_NAME)),
		}
	}

	fn env_filter(&self) -> EnvFilter {
		EnvFilter::try_from_env(FILTER_ENV)
			.or_else(|_| EnvFilter::try_new(self.filter.as_deref().unwrap_or(DEFAULT_FILTER)))
			.unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
	}
}

/// Install the global subscriber.
///
/// Returns the path being written to. Fails if the file cannot be opened or a
/// subscriber is already installed; callers may carry on without logging.
pub fn initialize(settings: &LogSettings) -> Result<PathBuf> {
	let path = settings.resolved_file()?;
	let file = open_log_file(&path)?;

	tracing_subscriber::fmt()
		.with_env_filter(settings.env_filter())
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(true)
		.try_init()
		.map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))?;

	Ok(path)
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}

	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn explicit_file_wins() {
		let settings = LogSettings {
			file: Some(PathBuf::from("/tmp/custom.log")),
			filter: None,
		};
		assert_eq!(settings.resolved_file().unwrap(), PathBuf::from("/tmp/custom.log"));
	}

	#[test]
	fn log_file_is_created_with_parents() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested").join("gamecat.log");
		open_log_file(&path).expect("open");
		assert!(path.exists());
	}
}
