//! Where `gamecat` looks for its config file and writes its log.
//!
//! `GAMECAT_CONFIG_DIR` and `GAMECAT_DATA_DIR` win over the platform
//! locations from `directories`.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppDir {
	/// Holds `config.toml`.
	Config,
	/// Holds the default log file.
	Data,
}

impl AppDir {
	fn env_var(self) -> &'static str {
		match self {
			Self::Config => "GAMECAT_CONFIG_DIR",
			Self::Data => "GAMECAT_DATA_DIR",
		}
	}

	fn platform_dir(self, dirs: &ProjectDirs) -> &Path {
		match self {
			Self::Config => dirs.config_local_dir(),
			Self::Data => dirs.data_local_dir(),
		}
	}

	fn resolve(self) -> Result<PathBuf> {
		if let Some(dir) = override_dir(env::var_os(self.env_var())) {
			return Ok(dir);
		}

		let dirs = ProjectDirs::from("io", "gamecat", "gamecat")
			.ok_or_else(|| anyhow!("no home directory to place gamecat files under"))?;
		Ok(self.platform_dir(&dirs).to_path_buf())
	}
}

/// An empty override counts as unset.
fn override_dir(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

pub fn config_dir() -> Result<PathBuf> {
	AppDir::Config.resolve()
}

pub fn data_dir() -> Result<PathBuf> {
	AppDir::Data.resolve()
}
