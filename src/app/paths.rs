// SPDX-License-Identifier: MPL-2.0
//! Where the application keeps its files.
//!
//! Two roots exist: the config directory (`settings.toml`) and the data
//! directory (`state.cbor`, `bookmarks/`, the log file). Each is resolved,
//! first match wins, from:
//!
//! 1. an explicit override passed to a `_with_override` function (tests),
//! 2. the `--data-dir` / `--config-dir` command line flags,
//! 3. the `ICED_FOLIO_DATA_DIR` / `ICED_FOLIO_CONFIG_DIR` environment variables,
//! 4. the platform directory from `dirs`, with an `IcedFolio` sub-directory.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "IcedFolio";

pub const ENV_DATA_DIR: &str = "ICED_FOLIO_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "ICED_FOLIO_CONFIG_DIR";

const BOOKMARKS_DIR: &str = "bookmarks";
const LOG_FILE: &str = "iced_folio.log";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

#[derive(Debug, Clone, Copy)]
enum Root {
    Data,
    Config,
}

impl Root {
    fn cli(self) -> Option<PathBuf> {
        let cell = match self {
            Root::Data => &CLI_DATA_DIR,
            Root::Config => &CLI_CONFIG_DIR,
        };
        cell.get().cloned().flatten()
    }

    fn env_var(self) -> &'static str {
        match self {
            Root::Data => ENV_DATA_DIR,
            Root::Config => ENV_CONFIG_DIR,
        }
    }

    fn platform(self) -> Option<PathBuf> {
        match self {
            Root::Data => dirs::data_dir(),
            Root::Config => dirs::config_dir(),
        }
        .map(|dir| dir.join(APP_NAME))
    }

    fn resolve(self, override_path: Option<PathBuf>) -> Option<PathBuf> {
        override_path
            .or_else(|| self.cli())
            .or_else(|| {
                std::env::var(self.env_var())
                    .ok()
                    .filter(|value| !value.is_empty())
                    .map(PathBuf::from)
            })
            .or_else(|| self.platform())
    }
}

/// Records the command line directory flags. Only the first call counts.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        log::warn!("CLI directory overrides were already initialized");
    }
}

pub fn get_app_data_dir() -> Option<PathBuf> {
    Root::Data.resolve(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    Root::Data.resolve(override_path)
}

pub fn get_app_config_dir() -> Option<PathBuf> {
    Root::Config.resolve(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    Root::Config.resolve(override_path)
}

/// One `.bookmarks` file per document lives here.
pub fn get_bookmarks_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    get_app_data_dir_with_override(override_path).map(|dir| dir.join(BOOKMARKS_DIR))
}

pub fn get_log_file() -> Option<PathBuf> {
    get_app_data_dir().map(|dir| dir.join(LOG_FILE))
}

/// Export target: the configured directory, else the pictures folder, else
/// the data directory.
pub fn get_export_dir(configured: Option<PathBuf>) -> Option<PathBuf> {
    configured.or_else(dirs::picture_dir).or_else(get_app_data_dir)
}
