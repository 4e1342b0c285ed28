// SPDX-License-Identifier: MPL-2.0
//! Directories remembered between sessions, stored as `state.cbor` in the
//! data directory.
//!
//! Unlike `settings.toml` this file is never edited by hand. A missing file
//! is the normal first-run case; an unreadable one is replaced by defaults
//! and reported with a warning key.

use super::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.cbor";

const LOAD_WARNING: &str = "notification-state-load-error";
const SAVE_WARNING: &str = "notification-state-save-error";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Start directory of the "Open PDF" dialog.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,

    /// Directory offered by the save prompt.
    #[serde(default)]
    pub last_save_directory: Option<PathBuf>,
}

impl AppState {
    /// Reads the state from `data_dir` (or the resolved data directory).
    pub fn load_from(data_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = state_file(data_dir) else {
            return (Self::default(), None);
        };

        match read(&path) {
            Ok(Some(state)) => (state, None),
            Ok(None) => (Self::default(), None),
            Err(err) => {
                log::warn!("Discarding state {}: {err}", path.display());
                (Self::default(), Some(LOAD_WARNING.to_string()))
            }
        }
    }

    /// Writes the state, returning a warning key on failure.
    pub fn save_to(&self, data_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = state_file(data_dir) else {
            log::warn!("No data directory, state not saved");
            return Some(SAVE_WARNING.to_string());
        };

        match write(self, &path) {
            Ok(()) => None,
            Err(err) => {
                log::warn!("Failed to save state {}: {err}", path.display());
                Some(SAVE_WARNING.to_string())
            }
        }
    }

    pub fn set_last_open_directory_from_file(&mut self, document: &Path) {
        if let Some(parent) = document.parent() {
            self.last_open_directory = Some(parent.to_path_buf());
        }
    }

    pub fn set_last_save_directory_from_file(&mut self, image: &Path) {
        if let Some(parent) = image.parent() {
            self.last_save_directory = Some(parent.to_path_buf());
        }
    }
}

fn state_file(data_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(data_dir).map(|dir| dir.join(STATE_FILE))
}

fn read(path: &Path) -> Result<Option<AppState>> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    ciborium::from_reader(BufReader::new(file))
        .map(Some)
        .map_err(|err| Error::Config(err.to_string()))
}

fn write(state: &AppState, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path)?;
    ciborium::into_writer(state, BufWriter::new(file)).map_err(|err| Error::Config(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_directory_is_the_document_parent() {
        let mut state = AppState::default();
        state.set_last_open_directory_from_file(Path::new("/home/user/papers/report.pdf"));
        assert_eq!(state.last_open_directory, Some(PathBuf::from("/home/user/papers")));
    }

    #[test]
    fn root_has_no_parent_to_remember() {
        let mut state = AppState::default();
        state.set_last_save_directory_from_file(Path::new("/"));
        assert!(state.last_save_directory.is_none());
    }

    #[test]
    fn state_round_trips_through_cbor() {
        let dir = tempdir().expect("temp dir");
        let state = AppState {
            last_open_directory: Some(PathBuf::from("/papers")),
            last_save_directory: Some(PathBuf::from("/pictures")),
        };

        assert!(state.save_to(Some(dir.path().to_path_buf())).is_none());
        let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(loaded, state);
    }

    #[test]
    fn first_run_is_silent() {
        let dir = tempdir().expect("temp dir");
        let (state, warning) = AppState::load_from(Some(dir.path().join("never-created")));
        assert!(warning.is_none());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn garbage_is_reset_with_a_warning() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(STATE_FILE), "not cbor").expect("write");

        let (state, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING));
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempdir().expect("temp dir");
        let nested = dir.path().join("a").join("b");
        assert!(AppState::default().save_to(Some(nested.clone())).is_none());
        assert!(nested.join(STATE_FILE).exists());
    }
}
