// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! Transient state that should survive restarts but is not user-editable,
//! kept apart from the TOML preferences. Stored as CBOR for compact binary
//! storage and to make the separation from `settings.toml` obvious.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Last directory a table was exported to. Used as the initial
    /// directory for the next export save dialog.
    #[serde(default)]
    pub last_export_directory: Option<PathBuf>,

    /// Whether the navigation sidebar was open when the app last quit.
    #[serde(default)]
    pub sidebar_open: bool,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns `(state, optional_warning)`. A missing or unreadable file
    /// yields defaults; only corruption produces a warning.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(err) => {
                        log::warn!("failed to parse {}: {err}", path.display());
                        (
                            Self::default(),
                            Some("Saved window state could not be read".to_string()),
                        )
                    }
                }
            }
            Err(err) => {
                log::warn!("failed to open {}: {err}", path.display());
                (
                    Self::default(),
                    Some("Saved window state could not be read".to_string()),
                )
            }
        }
    }

    /// Saves application state to the default location, creating the
    /// parent directory if needed. Returns a warning message on failure.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("No data directory available".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("Could not create the data directory".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("Could not write window state".to_string());
                }
                None
            }
            Err(_) => Some("Could not write window state".to_string()),
        }
    }

    /// Returns the full path to the state file with optional override.
    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Remembers the directory an export was written to. A path without a
    /// parent (e.g. the filesystem root) leaves the directory unchanged.
    pub fn set_last_export_directory_from_file(&mut self, file_path: &std::path::Path) {
        if let Some(parent) = file_path.parent() {
            self.last_export_directory = Some(parent.to_path_buf());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_export_directory() {
        let state = AppState::default();
        assert!(state.last_export_directory.is_none());
        assert!(!state.sidebar_open);
    }

    #[test]
    fn set_last_export_directory_extracts_parent() {
        let mut state = AppState::default();
        state.set_last_export_directory_from_file(std::path::Path::new(
            "/home/staff/exports/export.csv",
        ));
        assert_eq!(
            state.last_export_directory,
            Some(PathBuf::from("/home/staff/exports"))
        );
    }

    #[test]
    fn set_last_export_directory_ignores_root() {
        let mut state = AppState::default();
        state.set_last_export_directory_from_file(std::path::Path::new("/"));
        assert!(state.last_export_directory.is_none());
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let original = AppState {
            last_export_directory: Some(PathBuf::from("/test/export/directory")),
            sidebar_open: true,
        };

        let save_result = original.save_to(Some(base_dir.clone()));
        assert!(save_result.is_none(), "save should succeed");
        assert!(base_dir.join(STATE_FILE).exists());

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(original, loaded);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(STATE_FILE), "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        let state = AppState {
            last_export_directory: Some(PathBuf::from("/test")),
            sidebar_open: false,
        };

        let result = state.save_to(Some(nested_dir.clone()));
        assert!(result.is_none(), "save should succeed");
        assert!(nested_dir.join(STATE_FILE).exists());
    }
}
