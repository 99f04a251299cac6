use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::debug;

use crate::domain::PersistedState;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "WartalesTradeHelper";
const APP_NAME: &str = "WartalesTradeHelper";

fn data_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("state.json"))
}

/// Missing or unreadable state is treated as "nothing saved".
pub fn load_persisted_state() -> Option<PersistedState> {
    let path = data_file()?;
    let data = fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&data) {
        Ok(state) => Some(state),
        Err(err) => {
            debug!(path = %path.display(), "ignoring unreadable UI state: {err}");
            None
        }
    }
}

pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
    let path = data_file().ok_or(PersistSaveError::StorageUnavailable)?;
    write_state(&path, state)
}

fn write_state(path: &Path, state: &PersistedState) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_file_is_pretty_json() {
        let dir = std::env::temp_dir().join(format!("wartales-state-{}", std::process::id()));
        let path = dir.join("nested").join("state.json");
        let state = PersistedState {
            selected_origin: Some("Tiltren".to_string()),
        };

        write_state(&path, &state).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_dir_all(&dir).ok();

        assert!(written.contains("\"selected_origin\": \"Tiltren\""));
        let parsed: PersistedState = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn missing_origin_field_defaults_to_none() {
        let parsed: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.selected_origin, None);
    }
}
