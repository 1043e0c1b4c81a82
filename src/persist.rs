//! Saves the last generated keyword so the app reopens on the same world.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("No user config directory available")]
    NoConfigDir,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse saved state: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    pub keyword: String,
}

fn state_path() -> Result<PathBuf, PersistError> {
    let dir = dirs::config_dir().ok_or(PersistError::NoConfigDir)?;
    Ok(dir.join("dreamscape").join("state.json"))
}

/// Writes the last keyword to the user config directory.
pub fn save(state: &SavedState) -> Result<(), PersistError> {
    let path = state_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

/// Reads the last saved keyword. `Ok(None)` when nothing was saved yet.
pub fn load() -> Result<Option<SavedState>, PersistError> {
    let path = state_path()?;
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&contents)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_state_round_trips_through_json() {
        let state = SavedState {
            keyword: "volcan".to_string(),
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: SavedState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn malformed_state_is_a_json_error() {
        let err = serde_json::from_str::<SavedState>("{\"keyword\":").unwrap_err();
        let wrapped = PersistError::from(err);
        assert!(matches!(wrapped, PersistError::Json(_)));
    }
}
