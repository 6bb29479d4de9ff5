//! TOML room configuration loading.
//!
//! The room file is required input: a missing file is an error, not a fall
//! back to [`RoomConfig::default`].

use std::path::{Path, PathBuf};

use cinema_core::{Room, RoomError};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::RoomConfig;

/// Error type for loading a room from its configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error reading room config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse room config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A `[[reserved]]` entry does not fit the configured rows.
    #[error("invalid reserved run: {0}")]
    Reservation(#[from] RoomError),
}

/// Reads and parses the room configuration at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read (including when it
/// does not exist) and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_room_config(path: &Path) -> Result<RoomConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: RoomConfig = toml::from_str(&content)?;
    debug!(path = %path.display(), rows = config.room.rows.len(), "room config loaded");
    Ok(config)
}

/// Loads the configuration at `path` and builds the room from it.
///
/// `rows_override`, when given, replaces the configured row lengths before the
/// room is built; reserved runs are still applied on top.
///
/// # Errors
///
/// Returns any [`ConfigError`] from [`load_room_config`], or
/// [`ConfigError::Reservation`] when a reserved run does not fit.
pub fn load_room(path: &Path, rows_override: Option<Vec<usize>>) -> Result<Room, ConfigError> {
    let mut config = load_room_config(path)?;
    if let Some(rows) = rows_override {
        config.room.rows = rows;
    }
    let room = config.build_room()?;
    info!(
        name = %config.room.name,
        rows = room.row_count(),
        capacity = room.capacity(),
        available = room.count_available_seats(),
        "room ready"
    );
    Ok(room)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
