//! Infrastructure layer for cinema-cli.
//!
//! Everything that touches the file system lives here.  For now that is only
//! reading the room configuration file.

pub mod config_file;

pub use config_file::{load_room, load_room_config, ConfigError};
