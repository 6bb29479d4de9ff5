//! Domain layer for cinema-cli.
//!
//! Plain data types with no I/O: the room configuration schema and the
//! commands a user can run against a room.

pub mod command;
pub mod config;

pub use command::SeatCommand;
pub use config::{ReservedRun, RoomConfig, RoomSection};
