//! Room configuration types.
//!
//! [`RoomConfig`] describes the shape of the room and any runs of seats that
//! are already occupied when the program starts.  It is a plain data struct;
//! reading it from disk is the infrastructure layer's job.
//!
//! ```toml
//! [room]
//! name = "Sala 1"
//! rows = [10, 12, 12, 14]
//!
//! [[reserved]]
//! row = 0
//! seat = 2
//! amount = 3
//! ```

use cinema_core::{Room, RoomError, SeatPosition};
use serde::{Deserialize, Serialize};

/// Top-level room configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RoomConfig {
    #[serde(default)]
    pub room: RoomSection,
    /// Runs that start out taken.
    #[serde(default)]
    pub reserved: Vec<ReservedRun>,
}

/// Name and shape of the room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomSection {
    /// Display name, only used in log output.
    #[serde(default = "default_name")]
    pub name: String,
    /// Seats per row, front row first.
    #[serde(default)]
    pub rows: Vec<usize>,
}

/// A run of `amount` seats starting at `row`/`seat` that is taken at startup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReservedRun {
    pub row: usize,
    pub seat: usize,
    #[serde(default = "default_amount")]
    pub amount: usize,
}

impl ReservedRun {
    /// Position of the first seat in the run.
    pub fn start(&self) -> SeatPosition {
        SeatPosition::new(self.row, self.seat)
    }
}

fn default_name() -> String {
    "Room".to_string()
}
fn default_amount() -> usize {
    1
}

impl Default for RoomSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            rows: Vec::new(),
        }
    }
}

impl RoomConfig {
    /// Builds the room and takes every reserved run.
    ///
    /// # Errors
    ///
    /// Returns the first [`RoomError`] raised by a reserved run that does not
    /// fit the configured rows.
    pub fn build_room(&self) -> Result<Room, RoomError> {
        let mut room = Room::new(&self.room.rows);
        for run in &self.reserved {
            room.take_seats(run.start(), run.amount)?;
        }
        Ok(room)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_rows_and_no_reservations() {
        let cfg = RoomConfig::default();
        assert!(cfg.room.rows.is_empty());
        assert!(cfg.reserved.is_empty());
        assert_eq!(cfg.room.name, "Room");
    }

    #[test]
    fn test_deserialize_full_toml() {
        // Arrange
        let toml_str = r#"
            [room]
            name = "Sala 1"
            rows = [3, 0, 2]

            [[reserved]]
            row = 0
            seat = 1
            amount = 2
        "#;

        // Act
        let cfg: RoomConfig = toml::from_str(toml_str).unwrap();

        // Assert
        assert_eq!(cfg.room.name, "Sala 1");
        assert_eq!(cfg.room.rows, vec![3, 0, 2]);
        assert_eq!(
            cfg.reserved,
            vec![ReservedRun {
                row: 0,
                seat: 1,
                amount: 2,
            }]
        );
    }

    #[test]
    fn test_deserialize_minimal_toml_uses_defaults() {
        let cfg: RoomConfig = toml::from_str("[room]\nrows = [4]\n").unwrap();
        assert_eq!(cfg.room.name, "Room");
        assert_eq!(cfg.room.rows, vec![4]);
        assert!(cfg.reserved.is_empty());
    }

    #[test]
    fn test_deserialize_reserved_run_defaults_to_one_seat() {
        let toml_str = "[room]\nrows = [4]\n\n[[reserved]]\nrow = 0\nseat = 3\n";
        let cfg: RoomConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.reserved[0].amount, 1);
    }

    #[test]
    fn test_deserialize_negative_row_length_is_rejected() {
        let result = toml::from_str::<RoomConfig>("[room]\nrows = [3, -1]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_serializes_and_deserializes_round_trip() {
        let cfg = RoomConfig {
            room: RoomSection {
                name: "Main".to_string(),
                rows: vec![5, 5, 6],
            },
            reserved: vec![ReservedRun {
                row: 2,
                seat: 4,
                amount: 2,
            }],
        };

        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: RoomConfig = toml::from_str(&text).unwrap();

        assert_eq!(cfg, back);
    }

    #[test]
    fn test_build_room_applies_reserved_runs() {
        let cfg = RoomConfig {
            room: RoomSection {
                name: default_name(),
                rows: vec![3, 0, 2],
            },
            reserved: vec![
                ReservedRun {
                    row: 0,
                    seat: 0,
                    amount: 2,
                },
                ReservedRun {
                    row: 2,
                    seat: 1,
                    amount: 1,
                },
            ],
        };

        let room = cfg.build_room().unwrap();

        assert_eq!(room.row_count(), 3);
        assert_eq!(room.count_available_seats(), 2);
    }

    #[test]
    fn test_build_room_rejects_reserved_run_outside_grid() {
        let cfg = RoomConfig {
            room: RoomSection {
                name: default_name(),
                rows: vec![2],
            },
            reserved: vec![ReservedRun {
                row: 1,
                seat: 0,
                amount: 1,
            }],
        };

        assert_eq!(
            cfg.build_room(),
            Err(RoomError::RowOutOfBounds { row: 1, rows: 1 })
        );
    }
}
