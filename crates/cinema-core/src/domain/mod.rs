//! Domain entities for cinema seating.
//!
//! This module contains pure business logic with no infrastructure
//! dependencies: no file access, no terminal output, no configuration.
//! Everything here can be compiled and tested in isolation.

/// A single seat and its identity.
pub mod seat;

/// The room: a ragged grid of seats with availability queries.
///
/// See [`room::Room`] for the main type.
pub mod room;
