//! # lifegrid Core
//!
//! Conway's Game of Life (B3/S23) on a toroidal grid, with per-generation
//! change tracking for minimal redraws.
//!
//! This crate contains:
//! - The grid model and wrap-around neighbor lookup
//! - The transition rule and the `Simulation` engine that owns the grid
//! - Configuration, errors, metrics and logging setup
//!
//! ## Example
//!
//! ```
//! use lifegrid_core::{Grid, Simulation};
//!
//! let blinker = Grid::parse(
//!     "
//!     .....
//!     .....
//!     .###.
//!     .....
//!     .....
//!     ",
//! )
//! .unwrap();
//!
//! let mut sim = Simulation::new(blinker);
//! assert_eq!(sim.advance(), 4);
//! let changes = sim.take_changes();
//! assert!(changes.contains(1, 2));
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Transition rule, change sets and the simulation engine
pub mod engine;
/// Error types
pub mod error;
/// Toroidal grid and neighbor lookup
pub mod grid;
/// Generation metrics and structured logging
pub mod metrics;

pub use config::{
    AppConfig, GridConfig, PaletteConfig, Rgb, ScheduleConfig, MAX_SURFACE_SIDE,
};
pub use engine::{next_state, step, ChangeSet, Simulation};
pub use error::{LifeError, Result};
pub use grid::{wrap, Grid, NEIGHBOR_OFFSETS};
pub use metrics::{init_file_logging, init_logging, Metrics};
