//! Error types for lifegrid_core.
//!
//! Every failure the core can report happens while a simulation is being
//! set up. Once a `Simulation` exists, stepping it cannot fail.

use thiserror::Error;

/// Main error type for lifegrid_core operations.
#[derive(Error, Debug)]
pub enum LifeError {
    /// Cell rectangle with a zero side
    #[error("Invalid cell size: {width}x{height} pixels (both sides must be positive)")]
    InvalidCellSize { width: u32, height: u32 },

    /// Surface that partitions into zero rows or columns
    #[error("Surface {width}x{height} yields no cells")]
    EmptySurface { width: u32, height: u32 },

    /// Surface with a side beyond `MAX_SURFACE_SIDE`
    #[error("Surface {width}x{height} exceeds the {max}-pixel side limit")]
    SurfaceTooLarge { width: u32, height: u32, max: u32 },

    /// Initial live probability outside [0.0, 1.0]
    #[error("Live probability must be in [0.0, 1.0], got {0}")]
    InvalidProbability(f64),

    /// Scheduler cadence of zero
    #[error("Tick interval must be positive")]
    InvalidInterval,

    /// Rows of differing length, or no rows at all
    #[error("Malformed grid: {0}")]
    MalformedGrid(String),

    /// TOML parsing errors
    #[error("Config error: {0}")]
    Config(String),

    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),
}

/// Result type alias for lifegrid_core operations.
pub type Result<T> = std::result::Result<T, LifeError>;

impl LifeError {
    /// Creates a new malformed grid error.
    #[must_use]
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Self::MalformedGrid(msg.into())
    }

    /// Creates a new config error.
    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

impl From<toml::de::Error> for LifeError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
