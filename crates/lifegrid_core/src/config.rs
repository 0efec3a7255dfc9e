//! Configuration management for the simulation and its front-ends.
//!
//! Strongly-typed structures mapping to `config.toml`. Every field has a
//! default, so a file only needs the values it overrides.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [grid]
//! rect_width = 10
//! rect_height = 10
//! surface_width = 800
//! surface_height = 600
//! live_probability = 0.2
//! seed = 42
//!
//! [palette]
//! alive = [0, 0, 0]
//! dead = [255, 255, 255]
//! grid_line = [0, 104, 139]
//!
//! [schedule]
//! tick_interval_ms = 100
//! start_paused = false
//! ```

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;
use std::time::Duration;

use crate::error::{LifeError, Result};

/// Largest accepted surface side, in pixels.
pub const MAX_SURFACE_SIDE: u32 = 16_384;

/// An opaque RGB color, `[r, g, b]` in TOML.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// Cell geometry, surface size and seeding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    /// Pixel width of one cell.
    pub rect_width: u32,
    /// Pixel height of one cell.
    pub rect_height: u32,
    /// Pixel width of the render surface. The terminal front-end replaces
    /// this with the size of the terminal.
    pub surface_width: u32,
    pub surface_height: u32,
    /// Chance that a cell starts alive.
    pub live_probability: f64,
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rect_width: 10,
            rect_height: 10,
            surface_width: 800,
            surface_height: 600,
            live_probability: 0.2,
            seed: None,
        }
    }
}

impl GridConfig {
    /// `(columns, rows)` the surface partitions into, rounding partial
    /// cells at the right and bottom edges up.
    pub fn cell_counts(&self) -> Result<(usize, usize)> {
        if self.rect_width == 0 || self.rect_height == 0 {
            return Err(LifeError::InvalidCellSize {
                width: self.rect_width,
                height: self.rect_height,
            });
        }
        if self.surface_width > MAX_SURFACE_SIDE || self.surface_height > MAX_SURFACE_SIDE {
            return Err(LifeError::SurfaceTooLarge {
                width: self.surface_width,
                height: self.surface_height,
                max: MAX_SURFACE_SIDE,
            });
        }
        let cols = self.surface_width.div_ceil(self.rect_width);
        let rows = self.surface_height.div_ceil(self.rect_height);
        if cols == 0 || rows == 0 {
            return Err(LifeError::EmptySurface {
                width: self.surface_width,
                height: self.surface_height,
            });
        }
        Ok((cols as usize, rows as usize))
    }
}

/// Fill and stroke colors.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PaletteConfig {
    pub alive: Rgb,
    pub dead: Rgb,
    pub grid_line: Rgb,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            alive: Rgb::BLACK,
            dead: Rgb::WHITE,
            grid_line: Rgb(0x00, 0x68, 0x8B),
        }
    }
}

/// Tick cadence for the interactive front-end.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ScheduleConfig {
    pub tick_interval_ms: u64,
    pub start_paused: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            start_paused: false,
        }
    }
}

impl ScheduleConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub palette: PaletteConfig,
    pub schedule: ScheduleConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// # Validation Rules
    /// - Cell rectangles must have positive sides
    /// - The surface must partition into at least one row and column
    /// - Neither surface side may exceed `MAX_SURFACE_SIDE`
    /// - The live probability must be in [0.0, 1.0]
    /// - The tick interval must be positive
    pub fn validate(&self) -> Result<()> {
        self.grid.cell_counts()?;
        let p = self.grid.live_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(LifeError::InvalidProbability(p));
        }
        if self.schedule.tick_interval_ms == 0 {
            return Err(LifeError::InvalidInterval);
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| LifeError::config(e.to_string()))
    }

    /// Digest of everything that influences the simulated generations.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.grid).as_bytes());
        hex::encode(hasher.finalize())
    }
}
