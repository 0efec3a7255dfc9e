use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::layout::Rect;
use std::path::Path;
use std::time::Instant;

use lifegrid_core::{AppConfig, Grid, Simulation};
use lifegrid_tui::{PixelBuffer, Renderer, SurfaceWidget};

use crate::app::scheduler::Scheduler;

pub struct App {
    pub running: bool,
    pub config: AppConfig,
    pub sim: Simulation,
    pub renderer: Renderer,
    pub surface: PixelBuffer,
    pub scheduler: Scheduler,
    /// Cells flipped by the last tick, for the status line.
    pub last_changes: usize,
}

impl App {
    /// Reads `path` if it exists. An unreadable or invalid file is reported
    /// and replaced by defaults; a missing file is created with defaults.
    pub fn load_config<P: AsRef<Path>>(path: P) -> AppConfig {
        let path = path.as_ref();
        if path.exists() {
            match AppConfig::load(path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded config");
                    return config;
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Falling back to default config"
                    );
                    eprintln!("Warning: Failed to load {}: {}", path.display(), e);
                    return AppConfig::default();
                }
            }
        }

        let default = AppConfig::default();
        if let Ok(toml_str) = default.to_toml() {
            if std::fs::write(path, toml_str).is_ok() {
                tracing::info!(path = %path.display(), "Wrote default config");
            }
        }
        default
    }

    /// Validates `config`, seeds the grid and paints the first frame.
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate().context("invalid configuration")?;
        let sim = Simulation::from_config(&config.grid)?;
        let renderer = Renderer::from_config(&config.grid, &config.palette);
        let mut surface =
            PixelBuffer::new(config.grid.surface_width, config.grid.surface_height);
        renderer.create(&mut surface, sim.grid());

        let scheduler = Scheduler::new(
            config.schedule.tick_interval(),
            config.schedule.start_paused,
        );

        tracing::info!(
            fingerprint = %config.fingerprint(),
            width = sim.grid().width(),
            height = sim.grid().height(),
            "App initialised"
        );

        Ok(Self {
            running: true,
            config,
            sim,
            renderer,
            surface,
            scheduler,
            last_changes: 0,
        })
    }

    /// Splits the terminal into the status line and the world view.
    pub fn layout(area: Rect) -> (Rect, Rect) {
        let status = Rect::new(area.x, area.y, area.width, area.height.min(1));
        let world = Rect::new(
            area.x,
            area.y + status.height,
            area.width,
            area.height - status.height,
        );
        (status, world)
    }

    /// Sets the surface size to what the world view of `area` can show.
    pub fn fit_to_terminal(config: &mut AppConfig, area: Rect) {
        let (_, world) = Self::layout(area);
        let (width, height) = SurfaceWidget::surface_size(world, true);
        config.grid.surface_width = width;
        config.grid.surface_height = height;
    }

    /// One scheduled step: advance, then repaint what changed.
    pub fn tick(&mut self) {
        self.last_changes = self.sim.advance();
        let changes = self.sim.take_changes();
        self.renderer
            .render_changes(&mut self.surface, self.sim.grid(), &changes);
    }

    pub fn toggle_pause(&mut self) {
        self.scheduler.toggle(Instant::now());
    }

    /// Advances a single generation while paused.
    pub fn step_once(&mut self) {
        if !self.scheduler.is_running() {
            self.tick();
        }
    }

    /// Replaces the grid with a fresh uniform random one of the same size.
    pub fn reseed(&mut self) -> Result<()> {
        let grid = self.sim.grid();
        let mut rng = ChaCha8Rng::from_entropy();
        let next = Grid::random(
            grid.width(),
            grid.height(),
            self.config.grid.live_probability,
            &mut rng,
        )?;
        self.sim.reset(next);
        self.last_changes = 0;
        self.renderer.render_full(&mut self.surface, self.sim.grid());
        tracing::info!(population = self.sim.population(), "Reseeded grid");
        Ok(())
    }
}
