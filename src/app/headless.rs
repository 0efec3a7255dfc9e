//! Runs the simulation without a terminal and reports the outcome.

use anyhow::{Context, Result};
use serde::Serialize;
use std::time::Instant;

use lifegrid_core::{AppConfig, Simulation};
use lifegrid_tui::{PixelBuffer, Renderer};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RunReport {
    pub width: usize,
    pub height: usize,
    pub generations: u64,
    pub population: usize,
    pub total_changes: u64,
    pub config_fingerprint: String,
    pub grid_fingerprint: String,
    pub elapsed_ms: u64,
}

/// Advances `generations` times, repainting only changed cells after the
/// first full frame, exactly as the interactive front-end does.
pub fn run_headless(config: &AppConfig, generations: u64) -> Result<RunReport> {
    config.validate().context("invalid configuration")?;
    let mut sim = Simulation::from_config(&config.grid)?;
    let renderer = Renderer::from_config(&config.grid, &config.palette);
    let mut surface = PixelBuffer::new(config.grid.surface_width, config.grid.surface_height);

    let start = Instant::now();
    renderer.create(&mut surface, sim.grid());
    for _ in 0..generations {
        sim.advance();
        let changes = sim.take_changes();
        renderer.render_changes(&mut surface, sim.grid(), &changes);
    }

    let report = RunReport {
        width: sim.grid().width(),
        height: sim.grid().height(),
        generations: sim.generation(),
        population: sim.population(),
        total_changes: sim.metrics().total_changes(),
        config_fingerprint: config.fingerprint(),
        grid_fingerprint: sim.grid().fingerprint(),
        elapsed_ms: start.elapsed().as_millis() as u64,
    };
    tracing::info!(
        generations = report.generations,
        population = report.population,
        elapsed_ms = report.elapsed_ms,
        "Headless run finished"
    );
    Ok(report)
}
