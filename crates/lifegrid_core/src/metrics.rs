//! Generation metrics and logging setup.

use std::fs::File;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing_subscriber::EnvFilter;

/// Generations between info-level summaries.
pub const SUMMARY_INTERVAL: u64 = 100;

/// Running statistics for one simulation.
#[derive(Debug)]
pub struct Metrics {
    generation: AtomicU64,
    last_changes: AtomicU64,
    total_changes: AtomicU64,
    population: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            last_changes: AtomicU64::new(0),
            total_changes: AtomicU64::new(0),
            population: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed step.
    pub fn record_step(&self, generation: u64, changes: usize, population: usize) {
        self.generation.store(generation, Ordering::Relaxed);
        self.last_changes.store(changes as u64, Ordering::Relaxed);
        self.total_changes
            .fetch_add(changes as u64, Ordering::Relaxed);
        self.population.store(population as u64, Ordering::Relaxed);

        tracing::debug!(generation, changes, population, "Generation advanced");
        if generation.is_multiple_of(SUMMARY_INTERVAL) {
            tracing::info!(
                generation,
                population,
                changes,
                elapsed_ms = self.elapsed().as_millis() as u64,
                "Simulation summary"
            );
        }
    }

    pub fn record_population(&self, population: usize) {
        self.population.store(population as u64, Ordering::Relaxed);
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Relaxed)
    }

    /// Cells flipped by the most recent step.
    #[must_use]
    pub fn last_changes(&self) -> u64 {
        self.last_changes.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn total_changes(&self) -> u64 {
        self.total_changes.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn population(&self) -> u64 {
        self.population.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing to stderr. `RUST_LOG` overrides the `info` default.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

/// Initialize tracing into `path`, for front-ends that own the terminal.
pub fn init_file_logging<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .ok();
    Ok(())
}
