//! B3/S23 transition and change tracking.
//!
//! A step never mutates the grid it reads from: the next generation is
//! computed into a fresh buffer, so every cell sees generation N only.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::GridConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::metrics::Metrics;

/// Cells whose state flipped, in row-major scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    cells: Vec<(usize, usize)>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: usize, col: usize) {
        self.cells.push((row, col));
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().copied()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Moves every entry of `other` to the end of this set.
    pub fn append(&mut self, other: &mut ChangeSet) {
        self.cells.append(&mut other.cells);
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = (usize, usize);
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, (usize, usize)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter().copied()
    }
}

/// Next state of a single cell under B3/S23.
#[inline(always)]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Computes the next generation of `grid` and the cells that flipped.
pub fn step(grid: &Grid) -> (Grid, ChangeSet) {
    let mut changes = ChangeSet::new();
    let rows: Vec<Vec<bool>> = (0..grid.height())
        .map(|row| {
            (0..grid.width())
                .map(|col| {
                    let alive = grid.get(row, col);
                    let next = next_state(alive, grid.neighbor_count(row, col));
                    if next != alive {
                        changes.push(row, col);
                    }
                    next
                })
                .collect()
        })
        .collect();

    (Grid::from_raw(grid.width(), grid.height(), rows), changes)
}

/// Owns the current generation and the changes not yet painted.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
    pending: ChangeSet,
    metrics: Metrics,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        let metrics = Metrics::new();
        metrics.record_population(grid.population());
        Self {
            grid,
            generation: 0,
            pending: ChangeSet::new(),
            metrics,
        }
    }

    /// Validates `config` and seeds a uniformly random grid sized to the
    /// configured surface. With no seed, the RNG is seeded from entropy.
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        let (width, height) = config.cell_counts()?;
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let grid = Grid::random(width, height, config.live_probability, &mut rng)?;
        tracing::info!(
            width,
            height,
            live_probability = config.live_probability,
            seed = ?config.seed,
            population = grid.population(),
            "Seeded grid"
        );
        Ok(Self::new(grid))
    }

    /// Replaces the grid with the next generation and queues its changes.
    /// Returns how many cells flipped in this step.
    pub fn advance(&mut self) -> usize {
        let (next, mut changes) = step(&self.grid);
        let flipped = changes.len();
        self.grid = next;
        self.generation += 1;
        self.pending.append(&mut changes);
        self.metrics
            .record_step(self.generation, flipped, self.grid.population());
        flipped
    }

    /// Hands over the queued changes, leaving the queue empty.
    pub fn take_changes(&mut self) -> ChangeSet {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> &ChangeSet {
        &self.pending
    }

    /// Swaps in a new grid (e.g. a reseed). Dimensions must match the
    /// current grid; the generation counter restarts and pending changes
    /// are dropped since the caller repaints everything.
    pub fn reset(&mut self, grid: Grid) {
        debug_assert_eq!(
            (grid.width(), grid.height()),
            (self.grid.width(), self.grid.height())
        );
        self.grid = grid;
        self.generation = 0;
        self.pending.clear();
        self.metrics = Metrics::new();
        self.metrics.record_population(self.grid.population());
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
