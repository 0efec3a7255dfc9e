use lifegrid_core::{Grid, Simulation};
use lifegrid_tui::{PixelBuffer, Renderer};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[allow(dead_code)]
pub struct GridBuilder {
    width: usize,
    height: usize,
    live: Vec<(usize, usize)>,
    random: Option<(u64, f64)>,
}

#[allow(dead_code)]
impl GridBuilder {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            live: Vec::new(),
            random: None,
        }
    }

    /// Marks `(row, col)` alive.
    pub fn with_cell(mut self, row: usize, col: usize) -> Self {
        self.live.push((row, col));
        self
    }

    pub fn with_cells(mut self, cells: &[(usize, usize)]) -> Self {
        self.live.extend_from_slice(cells);
        self
    }

    /// Places `pattern` (in `Grid::parse` notation) with its top-left at
    /// `(row, col)`, wrapping at the edges.
    pub fn with_pattern(mut self, row: usize, col: usize, pattern: &str) -> Self {
        let shape = Grid::parse(pattern).expect("Invalid pattern");
        for (r, c) in shape.iter_live() {
            self.live
                .push(((row + r) % self.height, (col + c) % self.width));
        }
        self
    }

    pub fn with_random(mut self, seed: u64, probability: f64) -> Self {
        self.random = Some((seed, probability));
        self
    }

    pub fn build(self) -> Grid {
        let mut grid = match self.random {
            Some((seed, p)) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                Grid::random(self.width, self.height, p, &mut rng).expect("Failed to build grid")
            }
            None => Grid::dead(self.width, self.height).expect("Failed to build grid"),
        };
        for (row, col) in self.live {
            grid.set(row, col, true);
        }
        grid
    }

    pub fn build_simulation(self) -> Simulation {
        Simulation::new(self.build())
    }
}

/// Renderer with 10x10 cells and the default palette.
#[allow(dead_code)]
pub fn default_renderer() -> Renderer {
    Renderer::new(10, 10, Default::default())
}

/// Surface exactly covering `grid` at 10x10 pixels per cell.
#[allow(dead_code)]
pub fn surface_for(grid: &Grid) -> PixelBuffer {
    PixelBuffer::new(grid.width() as u32 * 10, grid.height() as u32 * 10)
}
