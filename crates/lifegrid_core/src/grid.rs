//! Toroidal cell grid and wrap-around neighbor lookup.

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::error::{LifeError, Result};

/// The eight neighbor directions as `(d_row, d_col)` offsets.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Moves `index` by `delta` (one of -1, 0, 1) along an axis of length `len`,
/// wrapping past either edge onto the opposite one.
#[inline(always)]
pub fn wrap(index: usize, delta: isize, len: usize) -> usize {
    match delta {
        -1 if index == 0 => len - 1,
        -1 => index - 1,
        1 if index + 1 == len => 0,
        1 => index + 1,
        _ => index,
    }
}

/// One generation of cell states, indexed `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<bool>>,
}

impl Grid {
    /// All-dead grid.
    pub fn dead(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::malformed(format!(
                "grid must have at least one row and column, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            cells: vec![vec![false; width]; height],
        })
    }

    /// Each cell independently alive with probability `p`.
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        p: f64,
        rng: &mut R,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(LifeError::InvalidProbability(p));
        }
        let mut grid = Self::dead(width, height)?;
        for row in grid.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = rng.gen_bool(p);
            }
        }
        Ok(grid)
    }

    /// Builds a grid from explicit rows; every row must have the same,
    /// non-zero length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(LifeError::malformed("grid must not be empty"));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(LifeError::malformed(format!(
                "row {i} has {} cells, expected {width}",
                row.len()
            )));
        }
        Ok(Self {
            width,
            height,
            cells: rows,
        })
    }

    /// Wraps rows already known to be `height` rows of `width` cells.
    pub(crate) fn from_raw(width: usize, height: usize, cells: Vec<Vec<bool>>) -> Self {
        debug_assert!(cells.len() == height && cells.iter().all(|r| r.len() == width));
        Self {
            width,
            height,
            cells,
        }
    }

    /// Parses rows of `#`/`O` (alive) and `.` (dead). Whitespace-only lines
    /// are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        '#' | 'O' => Ok(true),
                        '.' => Ok(false),
                        other => Err(LifeError::malformed(format!(
                            "unexpected character {other:?}"
                        ))),
                    })
                    .collect::<Result<Vec<bool>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[row][col] = alive;
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// Coordinates of the neighbor in direction `(d_row, d_col)`. The
    /// vertical wrap is applied first, then the horizontal one.
    #[inline(always)]
    pub fn neighbor(&self, row: usize, col: usize, d_row: isize, d_col: isize) -> (usize, usize) {
        let r = wrap(row, d_row, self.height);
        (r, wrap(col, d_col, self.width))
    }

    /// All eight wrapped neighbor coordinates of `(row, col)`. On grids
    /// narrower than three cells some of them coincide, or alias the cell
    /// itself.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dr, dc)| self.neighbor(row, col, dr, dc))
    }

    /// Number of alive cells among the eight wrapped neighbors.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        debug_assert!(
            row < self.height && col < self.width,
            "({row}, {col}) outside {}x{} grid",
            self.height,
            self.width
        );
        self.neighbors(row, col)
            .filter(|&(r, c)| self.cells[r][c])
            .count() as u8
    }

    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&alive| alive).count())
            .sum()
    }

    /// Alive cells in row-major order.
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &alive)| alive)
                .map(move |(c, _)| (r, c))
        })
    }

    /// SHA-256 over the dimensions and cell states, hex-encoded.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.width as u64).to_le_bytes());
        hasher.update((self.height as u64).to_le_bytes());
        for row in &self.cells {
            let bytes: Vec<u8> = row.iter().map(|&alive| alive as u8).collect();
            hasher.update(&bytes);
        }
        hex::encode(hasher.finalize())
    }
}
