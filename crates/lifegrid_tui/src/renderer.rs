//! Change-tracked cell painter.
//!
//! The first frame paints every cell; later frames repaint only the cells a
//! `ChangeSet` names, reading their colors from the current grid.

use lifegrid_core::{ChangeSet, Grid, GridConfig, PaletteConfig, Rgb};

use crate::surface::RenderSurface;

/// Inset of a cell fill from each side of its rectangle, in pixels.
pub const CELL_INSET: u32 = 1;

pub struct Renderer {
    rect_width: u32,
    rect_height: u32,
    palette: PaletteConfig,
}

impl Renderer {
    pub fn new(rect_width: u32, rect_height: u32, palette: PaletteConfig) -> Self {
        Self {
            rect_width,
            rect_height,
            palette,
        }
    }

    pub fn from_config(grid: &GridConfig, palette: &PaletteConfig) -> Self {
        Self::new(grid.rect_width, grid.rect_height, palette.clone())
    }

    pub fn palette(&self) -> &PaletteConfig {
        &self.palette
    }

    pub fn color_for(&self, alive: bool) -> Rgb {
        if alive {
            self.palette.alive
        } else {
            self.palette.dead
        }
    }

    /// Pixel origin of the cell at `(row, col)`.
    pub fn cell_origin(&self, row: usize, col: usize) -> (u32, u32) {
        (col as u32 * self.rect_width, row as u32 * self.rect_height)
    }

    fn draw_cell<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
        grid: &Grid,
        row: usize,
        col: usize,
    ) {
        let (x, y) = self.cell_origin(row, col);
        surface.fill_rect(
            x + CELL_INSET,
            y + CELL_INSET,
            self.rect_width.saturating_sub(2 * CELL_INSET),
            self.rect_height.saturating_sub(2 * CELL_INSET),
            self.color_for(grid.get(row, col)),
        );
    }

    /// Strokes every cell boundary. Independent of cell state.
    pub fn draw_grid<S: RenderSurface + ?Sized>(&self, surface: &mut S, grid: &Grid) {
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let (x, y) = self.cell_origin(row, col);
                surface.stroke_rect(
                    x,
                    y,
                    self.rect_width,
                    self.rect_height,
                    self.palette.grid_line,
                );
            }
        }
    }

    pub fn render_full<S: RenderSurface + ?Sized>(&self, surface: &mut S, grid: &Grid) {
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                self.draw_cell(surface, grid, row, col);
            }
        }
    }

    /// Repaints the cells in `changes` with their state in `grid`, which
    /// must already be the generation the changes lead to.
    pub fn render_changes<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
        grid: &Grid,
        changes: &ChangeSet,
    ) {
        for (row, col) in changes {
            self.draw_cell(surface, grid, row, col);
        }
    }

    /// First frame: grid lines, then every cell.
    pub fn create<S: RenderSurface + ?Sized>(&self, surface: &mut S, grid: &Grid) {
        self.draw_grid(surface, grid);
        self.render_full(surface, grid);
        tracing::debug!(
            width = grid.width(),
            height = grid.height(),
            "Rendered full frame"
        );
    }
}
