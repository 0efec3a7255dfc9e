use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{Block, Borders, Widget};

use lifegrid_core::Rgb;

use crate::surface::PixelBuffer;

/// Upper half block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: &str = "▀";

/// Shows a `PixelBuffer` in the terminal, two pixel rows per text row.
pub struct SurfaceWidget<'a> {
    surface: &'a PixelBuffer,
    title: Option<String>,
}

impl<'a> SurfaceWidget<'a> {
    pub fn new(surface: &'a PixelBuffer) -> Self {
        Self {
            surface,
            title: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn get_inner_area(area: Rect, bordered: bool) -> Rect {
        if bordered {
            Block::default().borders(Borders::ALL).inner(area)
        } else {
            area
        }
    }

    /// Pixel size of a surface that exactly fills `area`.
    pub fn surface_size(area: Rect, bordered: bool) -> (u32, u32) {
        let inner = Self::get_inner_area(area, bordered);
        (inner.width as u32, inner.height as u32 * 2)
    }

    pub fn color(rgb: Rgb) -> Color {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

impl<'a> Widget for SurfaceWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bordered = self.title.is_some();
        if let Some(title) = &self.title {
            Block::default()
                .title(title.as_str())
                .borders(Borders::ALL)
                .render(area, buf);
        }

        let inner = Self::get_inner_area(area, bordered);
        let end_x = (inner.width as u32).min(self.surface.width());
        let end_y = (inner.height as u32).min(self.surface.height().div_ceil(2));

        for y in 0..end_y {
            for x in 0..end_x {
                let top = self.surface.pixel(x, y * 2);
                let bottom = self.surface.pixel(x, y * 2 + 1);
                let cell = &mut buf[(inner.x + x as u16, inner.y + y as u16)];
                cell.set_symbol(HALF_BLOCK);
                if let Some(top) = top {
                    cell.set_fg(Self::color(top));
                }
                match bottom {
                    Some(bottom) => cell.set_bg(Self::color(bottom)),
                    None => cell.set_bg(Color::Reset),
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RenderSurface;

    #[test]
    fn test_surface_size_doubles_rows() {
        let area = Rect::new(0, 0, 40, 12);
        assert_eq!(SurfaceWidget::surface_size(area, false), (40, 24));
        assert_eq!(SurfaceWidget::surface_size(area, true), (38, 20));
    }

    #[test]
    fn test_half_block_colors() {
        let mut surface = PixelBuffer::new(2, 2);
        surface.fill_rect(0, 0, 2, 1, Rgb(255, 0, 0));
        surface.fill_rect(0, 1, 2, 1, Rgb(0, 0, 255));

        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        SurfaceWidget::new(&surface).render(area, &mut buf);

        let cell = &buf[(1, 0)];
        assert_eq!(cell.symbol(), HALF_BLOCK);
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_odd_height_leaves_bottom_unset() {
        let surface = PixelBuffer::filled(1, 3, Rgb(10, 20, 30));
        let area = Rect::new(0, 0, 1, 2);
        let mut buf = Buffer::empty(area);
        SurfaceWidget::new(&surface).render(area, &mut buf);

        assert_eq!(buf[(0, 1)].fg, Color::Rgb(10, 20, 30));
        assert_eq!(buf[(0, 1)].bg, Color::Reset);
    }

    #[test]
    fn test_titled_widget_draws_inside_border() {
        let surface = PixelBuffer::filled(4, 4, Rgb(1, 2, 3));
        let area = Rect::new(0, 0, 6, 4);
        let mut buf = Buffer::empty(area);
        SurfaceWidget::new(&surface).title("Life").render(area, &mut buf);

        assert_ne!(buf[(0, 0)].symbol(), HALF_BLOCK);
        assert_eq!(buf[(1, 1)].symbol(), HALF_BLOCK);
    }
}
