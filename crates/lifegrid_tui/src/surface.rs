//! Raster targets the renderer paints onto.

use lifegrid_core::Rgb;

/// A fixed-size pixel canvas. Write-only from the renderer's point of view.
pub trait RenderSurface {
    /// `(width, height)` in pixels.
    fn size(&self) -> (u32, u32);

    /// Fills the `w × h` rectangle at `(x, y)`. Parts outside the surface
    /// are clipped.
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb);

    /// Draws the 1-pixel outline of the `w × h` rectangle at `(x, y)`.
    fn stroke_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb);
}

/// In-memory RGB raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgb::BLACK)
    }

    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize) + x as usize
    }

    /// Color at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl RenderSurface for PixelBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for py in y.min(y_end)..y_end {
            let start = self.index(x.min(x_end), py);
            let end = self.index(x_end, py);
            self.pixels[start..end].fill(color);
        }
    }

    fn stroke_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        if w == 0 || h == 0 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        self.fill_rect(x, y, w, 1, color);
        self.fill_rect(x, bottom, w, 1, color);
        self.fill_rect(x, y, 1, h, color);
        self.fill_rect(right, y, 1, h, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb(255, 0, 0);

    #[test]
    fn test_fill_rect() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.fill_rect(1, 1, 2, 2, RED);
        assert_eq!(buf.pixel(1, 1), Some(RED));
        assert_eq!(buf.pixel(2, 2), Some(RED));
        assert_eq!(buf.pixel(0, 0), Some(Rgb::BLACK));
        assert_eq!(buf.pixel(3, 3), Some(Rgb::BLACK));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.fill_rect(3, 3, 10, 10, RED);
        assert_eq!(buf.pixel(3, 3), Some(RED));
        assert_eq!(buf.pixel(2, 3), Some(Rgb::BLACK));
        buf.fill_rect(9, 9, 2, 2, RED);
        assert_eq!(buf.pixel(4, 4), None);
    }

    #[test]
    fn test_zero_sized_fill_is_noop() {
        let mut buf = PixelBuffer::new(3, 3);
        let before = buf.clone();
        buf.fill_rect(1, 1, 0, 2, RED);
        buf.fill_rect(1, 1, 2, 0, RED);
        assert_eq!(buf, before);
    }

    #[test]
    fn test_stroke_rect_outline_only() {
        let mut buf = PixelBuffer::new(5, 5);
        buf.stroke_rect(0, 0, 5, 5, RED);
        assert_eq!(buf.pixel(0, 0), Some(RED));
        assert_eq!(buf.pixel(4, 0), Some(RED));
        assert_eq!(buf.pixel(0, 4), Some(RED));
        assert_eq!(buf.pixel(4, 4), Some(RED));
        assert_eq!(buf.pixel(2, 2), Some(Rgb::BLACK));
    }
}
