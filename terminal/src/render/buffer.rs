use common::{Color, DrawTarget, Mount, RenderError};
use std::collections::TryReserveError;
use tracing::{error, warn};

/// In-memory RGB raster that a surface can draw onto.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    fill: Color,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
            fill: Color::BLACK,
        }
    }

    /// Like [`PixelBuffer::new`], but fails instead of aborting when the
    /// raster cannot be allocated.
    pub fn try_new(width: u32, height: u32) -> Result<Self, TryReserveError> {
        let len = (width as usize).saturating_mul(height as usize);
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len)?;
        pixels.resize(len, Color::BLACK);
        Ok(Self {
            width,
            height,
            pixels,
            fill: Color::BLACK,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

impl DrawTarget for PixelBuffer {
    /// Unparseable colors are ignored and the previous fill is kept, as a
    /// canvas does with an invalid `fillStyle`.
    fn set_fill_color(&mut self, color: &str) {
        match color.parse::<Color>() {
            Ok(parsed) => self.fill = parsed,
            Err(err) => warn!("Ignoring fill color {:?}: {}", color, err),
        }
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        if x >= x_end {
            return;
        }
        let row_len = self.width as usize;

        for py in y..y_end {
            let row = py as usize * row_len;
            self.pixels[row + x as usize..row + x_end as usize].fill(self.fill);
        }
    }

    // Resizing clears, like a canvas
    fn resize(&mut self, width: u32, height: u32) {
        *self = Self::try_new(width, height).unwrap_or_else(|err| {
            error!("Cannot allocate {}x{} raster: {}", width, height, err);
            Self::new(0, 0)
        });
    }
}

/// Hands out [`PixelBuffer`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct BufferMount;

impl Mount for BufferMount {
    type Target = PixelBuffer;

    fn create_target(&mut self, width: u32, height: u32) -> common::Result<PixelBuffer> {
        PixelBuffer::try_new(width, height).map_err(|err| {
            RenderError::TargetUnavailable(format!("{}x{} raster: {}", width, height, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_clips_at_edges() {
        let mut buffer = PixelBuffer::new(4, 3);
        buffer.set_fill_color("rgb(255 255 255)");
        buffer.fill_rect(2, 1, 10, 10);

        assert_eq!(buffer.pixel(1, 1), Some(Color::BLACK));
        assert_eq!(buffer.pixel(2, 1), Some(Color::WHITE));
        assert_eq!(buffer.pixel(3, 2), Some(Color::WHITE));
        assert_eq!(buffer.pixel(2, 0), Some(Color::BLACK));
        assert_eq!(buffer.pixel(4, 0), None);
    }

    #[test]
    fn test_fill_rect_outside_is_noop() {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.set_fill_color("rgb(255 255 255)");
        buffer.fill_rect(5, 5, 2, 2);
        buffer.fill_rect(u32::MAX, 0, 2, 2);
        assert!((0..2).all(|x| (0..2).all(|y| buffer.pixel(x, y) == Some(Color::BLACK))));
    }

    #[test]
    fn test_invalid_fill_color_keeps_previous() {
        let mut buffer = PixelBuffer::new(1, 1);
        buffer.set_fill_color("rgb(1 2 3)");
        buffer.set_fill_color("not a color");
        buffer.fill_rect(0, 0, 1, 1);
        assert_eq!(buffer.pixel(0, 0), Some(Color::rgb(1, 2, 3)));
    }

    #[test]
    fn test_oversized_raster_is_unavailable() {
        let result = BufferMount.create_target(u32::MAX, u32::MAX);
        assert!(matches!(result, Err(RenderError::TargetUnavailable(_))));
    }

    #[test]
    fn test_oversized_resize_leaves_empty_buffer() {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.resize(u32::MAX, u32::MAX);
        assert_eq!(buffer.width(), 0);
        assert_eq!(buffer.pixel(0, 0), None);
        buffer.fill_rect(0, 0, 1, 1);
    }

    #[test]
    fn test_resize_clears() {
        let mut buffer = PixelBuffer::new(1, 1);
        buffer.set_fill_color("rgb(255 255 255)");
        buffer.fill_rect(0, 0, 1, 1);
        buffer.resize(3, 2);
        assert_eq!(buffer.width(), 3);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.pixel(0, 0), Some(Color::BLACK));
    }
}
