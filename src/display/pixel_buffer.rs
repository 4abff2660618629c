use crate::color::Color;
use crate::error::{Error, Result};

// ============================================================================
// Dimension
// ============================================================================

/// Width and height of a framebuffer, both strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    pub width: i32,
    pub height: i32,
}

impl Dimension {
    /// Validate a requested size. Zero or anything that overflows `i32` is rejected.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let invalid = || Error::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        let w = i32::try_from(width).map_err(|_| invalid())?;
        let h = i32::try_from(height).map_err(|_| invalid())?;
        Ok(Self {
            width: w,
            height: h,
        })
    }

    #[inline]
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Number of cells, `width * height`
    #[inline]
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// Row-major 32-bit framebuffer, origin top-left, no row padding.
///
/// Storage is private to this module: every write from the rasterizer goes
/// through [`PixelBuffer::plot`], which is the only place bounds are checked.
pub struct PixelBuffer {
    pixels: Vec<u32>,
    dim: Dimension,
}

impl PixelBuffer {
    /// Allocate a buffer of `width * height` cells, all zero.
    ///
    /// Allocation failure is reported instead of aborting so startup can
    /// exit cleanly.
    pub fn with_size(width: u32, height: u32) -> Result<Self> {
        let dim = Dimension::new(width, height)?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(dim.area())
            .map_err(|_| Error::Allocation { width, height })?;
        pixels.resize(dim.area(), 0);
        Ok(Self { pixels, dim })
    }

    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.dim.width as u32
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.dim.height as u32
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        x as usize + y as usize * self.dim.width as usize
    }

    /// Write `color` at (x, y); coordinates outside the buffer are dropped
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, color: Color) {
        if self.dim.contains(x, y) {
            let idx = self.index(x, y);
            self.pixels[idx] = color.0;
        }
    }

    /// Read a pixel (bounds checked)
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if self.dim.contains(x, y) {
            Some(Color(self.pixels[self.index(x, y)]))
        } else {
            None
        }
    }

    /// Packed pixels, row 0 first
    pub fn as_slice(&self) -> &[u32] {
        &self.pixels
    }

    /// Raw bytes for SDL texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }

    /// Bytes per row of [`as_bytes`](Self::as_bytes)
    #[inline]
    pub fn pitch(&self) -> usize {
        self.dim.width as usize * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rejects_degenerate_dimensions() {
        assert!(matches!(
            PixelBuffer::with_size(0, 10),
            Err(Error::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(PixelBuffer::with_size(10, 0).is_err());
        assert!(Dimension::new(u32::MAX, 1).is_err());
    }

    #[test]
    fn test_new_buffer_is_zeroed() {
        let buffer = PixelBuffer::with_size(8, 4).unwrap();
        assert_eq!(buffer.as_slice().len(), 32);
        assert!(buffer.as_slice().iter().all(|&p| p == 0));
        assert_eq!(buffer.as_bytes().len(), 8 * 4 * 4);
        assert_eq!(buffer.pitch(), 32);
    }

    #[test]
    fn test_plot_is_row_major() {
        let mut buffer = PixelBuffer::with_size(5, 3).unwrap();
        buffer.plot(2, 1, Color::WHITE);
        assert_eq!(buffer.as_slice()[2 + 5], Color::WHITE.0);
        assert_eq!(buffer.get_pixel(2, 1), Some(Color::WHITE));
    }

    #[test]
    fn test_plot_edges() {
        let mut buffer = PixelBuffer::with_size(4, 4).unwrap();
        buffer.plot(0, 0, Color::BOB);
        buffer.plot(3, 3, Color::BOB);
        buffer.plot(4, 0, Color::WHITE);
        buffer.plot(0, 4, Color::WHITE);
        buffer.plot(-1, 2, Color::WHITE);
        assert_eq!(buffer.get_pixel(0, 0), Some(Color::BOB));
        assert_eq!(buffer.get_pixel(3, 3), Some(Color::BOB));
        assert_eq!(buffer.get_pixel(4, 0), None);
        let written = buffer.as_slice().iter().filter(|&&p| p != 0).count();
        assert_eq!(written, 2);
    }

    proptest! {
        #[test]
        fn plot_writes_inside_and_ignores_outside(
            x in -50i32..50,
            y in -50i32..50,
            color in 1u32..=u32::MAX,
        ) {
            let mut buffer = PixelBuffer::with_size(20, 15).unwrap();
            let before = buffer.as_slice().to_vec();
            buffer.plot(x, y, Color(color));

            if (0..20).contains(&x) && (0..15).contains(&y) {
                prop_assert_eq!(buffer.get_pixel(x, y), Some(Color(color)));
                let changed = buffer
                    .as_slice()
                    .iter()
                    .zip(&before)
                    .filter(|(a, b)| a != b)
                    .count();
                prop_assert_eq!(changed, 1);
            } else {
                prop_assert_eq!(buffer.as_slice(), &before[..]);
            }
        }
    }
}
