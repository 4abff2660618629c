//! Drawing primitives
//!
//! Every routine here composes [`PixelBuffer::plot`], so clipping to the
//! buffer bounds comes for free and nothing writes storage directly.

use super::PixelBuffer;
use crate::color::Color;

impl PixelBuffer {
    /// Fill every cell with `color`
    pub fn clear(&mut self, color: Color) {
        let dim = self.dimension();
        for y in 0..dim.height {
            for x in 0..dim.width {
                self.plot(x, y, color);
            }
        }
    }

    /// Draw a line with a parametric DDA.
    ///
    /// Samples `steps + 1` points where `steps = max(|dx|, |dy|)`; sample `i`
    /// sits at `start + delta * i / steps`. Positions are truncated toward
    /// zero, so A->B and B->A can differ by a pixel. A zero-length line plots
    /// its single point.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let dx = i64::from(x1) - i64::from(x0);
        let dy = i64::from(y1) - i64::from(y0);
        let steps = dx.abs().max(dy.abs());

        if steps == 0 {
            self.plot(x0, y0, color);
            return;
        }

        // Scaling by i before dividing lands the last sample exactly on (x1, y1)
        let (sx, sy) = (f64::from(x0), f64::from(y0));
        let (fdx, fdy, fsteps) = (dx as f64, dy as f64, steps as f64);
        for i in 0..=steps {
            let t = i as f64;
            let x = sx + fdx * t / fsteps;
            let y = sy + fdy * t / fsteps;
            self.plot(x as i32, y as i32, color);
        }
    }

    /// Draw a filled disk: every (cx+i, cy+j) with i² + j² <= radius².
    ///
    /// Brute force over the bounding square, O(radius²). Negative radius draws
    /// nothing.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        if radius < 0 {
            return;
        }
        let r2 = i64::from(radius) * i64::from(radius);
        for j in -radius..=radius {
            for i in -radius..=radius {
                let d2 = i64::from(i) * i64::from(i) + i64::from(j) * i64::from(j);
                if d2 <= r2 {
                    self.plot(cx.saturating_add(i), cy.saturating_add(j), color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const C: Color = Color::WHITE;

    fn buffer(w: u32, h: u32) -> PixelBuffer {
        PixelBuffer::with_size(w, h).unwrap()
    }

    fn lit(buffer: &PixelBuffer) -> Vec<(i32, i32)> {
        let dim = buffer.dimension();
        let mut out = Vec::new();
        for y in 0..dim.height {
            for x in 0..dim.width {
                if buffer.get_pixel(x, y) != Some(Color::BLACK) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_clear_sets_every_cell() {
        let mut buf = buffer(17, 9);
        buf.plot(3, 3, Color::BOB);
        buf.clear(Color(0x00123456));
        assert!(buf.as_slice().iter().all(|&p| p == 0x00123456));
    }

    #[test]
    fn test_line_zero_length_plots_one_point() {
        let mut buf = buffer(10, 10);
        buf.line(4, 6, 4, 6, C);
        assert_eq!(lit(&buf), vec![(4, 6)]);
    }

    #[test]
    fn test_line_zero_length_out_of_bounds_is_clipped() {
        let mut buf = buffer(10, 10);
        buf.line(-3, 20, -3, 20, C);
        assert!(lit(&buf).is_empty());
    }

    #[test]
    fn test_line_horizontal_covers_endpoints() {
        let mut buf = buffer(10, 3);
        buf.line(1, 1, 8, 1, C);
        let expected: Vec<_> = (1..=8).map(|x| (x, 1)).collect();
        assert_eq!(lit(&buf), expected);
    }

    #[test]
    fn test_line_diagonal() {
        let mut buf = buffer(6, 6);
        buf.line(0, 0, 5, 5, C);
        let expected: Vec<_> = (0..6).map(|i| (i, i)).collect();
        assert_eq!(lit(&buf), expected);
    }

    #[test]
    fn test_line_plots_steps_plus_one_samples() {
        // dx = 6, dy = 3: the major axis gets one pixel per column
        let mut buf = buffer(10, 10);
        buf.line(1, 2, 7, 5, C);
        let pixels = lit(&buf);
        assert_eq!(pixels.len(), 7);
        assert!(pixels.contains(&(1, 2)));
        assert!(pixels.contains(&(7, 5)));
        for x in 1..=7 {
            assert_eq!(pixels.iter().filter(|p| p.0 == x).count(), 1);
        }
    }

    #[test]
    fn test_line_truncates_toward_zero() {
        // y is 0.75 at x = 3; truncation keeps it on row 0 where rounding
        // would already have moved to row 1
        let mut buf = buffer(10, 10);
        buf.line(0, 0, 4, 1, C);
        assert_eq!(lit(&buf), vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 1)]);
    }

    #[test]
    fn test_line_partially_offscreen_is_clipped() {
        let mut buf = buffer(5, 5);
        buf.line(-5, 2, 9, 2, C);
        let expected: Vec<_> = (0..5).map(|x| (x, 2)).collect();
        assert_eq!(lit(&buf), expected);
    }

    #[test]
    fn test_fill_circle_radius_zero_is_center() {
        let mut buf = buffer(5, 5);
        buf.fill_circle(2, 2, 0, C);
        assert_eq!(lit(&buf), vec![(2, 2)]);
    }

    #[test]
    fn test_fill_circle_negative_radius_draws_nothing() {
        let mut buf = buffer(5, 5);
        buf.fill_circle(2, 2, -3, C);
        assert!(lit(&buf).is_empty());
    }

    #[test]
    fn test_fill_circle_radius_one_is_plus_shape() {
        let mut buf = buffer(5, 5);
        buf.fill_circle(2, 2, 1, C);
        assert_eq!(lit(&buf), vec![(2, 1), (1, 2), (2, 2), (3, 2), (2, 3)]);
    }

    #[test]
    fn test_fill_circle_clipped_at_corner() {
        let mut buf = buffer(20, 20);
        buf.fill_circle(0, 0, 15, Color::BOB);
        // Only the quadrant inside the buffer survives
        let count = lit(&buf).len();
        let mut expected = 0;
        for j in 0..=15 {
            for i in 0..=15 {
                if i * i + j * j <= 225 {
                    expected += 1;
                }
            }
        }
        assert_eq!(count, expected);
    }

    proptest! {
        #[test]
        fn fill_circle_sets_exactly_the_disk(
            cx in -5i32..25,
            cy in -5i32..25,
            r in 0i32..12,
        ) {
            let mut buf = buffer(20, 20);
            buf.fill_circle(cx, cy, r, C);
            for y in 0..20 {
                for x in 0..20 {
                    let (i, j) = (x - cx, y - cy);
                    let inside = i * i + j * j <= r * r;
                    let set = buf.get_pixel(x, y) == Some(C);
                    prop_assert_eq!(inside, set, "pixel ({}, {})", x, y);
                }
            }
        }

        #[test]
        fn line_always_hits_both_endpoints(
            x0 in 0i32..30, y0 in 0i32..30,
            x1 in 0i32..30, y1 in 0i32..30,
        ) {
            let mut buf = buffer(30, 30);
            buf.line(x0, y0, x1, y1, C);
            prop_assert_eq!(buf.get_pixel(x0, y0), Some(C));
            prop_assert_eq!(buf.get_pixel(x1, y1), Some(C));
        }
    }
}
