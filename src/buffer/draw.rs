//! Draw operations: lines, triangle outlines and circles.
//!
//! Every operation reduces to [`RasterBuffer::put`] calls, so nothing here
//! can write outside the grid.
//!
//! # Lines
//!
//! Endpoints are clamped into the grid *before* any slope is computed.
//! A segment that leaves the grid is therefore drawn between its clamped
//! endpoints, not clipped against the edges; off-screen parts bend onto
//! the border. Clipping geometrically (Cohen-Sutherland) would change this.
//!
//! After snapping both endpoints to cells the line is stepped one cell at
//! a time along its long axis while a floating-point error term collects
//! `|slope|` per step; each time it exceeds one the short axis advances.
//! The error starts at one half, which puts the first short-axis advance
//! at the midpoint and lands the last step exactly on the far endpoint.
//!
//! # Circles
//!
//! Midpoint algorithm over one octant, mirrored eight ways, with the
//! decision variable kept in `f32` so non-integer radii are accepted.

use super::raster::RasterBuffer;
use crate::geom::{snap, Point};

/// Circles above this radius are skipped; the octant walk would take
/// longer than any grid is wide and `f32` stepping loses unit precision.
pub const MAX_RADIUS: f32 = 65_536.0;

impl RasterBuffer {
    /// Draw a straight segment from (x0, y0) to (x1, y1), both inclusive.
    ///
    /// Out-of-range endpoints are clamped first; see the module docs.
    pub fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, value: char) {
        let from = (
            i32::from(snap(x0, self.width())),
            i32::from(snap(y0, self.height())),
        );
        let to = (
            i32::from(snap(x1, self.width())),
            i32::from(snap(y1, self.height())),
        );
        self.trace(from, to, value, false);
    }

    /// Draw the outline of a triangle: edges p0→p1, p1→p2, p2→p0.
    pub fn draw_triangle(&mut self, p0: Point, p1: Point, p2: Point, value: char) {
        self.draw_line(p0.x, p0.y, p1.x, p1.y, value);
        self.draw_line(p1.x, p1.y, p2.x, p2.y, value);
        self.draw_line(p2.x, p2.y, p0.x, p0.y, value);
    }

    /// Draw a circle outline centred on (cx, cy).
    ///
    /// A zero radius plots the centre cell. Negative radii draw with their
    /// magnitude; non-finite radii and radii above [`MAX_RADIUS`] draw
    /// nothing. The walk keeps whole-step `x`/`y` state, so a fractional
    /// radius can give slightly uneven octants.
    pub fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, value: char) {
        let radius = radius.abs();
        if !radius.is_finite() || radius > MAX_RADIUS {
            log::trace!("skipping circle with radius {radius}");
            return;
        }

        let mut x = 0.0_f32;
        let mut y = radius;
        let mut delta = 2.0_f32.mul_add(-radius, 1.0);

        while y >= x {
            self.put(cx + x, cy + y, value);
            self.put(cx + x, cy - y, value);
            self.put(cx - x, cy + y, value);
            self.put(cx - x, cy - y, value);
            self.put(cx + y, cy + x, value);
            self.put(cx + y, cy - x, value);
            self.put(cx - y, cy + x, value);
            self.put(cx - y, cy - x, value);

            let error = 2.0 * (delta + y) - 1.0;

            if delta < 0.0 && error <= 0.0 {
                x += 1.0;
                delta += 2.0 * x + 1.0;
                continue;
            }

            if delta > 0.0 && error > 0.0 {
                y -= 1.0;
                delta -= 2.0 * y + 1.0;
                continue;
            }

            x += 1.0;
            y -= 1.0;
            delta += 2.0 * (x - y);
        }
    }

    /// Rasterize between two in-bounds cells.
    ///
    /// With `flipped` set the coordinates arrive axis-swapped and are
    /// swapped back when plotted. A steep segment recurses once with
    /// `flipped` so the stepped axis is always the long one.
    #[allow(clippy::cast_precision_loss)]
    fn trace(&mut self, from: (i32, i32), to: (i32, i32), value: char, flipped: bool) {
        let ((x0, y0), (x1, y1)) = if from.0 > to.0 { (to, from) } else { (from, to) };

        if x0 == x1 {
            let dir = (y1 - y0).signum();
            let mut y = y0;
            loop {
                self.plot(x0, y as f32, value, flipped);
                if y == y1 {
                    return;
                }
                y += dir;
            }
        }

        if y0 == y1 {
            for x in x0..=x1 {
                self.plot(x, y0 as f32, value, flipped);
            }
            return;
        }

        let dy = y1 - y0;
        let de = (dy as f32 / (x1 - x0) as f32).abs();

        if !flipped && de > 1.0 {
            self.trace((y0, x0), (y1, x1), value, true);
            return;
        }

        let dir = dy.signum() as f32;
        let mut yf = y0 as f32;
        let mut error = 0.5_f32;

        for x in x0..=x1 {
            self.plot(x, yf.round(), value, flipped);
            error += de;
            while error > 1.0 {
                yf += dir;
                error -= 1.0;
            }
        }
    }

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn plot(&mut self, long: i32, short: f32, value: char, flipped: bool) {
        if flipped {
            self.put(short, long as f32, value);
        } else {
            self.put(long as f32, short, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::BLANK;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn marked(buffer: &RasterBuffer) -> BTreeSet<(u16, u16)> {
        let mut set = BTreeSet::new();
        for (y, row) in buffer.rows().enumerate() {
            for (x, &c) in row.iter().enumerate() {
                if c != BLANK {
                    set.insert((x as u16, y as u16));
                }
            }
        }
        set
    }

    fn cells(points: &[(u16, u16)]) -> BTreeSet<(u16, u16)> {
        points.iter().copied().collect()
    }

    #[test]
    fn test_line_diagonal() {
        let mut buffer = RasterBuffer::new(10, 10).unwrap();
        buffer.draw_line(0.0, 0.0, 9.0, 9.0, 'X');
        let expected: BTreeSet<_> = (0..10).map(|i| (i, i)).collect();
        assert_eq!(marked(&buffer), expected);
    }

    #[test]
    fn test_line_anti_diagonal() {
        let mut buffer = RasterBuffer::new(10, 10).unwrap();
        buffer.draw_line(0.0, 9.0, 9.0, 0.0, 'X');
        let expected: BTreeSet<_> = (0..10).map(|i| (i, 9 - i)).collect();
        assert_eq!(marked(&buffer), expected);
    }

    #[test]
    fn test_line_zero_length() {
        let mut buffer = RasterBuffer::new(10, 10).unwrap();
        buffer.draw_line(2.7, 3.2, 2.7, 3.2, 'X');
        assert_eq!(marked(&buffer), cells(&[(3, 3)]));
    }

    #[test]
    fn test_line_vertical_inclusive() {
        let mut buffer = RasterBuffer::new(10, 10).unwrap();
        buffer.draw_line(4.0, 7.0, 4.0, 2.0, '|');
        let expected: BTreeSet<_> = (2..=7).map(|y| (4, y)).collect();
        assert_eq!(marked(&buffer), expected);
    }

    #[test]
    fn test_line_horizontal_inclusive() {
        let mut buffer = RasterBuffer::new(10, 10).unwrap();
        buffer.draw_line(8.0, 5.0, 1.0, 5.0, '-');
        let expected: BTreeSet<_> = (1..=8).map(|x| (x, 5)).collect();
        assert_eq!(marked(&buffer), expected);
    }

    #[test]
    fn test_line_shallow() {
        let mut buffer = RasterBuffer::new(10, 10).unwrap();
        buffer.draw_line(0.0, 0.0, 4.0, 1.0, 'X');
        assert_eq!(
            marked(&buffer),
            cells(&[(0, 0), (1, 0), (2, 0), (3, 1), (4, 1)])
        );
    }

    #[test]
    fn test_line_steep_has_no_gaps() {
        let mut buffer = RasterBuffer::new(10, 10).unwrap();
        buffer.draw_line(2.0, 0.0, 4.0, 9.0, 'X');
        let set = marked(&buffer);
        assert_eq!(set.len(), 10);
        for y in 0..10 {
            assert_eq!(set.iter().filter(|&&(_, py)| py == y).count(), 1);
        }
        assert!(set.contains(&(2, 0)));
        assert!(set.contains(&(4, 9)));
    }

    #[test]
    fn test_line_clamped_endpoints() {
        let mut buffer = RasterBuffer::new(10, 10).unwrap();
        buffer.draw_line(-5.0, -5.0, 20.0, -5.0, '@');
        let expected: BTreeSet<_> = (0..10).map(|x| (x, 0)).collect();
        assert_eq!(marked(&buffer), expected);
    }

    #[test]
    fn test_line_clamps_before_slope() {
        // (-10, 0) clamps to (0, 0): the segment becomes the diagonal
        // rather than the visible part of the original shallower line.
        let mut buffer = RasterBuffer::new(10, 10).unwrap();
        buffer.draw_line(-10.0, 0.0, 9.0, 9.0, 'X');
        let expected: BTreeSet<_> = (0..10).map(|i| (i, i)).collect();
        assert_eq!(marked(&buffer), expected);
    }

    #[test]
    fn test_line_nan_endpoint_snaps_to_origin() {
        let mut buffer = RasterBuffer::new(5, 5).unwrap();
        buffer.draw_line(f32::NAN, f32::NAN, 0.0, 4.0, 'X');
        let expected: BTreeSet<_> = (0..5).map(|y| (0, y)).collect();
        assert_eq!(marked(&buffer), expected);
    }

    #[test]
    fn test_triangle_vertices_and_edges() {
        let mut buffer = RasterBuffer::new(12, 12).unwrap();
        buffer.draw_triangle(
            Point::new(1.0, 1.0),
            Point::new(10.0, 1.0),
            Point::new(1.0, 10.0),
            'A',
        );
        let set = marked(&buffer);
        for p in [(1, 1), (10, 1), (1, 10)] {
            assert!(set.contains(&p));
        }
        // Horizontal edge, vertical edge and the hypotenuse.
        assert!((1..=10).all(|x| set.contains(&(x, 1))));
        assert!((1..=10).all(|y| set.contains(&(1, y))));
        assert!((1..=10).all(|i| set.contains(&(i, 11 - i))));
        assert!(!set.contains(&(5, 5)));
    }

    #[test]
    fn test_triangle_collinear_is_a_line() {
        let mut tri = RasterBuffer::new(10, 10).unwrap();
        tri.draw_triangle(
            Point::new(0.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(9.0, 9.0),
            'T',
        );
        let mut line = RasterBuffer::new(10, 10).unwrap();
        line.draw_line(0.0, 0.0, 9.0, 9.0, 'T');
        assert_eq!(tri, line);
    }

    #[test]
    fn test_circle_zero_radius() {
        let mut buffer = RasterBuffer::new(10, 10).unwrap();
        buffer.draw_circle(4.0, 6.0, 0.0, 'o');
        assert_eq!(marked(&buffer), cells(&[(4, 6)]));
    }

    #[test]
    fn test_circle_radius_one() {
        let mut buffer = RasterBuffer::new(10, 10).unwrap();
        buffer.draw_circle(5.0, 5.0, 1.0, 'o');
        let expected = cells(&[
            (4, 4), (5, 4), (6, 4),
            (4, 5), (6, 5),
            (4, 6), (5, 6), (6, 6),
        ]);
        assert_eq!(marked(&buffer), expected);
    }

    #[test]
    fn test_circle_radius_two() {
        let mut buffer = RasterBuffer::new(10, 10).unwrap();
        buffer.draw_circle(5.0, 5.0, 2.0, 'o');
        let expected = cells(&[
            (5, 3), (5, 7), (3, 5), (7, 5),
            (4, 3), (6, 3), (4, 7), (6, 7),
            (3, 4), (3, 6), (7, 4), (7, 6),
        ]);
        assert_eq!(marked(&buffer), expected);
    }

    #[test]
    fn test_circle_negative_radius_uses_magnitude() {
        let mut a = RasterBuffer::new(20, 20).unwrap();
        a.draw_circle(10.0, 10.0, 6.0, 'o');
        let mut b = RasterBuffer::new(20, 20).unwrap();
        b.draw_circle(10.0, 10.0, -6.0, 'o');
        assert_eq!(a, b);
    }

    #[test]
    fn test_circle_non_finite_radius_draws_nothing() {
        let mut buffer = RasterBuffer::new(10, 10).unwrap();
        buffer.draw_circle(5.0, 5.0, f32::NAN, 'o');
        buffer.draw_circle(5.0, 5.0, f32::INFINITY, 'o');
        buffer.draw_circle(5.0, 5.0, MAX_RADIUS * 2.0, 'o');
        assert!(marked(&buffer).is_empty());
    }

    #[test]
    fn test_circle_symmetry() {
        let mut buffer = RasterBuffer::new(30, 30).unwrap();
        buffer.draw_circle(15.0, 15.0, 9.0, 'o');
        let set = marked(&buffer);
        for &(x, y) in &set {
            assert!(set.contains(&(30 - x, y)));
            assert!(set.contains(&(x, 30 - y)));
            assert!(set.contains(&(y, x)));
        }
        assert!(set.contains(&(15, 6)));
        assert!(set.contains(&(24, 15)));
    }

    #[test]
    fn test_circle_off_grid_clamps() {
        let mut buffer = RasterBuffer::new(8, 8).unwrap();
        buffer.draw_circle(-20.0, 3.0, 4.0, 'o');
        let set = marked(&buffer);
        assert!(!set.is_empty());
        assert!(set.iter().all(|&(x, _)| x == 0));
    }

    proptest! {
        #[test]
        fn prop_line_endpoint_swap_symmetric(
            x0 in -5.0f32..35.0, y0 in -5.0f32..25.0,
            x1 in -5.0f32..35.0, y1 in -5.0f32..25.0,
        ) {
            let mut forward = RasterBuffer::new(30, 20).unwrap();
            forward.draw_line(x0, y0, x1, y1, 'X');
            let mut backward = RasterBuffer::new(30, 20).unwrap();
            backward.draw_line(x1, y1, x0, y0, 'X');
            prop_assert_eq!(marked(&forward), marked(&backward));
        }

        #[test]
        fn prop_line_hits_endpoints_without_gaps(
            x0 in 0.0f32..29.0, y0 in 0.0f32..19.0,
            x1 in 0.0f32..29.0, y1 in 0.0f32..19.0,
        ) {
            let mut buffer = RasterBuffer::new(30, 20).unwrap();
            buffer.draw_line(x0, y0, x1, y1, 'X');
            let set = marked(&buffer);

            let a = (x0.round() as u16, y0.round() as u16);
            let b = (x1.round() as u16, y1.round() as u16);
            prop_assert!(set.contains(&a));
            prop_assert!(set.contains(&b));

            let span = a.0.abs_diff(b.0).max(a.1.abs_diff(b.1));
            prop_assert_eq!(set.len(), usize::from(span) + 1);
        }

        #[test]
        fn prop_circle_stays_in_grid(
            cx in -50.0f32..50.0, cy in -50.0f32..50.0, r in 0.0f32..40.0,
        ) {
            let mut buffer = RasterBuffer::new(16, 12).unwrap();
            buffer.draw_circle(cx, cy, r, 'o');
            prop_assert_eq!(buffer.len(), 16 * 12);
        }
    }
}
