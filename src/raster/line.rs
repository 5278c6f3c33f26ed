use crate::display::{FrameBuffer, Rgb};

/// Bresenham walk from `p0` to `p1`, both ends included.
///
/// The axis with the larger delta is dominant (y wins ties). Each step moves
/// one unit along it; the error term starts at half the dominant delta and the
/// minor axis steps whenever it drops below zero. Walking `p1 -> p0` may pick
/// different pixels than `p0 -> p1`.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    x: i64,
    y: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    x_major: bool,
    // Doubled so the initial half-delta stays integral
    err: i64,
    remaining: usize,
}

impl BresenhamLine {
    pub fn new((x0, y0): (i32, i32), (x1, y1): (i32, i32)) -> Self {
        let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 > x1 { -1 } else { 1 };
        let sy = if y0 > y1 { -1 } else { 1 };
        let x_major = dx > dy;
        let err = if x_major { dx } else { dy };

        Self {
            x: x0,
            y: y0,
            dx,
            dy,
            sx,
            sy,
            x_major,
            err,
            remaining: dx.max(dy) as usize + 1,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let point = (self.x as i32, self.y as i32);
        self.remaining -= 1;

        if self.remaining > 0 {
            if self.x_major {
                self.err -= 2 * self.dy;
                if self.err < 0 {
                    self.y += self.sy;
                    self.err += 2 * self.dx;
                }
                self.x += self.sx;
            } else {
                self.err -= 2 * self.dx;
                if self.err < 0 {
                    self.x += self.sx;
                    self.err += 2 * self.dy;
                }
                self.y += self.sy;
            }
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for BresenhamLine {}

/// Collect the full path from `p0` to `p1`
pub fn bresenham(p0: (i32, i32), p1: (i32, i32)) -> Vec<(i32, i32)> {
    BresenhamLine::new(p0, p1).collect()
}

/// Rasterize a line into the buffer; off-buffer pixels are dropped
pub fn draw_line(buffer: &mut FrameBuffer, p0: (i32, i32), p1: (i32, i32), color: Rgb) {
    for (x, y) in BresenhamLine::new(p0, p1) {
        buffer.set(x, y, color);
    }
}
