use serde::{Deserialize, Serialize};

// ============================================================================
// Color
// ============================================================================

/// RGB triple with each channel in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Clamp every channel into [0, 1]. NaN becomes 0.
    pub fn clamped(self) -> Self {
        let c = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self::new(c(self.r), c(self.g), c(self.b))
    }

    /// Quantize to 8-bit channels for presentation
    pub fn to_bytes(self) -> (u8, u8, u8) {
        let q = |v: f32| (v * 255.0).round() as u8;
        let c = self.clamped();
        (q(c.r), q(c.g), q(c.b))
    }
}

// ============================================================================
// FrameBuffer
// ============================================================================

/// Row-major RGB grid that every rasterizer writes through.
///
/// `(x, y)` addresses column `x` of row `y`, with row 0 at the bottom of the
/// picture. Writes outside the grid are dropped silently.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    pixels: Vec<Rgb>,
    width: u32,
    height: u32,
    background: Rgb,
}

impl FrameBuffer {
    /// Create a buffer filled with opaque white
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Rgb::WHITE)
    }

    /// Create a buffer filled with `background`
    pub fn with_background(width: u32, height: u32, background: Rgb) -> Self {
        let background = background.clamped();
        Self {
            pixels: vec![background; width as usize * height as usize],
            width,
            height,
            background,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Reallocate to the new size. Previous content is discarded and every
    /// cell is reset to the background color.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![self.background; width as usize * height as usize];
    }

    /// Reset every cell to the background color, keeping the dimensions
    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
    }

    /// Set a single pixel (bounds checked)
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            self.pixels[idx] = color.clamped();
        }
    }

    /// Read a pixel. Returns None if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        if self.in_bounds(x, y) {
            Some(self.pixels[self.pixel_index(x as u32, y as u32)])
        } else {
            None
        }
    }

    /// Inclusive horizontal run from `x1` to `x2` on row `y`, clipped
    pub fn hline(&mut self, x1: i32, x2: i32, y: i32, color: Rgb) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let start = x1.max(0);
        let end = x2.min(self.width as i32 - 1);
        if start > end {
            return;
        }

        let row = self.pixel_index(0, y as u32);
        self.pixels[row + start as usize..=row + end as usize].fill(color.clamped());
    }

    /// Filled `w` x `h` rectangle starting at (x, y), clipped
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb) {
        if w == 0 || h == 0 {
            return;
        }
        let x2 = x.saturating_add(w as i32 - 1);
        for row in y..y.saturating_add(h as i32) {
            self.hline(x, x2, row, color);
        }
    }

    /// Iterate rows from y = 0 upward
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Rgb]> {
        // chunks_exact panics on zero; an empty buffer yields no rows anyway
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Assemble a buffer from a full grid of pixels
    pub(crate) fn from_parts(width: u32, height: u32, background: Rgb, pixels: Vec<Rgb>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            pixels,
            width,
            height,
            background,
        }
    }
}
