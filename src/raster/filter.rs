use crate::display::{FrameBuffer, Rgb};

/// 2x2 smoothing weights, indexed `[dy][dx]`, normalized to sum to 1
pub const KERNEL: [[f32; 2]; 2] = [[1.0 / 9.0, 2.0 / 9.0], [2.0 / 9.0, 4.0 / 9.0]];

/// Weighted 2x2 average over each pixel and its +x / +y neighbors.
///
/// The last row and the last column have no full neighborhood and are copied
/// through unchanged. Returns a new buffer of the same size and background.
pub fn smooth(src: &FrameBuffer) -> FrameBuffer {
    let width = src.width() as usize;
    let height = src.height() as usize;
    let input = src.pixels();
    let mut output = input.to_vec();

    for y in 0..height.saturating_sub(1) {
        for x in 0..width.saturating_sub(1) {
            let mut acc = Rgb::BLACK;
            for (dy, row) in KERNEL.iter().enumerate() {
                for (dx, &w) in row.iter().enumerate() {
                    let p = input[(y + dy) * width + x + dx];
                    acc.r += p.r * w;
                    acc.g += p.g * w;
                    acc.b += p.b * w;
                }
            }
            output[y * width + x] = acc.clamped();
        }
    }

    FrameBuffer::from_parts(src.width(), src.height(), src.background(), output)
}
