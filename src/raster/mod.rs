//! Software rasterizers that write through a `FrameBuffer`.

mod fill;
mod filter;
mod line;

pub use fill::{build_edges, fill_polygon, polygon_spans, Edge, Span};
pub use filter::{smooth, KERNEL};
pub use line::{bresenham, draw_line, BresenhamLine};
