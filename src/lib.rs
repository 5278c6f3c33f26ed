//! Interactive polygon rasterizer.
//!
//! Click to place vertices, press Enter to scan-convert the polygon with an
//! active edge table, F to smooth the picture with a 2x2 kernel, C to clear.
//! The core (`display::FrameBuffer`, `raster`, `editor`, `input`, `session`)
//! has no windowing dependency; the SDL2 window lives behind the `sdl` feature.

pub mod config;
pub mod display;
pub mod editor;
pub mod error;
pub mod input;
pub mod raster;
pub mod session;

pub use config::{Args, Config};
pub use display::{FrameBuffer, Rgb};
pub use error::{Error, Result};
pub use session::{Flow, Session};
