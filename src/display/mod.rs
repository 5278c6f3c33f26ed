mod frame_buffer;
#[cfg(feature = "sdl")]
mod sdl;

pub use frame_buffer::{FrameBuffer, Rgb};
#[cfg(feature = "sdl")]
pub use sdl::{Display, RenderTarget};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
