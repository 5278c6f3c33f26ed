use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

use super::FrameBuffer;
use crate::error::{Error, Result};
use crate::input::{InputEvent, Key, PointerButton};

/// SDL2 window that shows a `FrameBuffer` and produces `InputEvent`s
pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
}

/// Streaming texture the frame buffer is uploaded into
pub struct RenderTarget<'a> {
    texture: Texture<'a>,
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl Display {
    /// Create a resizable window with custom resolution and VSync settings
    pub fn with_options(
        title: &str,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>)> {
        let sdl_context = sdl2::init().map_err(Error::Display)?;
        let video_subsystem = sdl_context.video().map_err(Error::Display)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| Error::Display(e.to_string()))?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder
            .build()
            .map_err(|e| Error::Display(e.to_string()))?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump().map_err(Error::Display)?;

        Ok((Self { canvas, event_pump }, texture_creator))
    }

    /// Upload the buffer and show it. Buffer row 0 lands at the bottom of the window.
    pub fn present(&mut self, target: &mut RenderTarget, buffer: &FrameBuffer) -> Result<()> {
        target.upload(buffer)?;
        self.canvas.clear();
        self.canvas
            .copy(&target.texture, None, None)
            .map_err(Error::Display)?;
        self.canvas.present();
        Ok(())
    }

    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(k),
                    repeat: false,
                    ..
                } => events.push(InputEvent::KeyDown(map_key(k))),
                Event::MouseButtonDown {
                    x, y, mouse_btn, ..
                } => {
                    if let Some(button) = map_mouse_button(mouse_btn) {
                        events.push(InputEvent::PointerDown {
                            x: x as f64,
                            y: y as f64,
                            button,
                        });
                    }
                },
                Event::Window {
                    win_event: WindowEvent::Resized(w, h),
                    ..
                } => events.push(InputEvent::Resized {
                    width: w.max(0) as u32,
                    height: h.max(0) as u32,
                }),
                _ => {},
            }
        }

        events
    }
}

impl<'a> RenderTarget<'a> {
    pub fn with_size(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::RGBA8888, width.max(1), height.max(1))
            .map_err(|e| Error::Display(e.to_string()))?;
        Ok(Self {
            texture,
            width,
            height,
            bytes: vec![0; width as usize * height as usize * 4],
        })
    }

    /// True when the texture no longer matches the buffer it has to show
    pub fn matches(&self, buffer: &FrameBuffer) -> bool {
        self.width == buffer.width() && self.height == buffer.height()
    }

    fn upload(&mut self, buffer: &FrameBuffer) -> Result<()> {
        if !self.matches(buffer) || buffer.width() == 0 || buffer.height() == 0 {
            return Ok(());
        }

        // Window rows run top-down, buffer rows bottom-up
        for (dest_row, src_row) in self
            .bytes
            .chunks_exact_mut(self.width as usize * 4)
            .zip(buffer.rows().rev())
        {
            for (dest, color) in dest_row.chunks_exact_mut(4).zip(src_row) {
                write_pixel(dest, color.to_bytes());
            }
        }

        self.texture
            .update(None, &self.bytes, self.width as usize * 4)
            .map_err(|e| Error::Display(e.to_string()))
    }
}

/// Write ABGR pixel to slice (RGBA8888 little-endian byte order)
#[inline]
fn write_pixel(dest: &mut [u8], (r, g, b): (u8, u8, u8)) {
    dest[0] = 255; // A
    dest[1] = b; // B
    dest[2] = g; // G
    dest[3] = r; // R
}

fn map_key(key: Keycode) -> Key {
    match key {
        Keycode::C => Key::C,
        Keycode::F => Key::F,
        Keycode::Return | Keycode::KpEnter => Key::Enter,
        Keycode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

fn map_mouse_button(btn: MouseButton) -> Option<PointerButton> {
    match btn {
        MouseButton::Left => Some(PointerButton::Left),
        MouseButton::Right => Some(PointerButton::Right),
        MouseButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}
