use super::{Command, InputEvent, Key, PointerButton};
use crate::editor::Vertex;

/// Convert a window y (origin top, growing down) into a buffer y (origin
/// bottom, growing up).
///
/// The result is `height - y`, so a click on the very top row of the window
/// maps to `height`, one past the last buffer row. That vertex is kept as is;
/// anything drawn through it is clipped by the buffer.
#[inline]
pub fn flip_y(y: f64, height: u32) -> f64 {
    height as f64 - y
}

/// Fixed key and pointer bindings
#[derive(Debug, Default, Clone, Copy)]
pub struct InputController;

impl InputController {
    pub fn new() -> Self {
        Self
    }

    /// Translate one event. `buffer_height` is the height of the frame buffer
    /// at the time the event is handled.
    pub fn translate(&self, event: &InputEvent, buffer_height: u32) -> Option<Command> {
        match *event {
            InputEvent::Quit => Some(Command::Close),
            InputEvent::KeyDown(key) => match key {
                Key::C => Some(Command::Clear),
                Key::F => Some(Command::ApplyFilter),
                Key::Enter => Some(Command::Finalize),
                Key::Escape => Some(Command::Close),
                Key::Other => None,
            },
            InputEvent::PointerDown {
                x,
                y,
                button: PointerButton::Left,
            } => Some(Command::AddVertex(Vertex::new(x, flip_y(y, buffer_height)))),
            InputEvent::PointerDown { .. } => None,
            InputEvent::Resized { width, height } => Some(Command::Resize { width, height }),
        }
    }
}
