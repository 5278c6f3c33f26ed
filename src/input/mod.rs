//! Backend-neutral input events and their translation into commands.
//!
//! The display backend only produces `InputEvent`s. The `InputController`
//! turns each one into at most one `Command`, which the session consumes.

mod controller;

pub use controller::{flip_y, InputController};

use crate::editor::Vertex;

/// Keys the tool reacts to; everything else collapses to `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    C,
    F,
    Enter,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Event as reported by the window, in window coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    PointerDown {
        x: f64,
        y: f64,
        button: PointerButton,
    },
    Resized {
        width: u32,
        height: u32,
    },
}

/// One unit of work for the session, in buffer coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    AddVertex(Vertex),
    Finalize,
    Clear,
    ApplyFilter,
    Resize { width: u32, height: u32 },
    Close,
}
