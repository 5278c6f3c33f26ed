//! Owned context for one interactive run.
//!
//! Every command goes through `Session::dispatch` and runs to completion
//! before the next one; the display only reads the buffer between commands.

use crate::config::{Config, MAX_MARKER_RADIUS};
use crate::display::FrameBuffer;
use crate::editor::{FinalizeOutcome, Polygon, PolygonEditor};
use crate::input::{Command, InputController, InputEvent};
use crate::raster::{draw_line, smooth};

/// Whether the frame loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session {
    config: Config,
    buffer: FrameBuffer,
    editor: PolygonEditor,
    controller: InputController,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let buffer = FrameBuffer::with_background(config.width, config.height, config.background);
        Self {
            config,
            buffer,
            editor: PolygonEditor::new(),
            controller: InputController::new(),
        }
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn editor(&self) -> &PolygonEditor {
        &self.editor
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Translate a window event and run the resulting command, if any
    pub fn handle_event(&mut self, event: &InputEvent) -> Flow {
        match self.controller.translate(event, self.buffer.height()) {
            Some(command) => self.dispatch(command),
            None => Flow::Continue,
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Flow {
        log::debug!("dispatch {:?}", command);
        match command {
            Command::AddVertex(vertex) => self.editor.add_vertex(vertex, &mut self.buffer),
            Command::Finalize => self.finalize(),
            Command::Clear => self.editor.clear(&mut self.buffer),
            Command::ApplyFilter => {
                self.buffer = smooth(&self.buffer);
                log::info!(
                    "smoothed {}x{} buffer",
                    self.buffer.width(),
                    self.buffer.height()
                );
            },
            Command::Resize { width, height } => {
                // The vertex list survives; only the pixels are lost
                self.buffer.resize(width, height);
                log::info!("buffer resized to {}x{}", width, height);
            },
            Command::Close => return Flow::Exit,
        }
        Flow::Continue
    }

    fn finalize(&mut self) {
        match self.editor.finalize(&mut self.buffer, self.config.fill_color) {
            FinalizeOutcome::Filled(polygon) => {
                if let Some((x0, y0, x1, y1)) = polygon.bounds() {
                    log::info!(
                        "filled {}-gon within ({:.0}, {:.0})..({:.0}, {:.0})",
                        polygon.len() - 1,
                        x0,
                        y0,
                        x1,
                        y1
                    );
                }
                if self.config.show_outline {
                    stamp(&mut self.buffer, &self.config, &polygon);
                }
            },
            FinalizeOutcome::TooFewVertices { count } => {
                log::debug!("finalize ignored: {} vertices", count);
            },
            FinalizeOutcome::NotCollecting => {},
        }
    }

    /// Draw markers and connecting edges for the polygon in progress.
    /// Called once per frame; the marks are written into the buffer itself.
    pub fn draw_overlay(&mut self) {
        if !self.config.show_outline || self.editor.vertices().is_empty() {
            return;
        }
        stamp(&mut self.buffer, &self.config, self.editor.polygon());
    }
}

/// Vertex markers plus the edges between consecutive vertices
fn stamp(buffer: &mut FrameBuffer, config: &Config, polygon: &Polygon) {
    let color = config.outline_color;
    let radius = config.marker_radius.min(MAX_MARKER_RADIUS);
    let r = radius as i32;
    let size = radius * 2 + 1;

    for v in &polygon.vertices {
        let (x, y) = v.snapped();
        buffer.fill_rect(x.saturating_sub(r), y.saturating_sub(r), size, size, color);
    }
    for (a, b) in polygon.segments() {
        draw_line(buffer, a.snapped(), b.snapped(), color);
    }
}
