//! Click-to-add polygon editor.

mod polygon;

pub use polygon::{Polygon, Vertex};

use crate::display::{FrameBuffer, Rgb};
use crate::raster::fill_polygon;

/// Editor state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    /// No polygon in progress. The next vertex starts a fresh drawing.
    #[default]
    Idle,
    /// Vertices are being collected
    Collecting,
}

/// Result of a finalize request. Nothing here is an error.
#[derive(Debug, Clone, PartialEq)]
pub enum FinalizeOutcome {
    /// The closed polygon that was filled
    Filled(Polygon),
    /// Fewer than three vertices; still collecting
    TooFewVertices { count: usize },
    /// Nothing in progress
    NotCollecting,
}

/// Owns the polygon under construction
#[derive(Debug, Clone, Default)]
pub struct PolygonEditor {
    state: EditorState,
    polygon: Polygon,
}

impl PolygonEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_collecting(&self) -> bool {
        self.state == EditorState::Collecting
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.polygon.vertices
    }

    /// Add a vertex. The first vertex after idle wipes the buffer.
    pub fn add_vertex(&mut self, vertex: Vertex, buffer: &mut FrameBuffer) {
        match self.state {
            EditorState::Idle => {
                buffer.clear();
                self.polygon = Polygon::from_vertices(vec![vertex]);
                self.state = EditorState::Collecting;
            },
            EditorState::Collecting => self.polygon.add_vertex(vertex),
        }
        log::debug!(
            "vertex {} at ({:.1}, {:.1})",
            self.polygon.len(),
            vertex.x,
            vertex.y
        );
    }

    /// Close and fill the polygon if it has at least three vertices
    pub fn finalize(&mut self, buffer: &mut FrameBuffer, color: Rgb) -> FinalizeOutcome {
        if self.state != EditorState::Collecting {
            return FinalizeOutcome::NotCollecting;
        }
        let count = self.polygon.len();
        if count < 3 {
            return FinalizeOutcome::TooFewVertices { count };
        }

        let mut polygon = std::mem::take(&mut self.polygon);
        polygon.close();
        fill_polygon(buffer, &polygon.vertices, color);
        self.state = EditorState::Idle;
        FinalizeOutcome::Filled(polygon)
    }

    /// Wipe the buffer and drop any polygon in progress
    pub fn clear(&mut self, buffer: &mut FrameBuffer) {
        buffer.clear();
        self.polygon.clear();
        self.state = EditorState::Idle;
    }
}
