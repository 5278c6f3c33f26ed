//! Scanline polygon fill with an edge table and an active edge table.

use crate::display::{FrameBuffer, Rgb};
use crate::editor::Vertex;

/// Non-horizontal polygon edge, stored lower endpoint first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub x_lower: i32,
    pub y_lower: i32,
    pub x_upper: i32,
    pub y_upper: i32,
}

impl Edge {
    /// Returns None for horizontal edges; they never cross a scanline
    pub fn new((x0, y0): (i32, i32), (x1, y1): (i32, i32)) -> Option<Self> {
        if y0 == y1 {
            return None;
        }
        let ((x_lower, y_lower), (x_upper, y_upper)) = if y0 > y1 {
            ((x1, y1), (x0, y0))
        } else {
            ((x0, y0), (x1, y1))
        };
        Some(Self {
            x_lower,
            y_lower,
            x_upper,
            y_upper,
        })
    }

    /// dx/dy, or 0 when dy is 0
    pub fn inverse_slope(&self) -> f64 {
        // Snapped endpoints may sit at the ends of the i32 range
        let dy = self.y_upper as f64 - self.y_lower as f64;
        if dy == 0.0 {
            return 0.0;
        }
        (self.x_upper as f64 - self.x_lower as f64) / dy
    }
}

/// Entry of the active edge table
#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveEdge {
    y_upper: i32,
    x: f64,
    inverse_slope: f64,
}

/// Inclusive run of pixels on one scanline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub y: i32,
    pub x_start: i32,
    pub x_end: i32,
}

/// Edge table for a vertex loop. Vertices are snapped by truncation and the
/// last vertex connects back to the first.
pub fn build_edges(vertices: &[Vertex]) -> Vec<Edge> {
    let n = vertices.len();
    (0..n)
        .filter_map(|i| Edge::new(vertices[i].snapped(), vertices[(i + 1) % n].snapped()))
        .collect()
}

/// Compute the spans the even-odd fill covers, clamping x into `[0, width - 1]`.
///
/// Scanlines run from the lowest to the highest edge endpoint inclusive. An
/// edge joins the table on the scanline of its lower endpoint and leaves once
/// its upper y is no longer above the current scanline.
pub fn polygon_spans(vertices: &[Vertex], width: u32) -> Vec<Span> {
    let mut spans = Vec::new();
    if vertices.len() < 3 {
        return spans;
    }

    let edges = build_edges(vertices);
    let (Some(min_y), Some(max_y)) = (
        edges.iter().map(|e| e.y_lower).min(),
        edges.iter().map(|e| e.y_upper).max(),
    ) else {
        return spans;
    };
    log::trace!(
        "filling {} vertices: {} edges, scanlines {}..={}",
        vertices.len(),
        edges.len(),
        min_y,
        max_y
    );

    let last_column = width as i32 - 1;
    let clamp_x = |x: f64| (x.round_ties_even() as i32).min(last_column).max(0);
    let mut active: Vec<ActiveEdge> = Vec::with_capacity(edges.len());

    for y in min_y..=max_y {
        // Full pass over the edge table on every scanline
        for edge in edges.iter().filter(|e| e.y_lower == y) {
            active.push(ActiveEdge {
                y_upper: edge.y_upper,
                x: edge.x_lower as f64,
                inverse_slope: edge.inverse_slope(),
            });
        }

        active.sort_by(|a, b| a.x.total_cmp(&b.x));

        for pair in active.chunks_exact(2) {
            let x_start = clamp_x(pair[0].x);
            let x_end = clamp_x(pair[1].x);
            if x_start <= x_end {
                spans.push(Span { y, x_start, x_end });
            }
        }

        active.retain(|e| e.y_upper > y);
        for edge in &mut active {
            edge.x += edge.inverse_slope;
        }
    }

    spans
}

/// Fill a vertex loop into the buffer. Fewer than three vertices is a no-op.
pub fn fill_polygon(buffer: &mut FrameBuffer, vertices: &[Vertex], color: Rgb) {
    for span in polygon_spans(vertices, buffer.width()) {
        buffer.hline(span.x_start, span.x_end, span.y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verts(points: &[(f64, f64)]) -> Vec<Vertex> {
        points.iter().map(|&(x, y)| Vertex::new(x, y)).collect()
    }

    fn closed(points: &[(f64, f64)]) -> Vec<Vertex> {
        let mut v = verts(points);
        v.push(v[0]);
        v
    }

    fn filled(buffer: &FrameBuffer, color: Rgb) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..buffer.height() as i32 {
            for x in 0..buffer.width() as i32 {
                if buffer.get(x, y) == Some(color) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_edge_normalizes_and_drops_horizontal() {
        assert_eq!(Edge::new((0, 5), (9, 5)), None);
        let e = Edge::new((4, 10), (0, 2)).unwrap();
        assert_eq!((e.x_lower, e.y_lower, e.x_upper, e.y_upper), (0, 2, 4, 10));
        assert_eq!(e.inverse_slope(), 0.5);
        let vertical = Edge::new((3, 0), (3, 7)).unwrap();
        assert_eq!(vertical.inverse_slope(), 0.0);
    }

    #[test]
    fn test_build_edges_skips_closing_duplicate() {
        let edges = build_edges(&closed(&[(10.0, 10.0), (50.0, 10.0), (30.0, 40.0)]));
        // Base edge and the duplicated closing vertex are both horizontal/degenerate
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn test_triangle_stays_in_bounds() {
        let mut buffer = FrameBuffer::new(100, 100);
        fill_polygon(
            &mut buffer,
            &closed(&[(10.0, 10.0), (50.0, 10.0), (30.0, 40.0)]),
            Rgb::GREEN,
        );
        let pixels = filled(&buffer, Rgb::GREEN);
        assert!(!pixels.is_empty());
        for (x, y) in pixels {
            assert!((10..=40).contains(&y), "row {} outside", y);
            assert!((10..=50).contains(&x), "column {} outside", x);
        }
    }

    #[test]
    fn test_triangle_spans() {
        let spans = polygon_spans(&closed(&[(10.0, 10.0), (50.0, 10.0), (30.0, 40.0)]), 100);
        assert_eq!(spans.len(), 31);
        assert_eq!(
            spans[0],
            Span {
                y: 10,
                x_start: 10,
                x_end: 50
            }
        );
        // x advances by 2/3 per row; 10.666.. rounds to 11, 49.333.. to 49
        assert_eq!(
            spans[1],
            Span {
                y: 11,
                x_start: 11,
                x_end: 49
            }
        );
        // Both slanted edges are still active on the apex row
        assert_eq!(
            spans.last(),
            Some(&Span {
                y: 40,
                x_start: 30,
                x_end: 30
            })
        );
    }

    #[test]
    fn test_rounds_half_to_even() {
        // Right edge x = 2 + 0.5 * (y - 0): 2.5 rounds to 2, 3.5 rounds to 4
        let spans = polygon_spans(&closed(&[(0.0, 0.0), (2.0, 0.0), (4.0, 4.0), (0.0, 4.0)]), 20);
        let ends: Vec<_> = spans.iter().map(|s| (s.y, s.x_end)).collect();
        assert_eq!(ends, vec![(0, 2), (1, 2), (2, 3), (3, 4), (4, 4)]);
    }

    #[test]
    fn test_spans_clamp_to_width() {
        let wide = closed(&[(-10.0, 0.0), (30.0, 0.0), (30.0, 2.0), (-10.0, 2.0)]);
        let spans = polygon_spans(&wide, 8);
        assert_eq!(spans.len(), 3);
        for span in spans {
            assert_eq!((span.x_start, span.x_end), (0, 7));
        }

        // Entirely right of the buffer collapses onto the last column
        let spans = polygon_spans(&closed(&[(20.0, 0.0), (30.0, 0.0), (30.0, 2.0)]), 8);
        assert!(spans.iter().all(|s| s.x_start == 7 && s.x_end == 7));
    }

    #[test]
    fn test_rows_outside_buffer_are_skipped() {
        let mut buffer = FrameBuffer::new(10, 10);
        fill_polygon(
            &mut buffer,
            &closed(&[(2.0, -5.0), (8.0, -5.0), (8.0, 15.0), (2.0, 15.0)]),
            Rgb::GREEN,
        );
        for y in 0..10 {
            assert_eq!(buffer.get(2, y), Some(Rgb::GREEN));
            assert_eq!(buffer.get(1, y), Some(Rgb::WHITE));
        }
    }

    #[test]
    fn test_too_few_vertices_is_noop() {
        assert!(polygon_spans(&verts(&[(5.0, 5.0), (20.0, 5.0)]), 50).is_empty());
        assert!(polygon_spans(&[], 50).is_empty());
    }

    #[test]
    fn test_flat_polygon_is_noop() {
        let spans = polygon_spans(&closed(&[(0.0, 3.0), (5.0, 3.0), (9.0, 3.0)]), 50);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_vertices_truncate_toward_zero() {
        let spans = polygon_spans(&closed(&[(1.9, 0.7), (5.9, 0.2), (5.9, 2.9), (1.9, 2.99)]), 20);
        assert_eq!(
            spans,
            vec![
                Span {
                    y: 0,
                    x_start: 1,
                    x_end: 5
                },
                Span {
                    y: 1,
                    x_start: 1,
                    x_end: 5
                },
                Span {
                    y: 2,
                    x_start: 1,
                    x_end: 5
                },
            ]
        );
    }

    #[test]
    fn test_shared_vertex_scanlines() {
        // Diamond: left and right vertices at y = 5 are shared by an edge that
        // ends there and one that starts there.
        let spans = polygon_spans(
            &closed(&[(5.0, 0.0), (10.0, 5.0), (5.0, 10.0), (0.0, 5.0)]),
            20,
        );
        let rows: Vec<_> = spans.iter().map(|s| (s.y, s.x_start, s.x_end)).collect();
        assert_eq!(
            rows,
            vec![
                (0, 5, 5),
                (1, 4, 6),
                (2, 3, 7),
                (3, 2, 8),
                (4, 1, 9),
                // Lower edges still active here, upper edges join: four entries
                (5, 0, 0),
                (5, 10, 10),
                (6, 1, 9),
                (7, 2, 8),
                (8, 3, 7),
                (9, 4, 6),
                (10, 5, 5),
            ]
        );
    }

    #[test]
    fn test_concave_polygon_has_two_spans() {
        // U shape opening upward
        let spans = polygon_spans(
            &closed(&[
                (0.0, 0.0),
                (9.0, 0.0),
                (9.0, 6.0),
                (6.0, 6.0),
                (6.0, 3.0),
                (3.0, 3.0),
                (3.0, 6.0),
                (0.0, 6.0),
            ]),
            20,
        );
        let row4: Vec<_> = spans.iter().filter(|s| s.y == 4).collect();
        assert_eq!(row4.len(), 2);
        assert_eq!((row4[0].x_start, row4[0].x_end), (0, 3));
        assert_eq!((row4[1].x_start, row4[1].x_end), (6, 9));
    }

    #[test]
    fn test_far_off_buffer_vertices_are_clipped() {
        // x snaps to i32::MIN and i32::MAX
        let vertices = verts(&[(-3e9, 0.0), (3e9, 0.0), (0.0, 10.0), (-3e9, 0.0)]);
        let edge = Edge::new((i32::MIN, 0), (0, 10)).unwrap();
        assert_eq!(edge.inverse_slope(), 214_748_364.8);

        let spans = polygon_spans(&vertices, 100);
        assert_eq!(
            spans[0],
            Span {
                y: 0,
                x_start: 0,
                x_end: 99
            }
        );

        let mut buffer = FrameBuffer::new(100, 100);
        fill_polygon(&mut buffer, &vertices, Rgb::GREEN);
        for y in 0..10 {
            for x in 0..100 {
                assert_eq!(buffer.get(x, y), Some(Rgb::GREEN), "({}, {})", x, y);
            }
        }
        for x in 0..100 {
            assert_eq!(buffer.get(x, 11), Some(Rgb::WHITE));
        }
    }
}
