/// A point in buffer coordinates, kept real-valued until rasterized
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Integer pixel position, truncating toward zero
    #[inline]
    pub fn snapped(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

/// Ordered vertex sequence. Open while collecting; `close` repeats the first
/// vertex at the end so the loop is explicit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
}

impl Polygon {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    pub fn from_vertices(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Append the first vertex again. No-op on an empty polygon.
    pub fn close(&mut self) {
        if let Some(&first) = self.vertices.first() {
            self.vertices.push(first);
        }
    }

    /// Consecutive vertex pairs, without the implicit closing edge
    pub fn segments(&self) -> impl Iterator<Item = (&Vertex, &Vertex)> {
        self.vertices.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Get the bounding box (min_x, min_y, max_x, max_y)
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.vertices.first()?;
        let init = (first.x, first.y, first.x, first.y);
        Some(self.vertices.iter().fold(init, |(x0, y0, x1, y1), v| {
            (x0.min(v.x), y0.min(v.y), x1.max(v.x), y1.max(v.y))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapped_truncates_toward_zero() {
        assert_eq!(Vertex::new(3.9, 7.2).snapped(), (3, 7));
        assert_eq!(Vertex::new(-0.7, -2.5).snapped(), (0, -2));
    }

    #[test]
    fn test_close_repeats_first() {
        let mut poly = Polygon::from_vertices(vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(4.0, 0.0),
            Vertex::new(2.0, 3.0),
        ]);
        poly.close();
        assert_eq!(poly.len(), 4);
        assert_eq!(poly.vertices[3], poly.vertices[0]);

        let mut empty = Polygon::new();
        empty.close();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_segments_are_open() {
        let poly = Polygon::from_vertices(vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(4.0, 0.0),
            Vertex::new(2.0, 3.0),
        ]);
        assert_eq!(poly.segments().count(), 2);
        assert_eq!(Polygon::new().segments().count(), 0);
    }

    #[test]
    fn test_bounds() {
        let poly = Polygon::from_vertices(vec![
            Vertex::new(10.0, 10.0),
            Vertex::new(50.0, 10.0),
            Vertex::new(30.0, 40.0),
        ]);
        assert_eq!(poly.bounds(), Some((10.0, 10.0, 50.0, 40.0)));
        assert_eq!(Polygon::new().bounds(), None);
    }
}
