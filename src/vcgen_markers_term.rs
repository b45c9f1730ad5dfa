//! Terminal marker generator.
//!
//! Collects the first two and the last two vertices of every sub-path it
//! sees, then replays them as short two-point paths: path 0 holds the start
//! markers, path 1 the end markers. Each pair gives a position plus a
//! direction, which is what arrowheads and similar decorations need.

use crate::basics::{PathCommand, PointD, Vertex, VertexSource};
use crate::conv_adaptor_vcgen::Markers;

/// Start/end marker collector.
///
/// Per sub-path, four points are stored: `[first, second, last,
/// before_last]`.
#[derive(Debug, Clone, Default)]
pub struct VcgenMarkersTerm {
    markers: Vec<PointD>,
    curr_id: usize,
    curr_idx: usize,
}

impl VcgenMarkersTerm {
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
            curr_id: 0,
            curr_idx: 0,
        }
    }

    /// Number of complete start/end records.
    pub fn num_paths(&self) -> usize {
        self.markers.len() / 4
    }
}

impl Markers for VcgenMarkersTerm {
    fn remove_all(&mut self) {
        self.markers.clear();
    }

    fn add_vertex(&mut self, x: f64, y: f64, cmd: PathCommand) {
        let p = PointD::new(x, y);
        let n = self.markers.len();
        if cmd.is_move_to() {
            if n & 1 != 0 {
                // A move-to followed by another one: the later wins.
                self.markers[n - 1] = p;
            } else {
                self.markers.push(p);
            }
        } else if cmd.is_vertex() {
            if n & 1 != 0 {
                // Second point of the sub-path; it is also the last one so far.
                let first = self.markers[n - 1];
                self.markers.push(p);
                self.markers.push(p);
                self.markers.push(first);
            } else if n > 0 {
                self.markers[n - 1] = self.markers[n - 2];
                self.markers[n - 2] = p;
            }
        }
    }
}

impl VertexSource for VcgenMarkersTerm {
    /// `0` replays start markers, `1` end markers.
    fn rewind(&mut self, path_id: u32) {
        self.curr_id = path_id as usize * 2;
        self.curr_idx = self.curr_id;
    }

    fn vertex(&mut self) -> Vertex {
        if self.curr_id > 2 || self.curr_idx >= self.markers.len() {
            return Vertex::stop();
        }
        let p = self.markers[self.curr_idx];
        if self.curr_idx & 1 != 0 {
            self.curr_idx += 3;
            return Vertex::line_to(p.x, p.y);
        }
        self.curr_idx += 1;
        Vertex::move_to(p.x, p.y)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::vertices;

    fn polyline(m: &mut VcgenMarkersTerm, points: &[(f64, f64)]) {
        for (i, &(x, y)) in points.iter().enumerate() {
            let cmd = if i == 0 {
                PathCommand::MOVE_TO
            } else {
                PathCommand::LINE_TO
            };
            m.add_vertex(x, y, cmd);
        }
    }

    #[test]
    fn test_empty() {
        let mut m = VcgenMarkersTerm::new();
        assert_eq!(vertices(&mut m, 0).count(), 0);
        assert_eq!(vertices(&mut m, 1).count(), 0);
    }

    #[test]
    fn test_start_and_end_markers() {
        let mut m = VcgenMarkersTerm::new();
        polyline(&mut m, &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 1.0)]);

        let start: Vec<Vertex> = vertices(&mut m, 0).collect();
        assert_eq!(start, vec![Vertex::move_to(0.0, 0.0), Vertex::line_to(1.0, 0.0)]);

        let end: Vec<Vertex> = vertices(&mut m, 1).collect();
        assert_eq!(end, vec![Vertex::move_to(3.0, 1.0), Vertex::line_to(2.0, 0.0)]);
    }

    #[test]
    fn test_two_point_path() {
        let mut m = VcgenMarkersTerm::new();
        polyline(&mut m, &[(0.0, 0.0), (5.0, 5.0)]);
        let end: Vec<Vertex> = vertices(&mut m, 1).collect();
        assert_eq!(end, vec![Vertex::move_to(5.0, 5.0), Vertex::line_to(0.0, 0.0)]);
    }

    #[test]
    fn test_multiple_sub_paths() {
        let mut m = VcgenMarkersTerm::new();
        polyline(&mut m, &[(0.0, 0.0), (1.0, 0.0)]);
        polyline(&mut m, &[(10.0, 10.0), (10.0, 11.0), (10.0, 12.0)]);
        assert_eq!(m.num_paths(), 2);

        let start: Vec<Vertex> = vertices(&mut m, 0).collect();
        assert_eq!(start.len(), 4);
        assert_eq!(start[2], Vertex::move_to(10.0, 10.0));

        let end: Vec<Vertex> = vertices(&mut m, 1).collect();
        assert_eq!(end[2], Vertex::move_to(10.0, 12.0));
        assert_eq!(end[3], Vertex::line_to(10.0, 11.0));
    }

    #[test]
    fn test_repeated_move_to_replaces_start() {
        let mut m = VcgenMarkersTerm::new();
        m.add_vertex(0.0, 0.0, PathCommand::MOVE_TO);
        m.add_vertex(7.0, 7.0, PathCommand::MOVE_TO);
        m.add_vertex(8.0, 7.0, PathCommand::LINE_TO);
        let start: Vec<Vertex> = vertices(&mut m, 0).collect();
        assert_eq!(start[0], Vertex::move_to(7.0, 7.0));
    }

    #[test]
    fn test_other_ids_stop() {
        let mut m = VcgenMarkersTerm::new();
        polyline(&mut m, &[(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(vertices(&mut m, 2).count(), 0);
        assert_eq!(vertices(&mut m, 7).count(), 0);
    }

    #[test]
    fn test_remove_all() {
        let mut m = VcgenMarkersTerm::new();
        polyline(&mut m, &[(0.0, 0.0), (1.0, 0.0)]);
        m.remove_all();
        assert_eq!(vertices(&mut m, 0).count(), 0);
    }
}
