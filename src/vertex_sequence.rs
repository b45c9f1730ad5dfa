//! Source path storage for the vertex generators.
//!
//! A [`VertexSequence`] keeps the accumulated source vertices of one sub-path
//! together with the length of the segment leaving each vertex. Coincident
//! points are collapsed as they arrive so that the join math never sees a
//! zero-length segment.

use crate::basics::PointD;
use crate::math::{calc_distance, lerp, VERTEX_DIST_EPSILON};

/// A final open segment this many times shorter than its predecessor is dropped.
const SPUR_RATIO: f64 = 10.0;

/// A vertex plus the distance to the next vertex of its sequence.
///
/// `dist` is only meaningful once the owning sequence has been closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexDist {
    pub x: f64,
    pub y: f64,
    pub dist: f64,
}

impl VertexDist {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, dist: 0.0 }
    }

    #[inline]
    pub const fn point(&self) -> PointD {
        PointD::new(self.x, self.y)
    }

    /// Store the distance to `next` and report whether the two points are
    /// distinct. Coincident points get `1 / VERTEX_DIST_EPSILON` so that
    /// dividing by `dist` stays finite.
    pub fn measure(&mut self, next: &VertexDist) -> bool {
        self.dist = calc_distance(self.point(), next.point());
        if self.dist > VERTEX_DIST_EPSILON {
            return true;
        }
        self.dist = 1.0 / VERTEX_DIST_EPSILON;
        false
    }
}

/// Ordered vertex buffer with lazy coincident-point collapsing.
#[derive(Debug, Clone, Default)]
pub struct VertexSequence {
    vertices: Vec<VertexDist>,
}

impl VertexSequence {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Append a vertex. If the current last vertex turned out to coincide
    /// with the one before it, it is dropped first.
    pub fn add(&mut self, v: VertexDist) {
        let n = self.vertices.len();
        if n > 1 {
            let last = self.vertices[n - 1];
            if !self.vertices[n - 2].measure(&last) {
                self.vertices.pop();
            }
        }
        self.vertices.push(v);
    }

    /// Replace the last vertex; a repeated move-to overrides the previous one.
    pub fn modify_last(&mut self, v: VertexDist) {
        self.vertices.pop();
        self.add(v);
    }

    pub fn remove_last(&mut self) {
        self.vertices.pop();
    }

    pub fn remove_all(&mut self) {
        self.vertices.clear();
    }

    /// Finalize the sequence.
    ///
    /// Drops trailing coincident vertices (and, for closed paths, trailing
    /// vertices that coincide with the first one), drops the last vertex of an
    /// open path whose final segment is at least ten times shorter than the
    /// one before it, then measures every segment. The last vertex
    /// measures the closing segment back to vertex 0.
    pub fn close(&mut self, closed: bool) {
        while self.vertices.len() > 1 {
            let n = self.vertices.len();
            let last = self.vertices[n - 1];
            if self.vertices[n - 2].measure(&last) {
                break;
            }
            self.vertices.pop();
            self.modify_last(last);
        }

        if closed {
            while self.vertices.len() > 1 {
                let n = self.vertices.len();
                let first = self.vertices[0];
                if self.vertices[n - 1].measure(&first) {
                    break;
                }
                self.vertices.pop();
            }
        } else {
            self.remove_trailing_spur();
        }

        self.measure_all();
    }

    fn remove_trailing_spur(&mut self) {
        let n = self.vertices.len();
        if n < 3 {
            return;
        }
        let a = self.vertices[n - 3].point();
        let b = self.vertices[n - 2].point();
        let c = self.vertices[n - 1].point();
        let prev_len = calc_distance(a, b);
        let last_len = calc_distance(b, c);
        if last_len * SPUR_RATIO <= prev_len {
            log::trace!(
                "dropping trailing spur of length {} after a segment of {}",
                last_len,
                prev_len
            );
            self.vertices.pop();
        }
    }

    fn measure_all(&mut self) {
        let n = self.vertices.len();
        for i in 0..n {
            let next = self.vertices[(i + 1) % n];
            self.vertices[i].measure(&next);
        }
    }

    /// The vertex before `i`, wrapping around.
    #[inline]
    pub fn prev(&self, i: usize) -> &VertexDist {
        let n = self.vertices.len();
        &self.vertices[(i + n - 1) % n]
    }

    #[inline]
    pub fn curr(&self, i: usize) -> &VertexDist {
        &self.vertices[i]
    }

    /// The vertex after `i`, wrapping around.
    #[inline]
    pub fn next(&self, i: usize) -> &VertexDist {
        &self.vertices[(i + 1) % self.vertices.len()]
    }

    pub fn last(&self) -> Option<&VertexDist> {
        self.vertices.last()
    }

    pub fn as_slice(&self) -> &[VertexDist] {
        &self.vertices
    }

    pub fn iter(&self) -> core::slice::Iter<'_, VertexDist> {
        self.vertices.iter()
    }

    /// Sum of the open segment lengths (the closing segment excluded).
    pub fn open_length(&self) -> f64 {
        let n = self.vertices.len();
        if n < 2 {
            return 0.0;
        }
        self.vertices[..n - 1].iter().map(|v| v.dist).sum()
    }
}

impl core::ops::Index<usize> for VertexSequence {
    type Output = VertexDist;

    fn index(&self, i: usize) -> &VertexDist {
        &self.vertices[i]
    }
}

impl core::ops::IndexMut<usize> for VertexSequence {
    fn index_mut(&mut self, i: usize) -> &mut VertexDist {
        &mut self.vertices[i]
    }
}

/// Trim `s` units of arc length off the end of a closed-over sequence.
///
/// Whole trailing segments are removed first, then the new last vertex is
/// interpolated along the remaining segment. A trim covering the whole path
/// empties the sequence.
pub fn shorten_path(seq: &mut VertexSequence, s: f64, closed: bool) {
    if s <= 0.0 || seq.len() < 2 {
        return;
    }
    let mut s = s;
    while seq.len() >= 2 {
        let d = seq[seq.len() - 2].dist;
        if d > s {
            break;
        }
        seq.remove_last();
        s -= d;
    }
    if seq.len() < 2 {
        log::debug!("shorten distance exceeds the path length, nothing left");
        seq.remove_all();
        return;
    }

    let n = seq.len() - 1;
    let prev = seq[n - 1];
    let k = (prev.dist - s) / prev.dist;
    let p = lerp(prev.point(), seq[n].point(), k);
    seq[n].x = p.x;
    seq[n].y = p.y;
    let last = seq[n];
    if !seq[n - 1].measure(&last) {
        seq.remove_last();
    }
    seq.close(closed);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn seq_of(points: &[(f64, f64)]) -> VertexSequence {
        let mut seq = VertexSequence::new();
        for &(x, y) in points {
            seq.add(VertexDist::new(x, y));
        }
        seq
    }

    #[test]
    fn test_measure_coincident() {
        let mut a = VertexDist::new(1.0, 2.0);
        assert!(!a.measure(&VertexDist::new(1.0, 2.0)));
        assert_eq!(a.dist, 1.0 / VERTEX_DIST_EPSILON);
        assert!(a.measure(&VertexDist::new(4.0, 6.0)));
        assert!((a.dist - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_add_collapses_duplicates() {
        let mut seq = seq_of(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        seq.close(false);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq[2].x, 2.0);
    }

    #[test]
    fn test_modify_last_replaces_move() {
        let mut seq = VertexSequence::new();
        seq.modify_last(VertexDist::new(5.0, 5.0));
        seq.modify_last(VertexDist::new(7.0, 7.0));
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0].x, 7.0);
    }

    #[test]
    fn test_close_measures_every_segment() {
        let mut seq = seq_of(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]);
        seq.close(true);
        assert!((seq[0].dist - 3.0).abs() < 1e-12);
        assert!((seq[1].dist - 4.0).abs() < 1e-12);
        assert!((seq[2].dist - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_close_drops_point_equal_to_first() {
        let mut seq = seq_of(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 0.0)]);
        seq.close(true);
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn test_close_removes_trailing_spur() {
        let mut seq = seq_of(&[(0.0, 0.0), (50.0, 0.0), (100.0, 0.0), (99.0, 0.0)]);
        seq.close(false);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq[2].x, 100.0);
    }

    #[test]
    fn test_close_drops_short_final_segment() {
        let mut seq = seq_of(&[(0.0, 0.0), (100.0, 0.0), (100.0, 5.0)]);
        seq.close(false);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[1].x, 100.0);
        assert_eq!(seq[1].y, 0.0);
    }

    #[test]
    fn test_close_keeps_final_segment_under_ratio() {
        let mut seq = seq_of(&[(0.0, 0.0), (100.0, 0.0), (100.0, 11.0)]);
        seq.close(false);
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn test_close_keeps_short_final_segment_of_closed_path() {
        let mut seq = seq_of(&[(0.0, 0.0), (100.0, 0.0), (100.0, 5.0)]);
        seq.close(true);
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn test_cyclic_neighbours() {
        let mut seq = seq_of(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        seq.close(true);
        assert_eq!(seq.prev(0).y, 1.0);
        assert_eq!(seq.next(2).x, 0.0);
        assert_eq!(seq.curr(1).x, 1.0);
    }

    #[test]
    fn test_shorten_interpolates_end() {
        let mut seq = seq_of(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
        seq.close(false);
        shorten_path(&mut seq, 5.0, false);
        assert_eq!(seq.len(), 3);
        assert!((seq[2].x - 15.0).abs() < 1e-12);
        assert!((seq.open_length() - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_shorten_removes_whole_segments() {
        let mut seq = seq_of(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
        seq.close(false);
        shorten_path(&mut seq, 12.5, false);
        assert_eq!(seq.len(), 2);
        assert!((seq[1].x - 7.5).abs() < 1e-12);
    }

    #[test]
    fn test_shorten_past_the_start_empties() {
        let mut seq = seq_of(&[(0.0, 0.0), (10.0, 0.0)]);
        seq.close(false);
        shorten_path(&mut seq, 25.0, false);
        assert!(seq.is_empty());
    }
}
