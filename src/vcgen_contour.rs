//! Contour vertex generator.
//!
//! Offsets a polygon by a signed distance, producing one closed ring made of
//! joins only. With a known orientation, positive widths grow the polygon
//! and negative widths shrink it.

use crate::basics::{PathCommand, PointD, Vertex, VertexSource};
use crate::conv_adaptor_vcgen::VcgenGenerator;
use crate::math::calc_polygon_area;
use crate::math_stroke::{InnerJoin, LineJoin, MathStroke, StrokeStyle};
use crate::vertex_sequence::{VertexDist, VertexSequence};

// ============================================================================
// VcgenContour
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum Status {
    Initial,
    Ready,
    Outline,
    OutVertices,
    EndPoly,
    Stop,
}

/// Contour vertex generator.
#[derive(Debug, Clone)]
pub struct VcgenContour {
    stroker: MathStroke,
    width: f64,
    src_vertices: VertexSequence,
    out_vertices: Vec<PointD>,
    status: Status,
    src_vertex: usize,
    out_vertex: usize,
    closed: bool,
    orientation: u32,
    auto_detect: bool,
}

impl VcgenContour {
    pub fn new() -> Self {
        let mut gen = Self {
            stroker: MathStroke::new(),
            width: 1.0,
            src_vertices: VertexSequence::new(),
            out_vertices: Vec::new(),
            status: Status::Initial,
            src_vertex: 0,
            out_vertex: 0,
            closed: false,
            orientation: PathCommand::FLAG_NONE,
            auto_detect: false,
        };
        gen.set_width(1.0);
        gen
    }

    /// Take joins, limits and scale from `style`; `style.width` is the
    /// offset distance.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.stroker.set_style(style);
        self.set_width(style.width);
    }

    pub fn set_line_join(&mut self, lj: LineJoin) {
        self.stroker.set_line_join(lj);
    }
    pub fn line_join(&self) -> LineJoin {
        self.stroker.line_join()
    }

    pub fn set_inner_join(&mut self, ij: InnerJoin) {
        self.stroker.set_inner_join(ij);
    }
    pub fn inner_join(&self) -> InnerJoin {
        self.stroker.inner_join()
    }

    /// Signed offset distance.
    pub fn set_width(&mut self, w: f64) {
        self.width = w;
        self.stroker.set_width(w * 2.0);
    }
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_miter_limit(&mut self, ml: f64) {
        self.stroker.set_miter_limit(ml);
    }
    pub fn miter_limit(&self) -> f64 {
        self.stroker.miter_limit()
    }

    pub fn set_miter_limit_theta(&mut self, t: f64) {
        self.stroker.set_miter_limit_theta(t);
    }

    pub fn set_inner_miter_limit(&mut self, ml: f64) {
        self.stroker.set_inner_miter_limit(ml);
    }
    pub fn inner_miter_limit(&self) -> f64 {
        self.stroker.inner_miter_limit()
    }

    pub fn set_approximation_scale(&mut self, s: f64) {
        self.stroker.set_approximation_scale(s);
    }
    pub fn approximation_scale(&self) -> f64 {
        self.stroker.approximation_scale()
    }

    /// Derive the orientation from the signed area when the input carries
    /// no orientation flag.
    pub fn set_auto_detect_orientation(&mut self, v: bool) {
        self.auto_detect = v;
    }
    pub fn auto_detect_orientation(&self) -> bool {
        self.auto_detect
    }
}

impl Default for VcgenContour {
    fn default() -> Self {
        Self::new()
    }
}

impl VcgenGenerator for VcgenContour {
    fn remove_all(&mut self) {
        self.src_vertices.remove_all();
        self.closed = false;
        self.orientation = PathCommand::FLAG_NONE;
        self.status = Status::Initial;
    }

    fn add_vertex(&mut self, x: f64, y: f64, cmd: PathCommand) {
        self.status = Status::Initial;
        if cmd.is_move_to() {
            self.src_vertices.modify_last(VertexDist::new(x, y));
        } else if cmd.is_vertex() {
            self.src_vertices.add(VertexDist::new(x, y));
        } else if cmd.is_end_poly() {
            self.closed = cmd.is_closed();
            if self.orientation == PathCommand::FLAG_NONE {
                self.orientation = cmd.orientation();
            }
        }
    }
}

impl VertexSource for VcgenContour {
    fn rewind(&mut self, _path_id: u32) {
        if self.status == Status::Initial {
            self.src_vertices.close(true);
            if self.auto_detect && self.orientation == PathCommand::FLAG_NONE {
                let area = calc_polygon_area(self.src_vertices.iter().map(|v| v.point()));
                self.orientation = if area > 0.0 {
                    PathCommand::FLAG_CCW
                } else {
                    PathCommand::FLAG_CW
                };
            }
            match self.orientation {
                PathCommand::FLAG_CCW => self.stroker.set_width(self.width * 2.0),
                PathCommand::FLAG_CW => self.stroker.set_width(-self.width * 2.0),
                _ => {}
            }
            log::trace!(
                "contour: finalized {} vertices, orientation flags {:#x}",
                self.src_vertices.len(),
                self.orientation
            );
        }
        self.status = Status::Ready;
        self.src_vertex = 0;
    }

    fn vertex(&mut self) -> Vertex {
        let mut cmd = PathCommand::LINE_TO;
        loop {
            match self.status {
                Status::Initial => {
                    self.rewind(0);
                }
                Status::Ready => {
                    if self.src_vertices.len() < 2 + self.closed as usize {
                        log::debug!(
                            "contour: {} vertices are not enough",
                            self.src_vertices.len()
                        );
                        self.status = Status::Stop;
                        continue;
                    }
                    self.status = Status::Outline;
                    cmd = PathCommand::MOVE_TO;
                    self.src_vertex = 0;
                    self.out_vertex = 0;
                }
                Status::Outline => {
                    if self.src_vertex >= self.src_vertices.len() {
                        self.status = Status::EndPoly;
                        continue;
                    }
                    let prev = *self.src_vertices.prev(self.src_vertex);
                    let curr = *self.src_vertices.curr(self.src_vertex);
                    let next = *self.src_vertices.next(self.src_vertex);
                    self.stroker.calc_join(
                        &mut self.out_vertices,
                        &prev,
                        &curr,
                        &next,
                        prev.dist,
                        curr.dist,
                    );
                    self.src_vertex += 1;
                    self.status = Status::OutVertices;
                    self.out_vertex = 0;
                }
                Status::OutVertices => {
                    if self.out_vertex >= self.out_vertices.len() {
                        self.status = Status::Outline;
                    } else {
                        let p = self.out_vertices[self.out_vertex];
                        self.out_vertex += 1;
                        return Vertex::new(p.x, p.y, cmd);
                    }
                }
                Status::EndPoly => {
                    self.status = Status::Stop;
                    if self.closed {
                        return Vertex::end_poly(PathCommand::FLAG_CLOSE | PathCommand::FLAG_CCW);
                    }
                    return Vertex::end_poly(PathCommand::FLAG_CLOSE);
                }
                Status::Stop => {
                    return Vertex::stop();
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::vertices;

    fn collect(gen: &mut VcgenContour) -> Vec<Vertex> {
        vertices(gen, 0).collect()
    }

    fn feed(gen: &mut VcgenContour, points: &[(f64, f64)], end: Option<PathCommand>) {
        gen.remove_all();
        for (i, &(x, y)) in points.iter().enumerate() {
            let cmd = if i == 0 {
                PathCommand::MOVE_TO
            } else {
                PathCommand::LINE_TO
            };
            gen.add_vertex(x, y, cmd);
        }
        if let Some(cmd) = end {
            gen.add_vertex(0.0, 0.0, cmd);
        }
    }

    fn close() -> Option<PathCommand> {
        Some(PathCommand::end_poly(PathCommand::FLAG_CLOSE))
    }

    const SQUARE: [(f64, f64); 4] = [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)];

    fn bounds(verts: &[Vertex]) -> (f64, f64, f64, f64) {
        let drawn = verts.iter().filter(|v| v.cmd.is_vertex());
        drawn.fold(
            (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
            |(x1, y1, x2, y2), v| (x1.min(v.x), y1.min(v.y), x2.max(v.x), y2.max(v.y)),
        )
    }

    #[test]
    fn test_new_defaults() {
        let gen = VcgenContour::new();
        assert!((gen.width() - 1.0).abs() < 1e-10);
        assert!(!gen.auto_detect_orientation());
    }

    #[test]
    fn test_empty_produces_stop() {
        let mut gen = VcgenContour::new();
        assert!(collect(&mut gen).is_empty());
    }

    #[test]
    fn test_ccw_square_grows_by_width() {
        let mut gen = VcgenContour::new();
        gen.set_width(5.0);
        gen.set_auto_detect_orientation(true);
        feed(&mut gen, &SQUARE, close());

        let verts = collect(&mut gen);
        assert_eq!(verts.len(), 5);
        assert_eq!(verts[0].cmd, PathCommand::MOVE_TO);
        assert_eq!(
            verts[4].cmd,
            PathCommand::end_poly(PathCommand::FLAG_CLOSE | PathCommand::FLAG_CCW)
        );
        let (x1, y1, x2, y2) = bounds(&verts);
        assert!((x1 + 5.0).abs() < 1e-9);
        assert!((y1 + 5.0).abs() < 1e-9);
        assert!((x2 - 105.0).abs() < 1e-9);
        assert!((y2 - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_cw_square_also_grows() {
        let mut gen = VcgenContour::new();
        gen.set_width(5.0);
        gen.set_auto_detect_orientation(true);
        let cw: Vec<(f64, f64)> = SQUARE.iter().rev().copied().collect();
        feed(&mut gen, &cw, close());

        let (x1, _, x2, _) = bounds(&collect(&mut gen));
        assert!((x1 + 5.0).abs() < 1e-9);
        assert!((x2 - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_width_shrinks() {
        let mut gen = VcgenContour::new();
        gen.set_width(-5.0);
        gen.set_auto_detect_orientation(true);
        feed(&mut gen, &SQUARE, close());

        let (x1, y1, x2, y2) = bounds(&collect(&mut gen));
        assert!((x1 - 5.0).abs() < 1e-9);
        assert!((y1 - 5.0).abs() < 1e-9);
        assert!((x2 - 95.0).abs() < 1e-9);
        assert!((y2 - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_explicit_orientation_flag_wins() {
        let mut gen = VcgenContour::new();
        gen.set_width(5.0);
        gen.set_auto_detect_orientation(true);
        // Geometrically CCW but flagged CW: offsets inward.
        feed(
            &mut gen,
            &SQUARE,
            Some(PathCommand::end_poly(
                PathCommand::FLAG_CLOSE | PathCommand::FLAG_CW,
            )),
        );
        let (x1, _, x2, _) = bounds(&collect(&mut gen));
        assert!((x1 - 5.0).abs() < 1e-9);
        assert!((x2 - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_edges_at_offset_distance() {
        let mut gen = VcgenContour::new();
        gen.set_width(10.0);
        gen.set_auto_detect_orientation(true);
        feed(&mut gen, &[(50.0, 10.0), (90.0, 90.0), (10.0, 90.0)], close());

        let verts = collect(&mut gen);
        let (x1, _, x2, _) = bounds(&verts);
        assert!(x2 > 90.0);
        assert!(x1 < 10.0);
        // The bottom edge y = 90 moves to y = 100.
        let (_, _, _, y2) = bounds(&verts);
        assert!((y2 - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_open_input_is_closed_ring() {
        let mut gen = VcgenContour::new();
        gen.set_width(5.0);
        feed(&mut gen, &[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)], None);

        let verts = collect(&mut gen);
        let last = verts.last().map(|v| v.cmd);
        assert_eq!(last, Some(PathCommand::end_poly(PathCommand::FLAG_CLOSE)));
    }

    #[test]
    fn test_too_few_vertices() {
        let mut gen = VcgenContour::new();
        feed(&mut gen, &[(0.0, 0.0), (100.0, 0.0)], close());
        assert!(collect(&mut gen).is_empty());
    }

    #[test]
    fn test_rewind_replay() {
        let mut gen = VcgenContour::new();
        gen.set_width(5.0);
        gen.set_line_join(LineJoin::Round);
        gen.set_auto_detect_orientation(true);
        feed(&mut gen, &[(0.0, 0.0), (100.0, 0.0), (50.0, 80.0)], close());
        assert_eq!(collect(&mut gen), collect(&mut gen));
    }

    #[test]
    fn test_set_style() {
        let mut gen = VcgenContour::new();
        gen.set_style(
            StrokeStyle::DEFAULT
                .with_width(3.0)
                .with_line_join(LineJoin::Bevel),
        );
        assert_eq!(gen.width(), 3.0);
        assert_eq!(gen.line_join(), LineJoin::Bevel);
    }
}
