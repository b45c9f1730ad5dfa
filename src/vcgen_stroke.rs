//! Stroke vertex generator.
//!
//! Turns one accumulated center-line sub-path into the outline of a stroke
//! using [`MathStroke`] for the caps and joins.

use crate::basics::{PathCommand, PointD, Vertex, VertexSource};
use crate::conv_adaptor_vcgen::VcgenGenerator;
use crate::math_stroke::{InnerJoin, LineCap, LineJoin, MathStroke, StrokeStyle};
use crate::vertex_sequence::{shorten_path, VertexDist, VertexSequence};

// ============================================================================
// VcgenStroke
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum Status {
    Initial,
    Ready,
    Cap1,
    Cap2,
    Outline1,
    CloseFirst,
    Outline2,
    OutVertices,
    EndPoly1,
    EndPoly2,
    Stop,
}

/// Stroke vertex generator.
///
/// An open sub-path produces one closed outline running along one side,
/// around the end cap, back along the other side and around the start cap,
/// ended by a plain `END_POLY`. A closed sub-path produces two rings: the
/// outer one ended by `END_POLY|CLOSE|CCW` and the inner one by
/// `END_POLY|CLOSE|CW`.
#[derive(Debug, Clone)]
pub struct VcgenStroke {
    stroker: MathStroke,
    src_vertices: VertexSequence,
    out_vertices: Vec<PointD>,
    shorten: f64,
    closed: bool,
    status: Status,
    prev_status: Status,
    src_vertex: usize,
    out_vertex: usize,
}

impl VcgenStroke {
    pub fn new() -> Self {
        Self::with_style(StrokeStyle::DEFAULT)
    }

    pub fn with_style(style: StrokeStyle) -> Self {
        Self {
            stroker: MathStroke::with_style(style),
            src_vertices: VertexSequence::new(),
            out_vertices: Vec::new(),
            shorten: 0.0,
            closed: false,
            status: Status::Initial,
            prev_status: Status::Initial,
            src_vertex: 0,
            out_vertex: 0,
        }
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.stroker.set_style(style);
    }
    pub fn style(&self) -> &StrokeStyle {
        self.stroker.style()
    }

    pub fn set_line_cap(&mut self, lc: LineCap) {
        self.stroker.set_line_cap(lc);
    }
    pub fn line_cap(&self) -> LineCap {
        self.stroker.line_cap()
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

    pub fn set_width(&mut self, w: f64) {
        self.stroker.set_width(w);
    }
    pub fn width(&self) -> f64 {
        self.stroker.width()
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

    /// Trim this much arc length off the end of the path before stroking.
    pub fn set_shorten(&mut self, s: f64) {
        self.shorten = s;
    }
    pub fn shorten(&self) -> f64 {
        self.shorten
    }

    fn emit_join(&mut self, prev: VertexDist, curr: VertexDist, next: VertexDist, l1: f64, l2: f64) {
        self.stroker
            .calc_join(&mut self.out_vertices, &prev, &curr, &next, l1, l2);
    }
}

impl Default for VcgenStroke {
    fn default() -> Self {
        Self::new()
    }
}

impl VcgenGenerator for VcgenStroke {
    fn remove_all(&mut self) {
        self.src_vertices.remove_all();
        self.closed = false;
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
        }
    }
}

impl VertexSource for VcgenStroke {
    fn rewind(&mut self, _path_id: u32) {
        if self.status == Status::Initial {
            self.src_vertices.close(self.closed);
            shorten_path(&mut self.src_vertices, self.shorten, self.closed);
            log::trace!(
                "stroke: finalized {} vertices, closed: {}",
                self.src_vertices.len(),
                self.closed
            );
        }
        self.status = Status::Ready;
        self.src_vertex = 0;
        self.out_vertex = 0;
    }

    fn vertex(&mut self) -> Vertex {
        // Only the first vertex of each outline is a move-to.
        let mut cmd = PathCommand::LINE_TO;
        loop {
            match self.status {
                Status::Initial => {
                    self.rewind(0);
                }
                Status::Ready => {
                    if self.src_vertices.len() < 2 + self.closed as usize {
                        log::debug!(
                            "stroke: {} vertices are not enough for a {} path",
                            self.src_vertices.len(),
                            if self.closed { "closed" } else { "open" }
                        );
                        self.status = Status::Stop;
                        continue;
                    }
                    self.status = if self.closed {
                        Status::Outline1
                    } else {
                        Status::Cap1
                    };
                    cmd = PathCommand::MOVE_TO;
                    self.src_vertex = 0;
                    self.out_vertex = 0;
                }
                Status::Cap1 => {
                    let v0 = *self.src_vertices.curr(0);
                    let v1 = *self.src_vertices.curr(1);
                    self.stroker
                        .calc_cap(&mut self.out_vertices, &v0, &v1, v0.dist);
                    self.src_vertex = 1;
                    self.prev_status = Status::Outline1;
                    self.status = Status::OutVertices;
                    self.out_vertex = 0;
                }
                Status::Cap2 => {
                    let n = self.src_vertices.len();
                    let v0 = *self.src_vertices.curr(n - 1);
                    let v1 = *self.src_vertices.curr(n - 2);
                    self.stroker
                        .calc_cap(&mut self.out_vertices, &v0, &v1, v1.dist);
                    self.prev_status = Status::Outline2;
                    self.status = Status::OutVertices;
                    self.out_vertex = 0;
                }
                Status::Outline1 => {
                    if self.closed {
                        if self.src_vertex >= self.src_vertices.len() {
                            self.prev_status = Status::CloseFirst;
                            self.status = Status::EndPoly1;
                            continue;
                        }
                    } else if self.src_vertex >= self.src_vertices.len() - 1 {
                        self.status = Status::Cap2;
                        continue;
                    }
                    let prev = *self.src_vertices.prev(self.src_vertex);
                    let curr = *self.src_vertices.curr(self.src_vertex);
                    let next = *self.src_vertices.next(self.src_vertex);
                    self.emit_join(prev, curr, next, prev.dist, curr.dist);
                    self.src_vertex += 1;
                    self.prev_status = self.status;
                    self.status = Status::OutVertices;
                    self.out_vertex = 0;
                }
                Status::CloseFirst => {
                    self.status = Status::Outline2;
                    cmd = PathCommand::MOVE_TO;
                }
                Status::Outline2 => {
                    if self.src_vertex <= (!self.closed) as usize {
                        self.status = Status::EndPoly2;
                        self.prev_status = Status::Stop;
                        continue;
                    }
                    self.src_vertex -= 1;
                    let next = *self.src_vertices.next(self.src_vertex);
                    let curr = *self.src_vertices.curr(self.src_vertex);
                    let prev = *self.src_vertices.prev(self.src_vertex);
                    self.emit_join(next, curr, prev, curr.dist, prev.dist);
                    self.prev_status = self.status;
                    self.status = Status::OutVertices;
                    self.out_vertex = 0;
                }
                Status::OutVertices => {
                    if self.out_vertex >= self.out_vertices.len() {
                        self.status = self.prev_status;
                    } else {
                        let p = self.out_vertices[self.out_vertex];
                        self.out_vertex += 1;
                        return Vertex::new(p.x, p.y, cmd);
                    }
                }
                Status::EndPoly1 => {
                    self.status = self.prev_status;
                    return Vertex::end_poly(PathCommand::FLAG_CLOSE | PathCommand::FLAG_CCW);
                }
                Status::EndPoly2 => {
                    self.status = self.prev_status;
                    if self.closed {
                        return Vertex::end_poly(PathCommand::FLAG_CLOSE | PathCommand::FLAG_CW);
                    }
                    return Vertex::end_poly(PathCommand::FLAG_NONE);
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
