//! Smooth polygon vertex generator.
//!
//! Replaces every corner of a polyline or polygon with Bézier control
//! points so that the path passes through all of its vertices with a
//! continuous tangent. The output contains `CURVE3` / `CURVE4` commands and
//! needs a curve flattener downstream.

use crate::basics::{PathCommand, PointD, Vertex, VertexSource};
use crate::conv_adaptor_vcgen::VcgenGenerator;
use crate::error::StyleError;
use crate::math::VERTEX_DIST_EPSILON;
use crate::vertex_sequence::{VertexDist, VertexSequence};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Status {
    Initial,
    Ready,
    Polygon,
    CtrlB,
    CtrlE,
    Ctrl1,
    Ctrl2,
    EndPoly,
    Stop,
}

/// Edge length used for the control point ratios. Degenerate edges and the
/// coincident-point sentinel count as unit length.
#[inline]
fn edge_len(v: &VertexDist) -> f64 {
    if v.dist <= VERTEX_DIST_EPSILON || v.dist >= 1.0 / VERTEX_DIST_EPSILON {
        1.0
    } else {
        v.dist
    }
}

/// Smooth polygon vertex generator.
#[derive(Debug, Clone)]
pub struct VcgenSmoothPoly1 {
    src_vertices: VertexSequence,
    // Stored halved.
    smooth_value: f64,
    closed: bool,
    status: Status,
    src_vertex: usize,
    ctrl1: PointD,
    ctrl2: PointD,
}

impl VcgenSmoothPoly1 {
    pub fn new() -> Self {
        Self {
            src_vertices: VertexSequence::new(),
            smooth_value: 0.5,
            closed: false,
            status: Status::Initial,
            src_vertex: 0,
            ctrl1: PointD::default(),
            ctrl2: PointD::default(),
        }
    }

    /// `0` keeps the corners sharp, `1` gives the roundest result.
    pub fn set_smooth_value(&mut self, v: f64) {
        self.smooth_value = v * 0.5;
    }

    /// Like [`set_smooth_value`](Self::set_smooth_value), rejecting values
    /// outside `[0, 1]`.
    pub fn try_set_smooth_value(&mut self, v: f64) -> Result<(), StyleError> {
        if !(0.0..=1.0).contains(&v) {
            return Err(StyleError::InvalidSmoothValue(v));
        }
        self.set_smooth_value(v);
        Ok(())
    }

    pub fn smooth_value(&self) -> f64 {
        self.smooth_value * 2.0
    }

    /// Control points for the segment `v1 → v2`, with `v0` before it and
    /// `v3` after it.
    fn calculate(&mut self, v0: &VertexDist, v1: &VertexDist, v2: &VertexDist, v3: &VertexDist) {
        let d0 = edge_len(v0);
        let d1 = edge_len(v1);
        let d2 = edge_len(v2);
        let k1 = d0 / (d0 + d1);
        let k2 = d1 / (d1 + d2);

        let xm1 = v0.x + (v2.x - v0.x) * k1;
        let ym1 = v0.y + (v2.y - v0.y) * k1;
        let xm2 = v1.x + (v3.x - v1.x) * k2;
        let ym2 = v1.y + (v3.y - v1.y) * k2;

        self.ctrl1 = PointD::new(
            v1.x + self.smooth_value * (v2.x - xm1),
            v1.y + self.smooth_value * (v2.y - ym1),
        );
        self.ctrl2 = PointD::new(
            v2.x + self.smooth_value * (v1.x - xm2),
            v2.y + self.smooth_value * (v1.y - ym2),
        );
    }
}

impl Default for VcgenSmoothPoly1 {
    fn default() -> Self {
        Self::new()
    }
}

impl VcgenGenerator for VcgenSmoothPoly1 {
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

impl VertexSource for VcgenSmoothPoly1 {
    fn rewind(&mut self, _path_id: u32) {
        if self.status == Status::Initial {
            self.src_vertices.close(self.closed);
            log::trace!(
                "smooth: finalized {} vertices, closed: {}",
                self.src_vertices.len(),
                self.closed
            );
        }
        self.status = Status::Ready;
        self.src_vertex = 0;
    }

    fn vertex(&mut self) -> Vertex {
        loop {
            match self.status {
                Status::Initial => {
                    self.rewind(0);
                }
                Status::Ready => {
                    let n = self.src_vertices.len();
                    if n < 2 {
                        log::debug!("smooth: {} vertices are not enough", n);
                        self.status = Status::Stop;
                        continue;
                    }
                    if n == 2 {
                        // A single segment stays straight.
                        let v = self.src_vertices[self.src_vertex];
                        self.src_vertex += 1;
                        match self.src_vertex {
                            1 => return Vertex::move_to(v.x, v.y),
                            _ => {
                                self.status = Status::Stop;
                                return Vertex::line_to(v.x, v.y);
                            }
                        }
                    }
                    self.status = Status::Polygon;
                    self.src_vertex = 0;
                }
                Status::Polygon => {
                    let n = self.src_vertices.len();
                    if self.closed {
                        if self.src_vertex >= n {
                            let v = self.src_vertices[0];
                            self.status = Status::EndPoly;
                            return Vertex::new(v.x, v.y, PathCommand::CURVE4);
                        }
                    } else if self.src_vertex >= n - 1 {
                        let v = self.src_vertices[n - 1];
                        self.status = Status::EndPoly;
                        return Vertex::new(v.x, v.y, PathCommand::CURVE3);
                    }

                    let i = self.src_vertex;
                    let v0 = *self.src_vertices.prev(i);
                    let v1 = *self.src_vertices.curr(i);
                    let v2 = *self.src_vertices.next(i);
                    let v3 = *self.src_vertices.next(i + 1);
                    self.calculate(&v0, &v1, &v2, &v3);
                    self.src_vertex += 1;

                    // The vertex ends the previous segment, whose kind decides
                    // the command.
                    let cmd = if self.src_vertex == 1 {
                        PathCommand::MOVE_TO
                    } else if !self.closed && self.src_vertex == 2 {
                        PathCommand::CURVE3
                    } else {
                        PathCommand::CURVE4
                    };
                    self.status = if self.closed {
                        Status::Ctrl1
                    } else if self.src_vertex == 1 {
                        Status::CtrlB
                    } else if self.src_vertex >= n - 1 {
                        Status::CtrlE
                    } else {
                        Status::Ctrl1
                    };
                    return Vertex::new(v1.x, v1.y, cmd);
                }
                Status::CtrlB => {
                    self.status = Status::Polygon;
                    return Vertex::new(self.ctrl2.x, self.ctrl2.y, PathCommand::CURVE3);
                }
                Status::CtrlE => {
                    self.status = Status::Polygon;
                    return Vertex::new(self.ctrl1.x, self.ctrl1.y, PathCommand::CURVE3);
                }
                Status::Ctrl1 => {
                    self.status = Status::Ctrl2;
                    return Vertex::new(self.ctrl1.x, self.ctrl1.y, PathCommand::CURVE4);
                }
                Status::Ctrl2 => {
                    self.status = Status::Polygon;
                    return Vertex::new(self.ctrl2.x, self.ctrl2.y, PathCommand::CURVE4);
                }
                Status::EndPoly => {
                    self.status = Status::Stop;
                    let flags = if self.closed {
                        PathCommand::FLAG_CLOSE
                    } else {
                        PathCommand::FLAG_NONE
                    };
                    return Vertex::end_poly(flags);
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
