//! Dash vertex generator.
//!
//! Cuts a continuous center-line into dashes. Each dash starts with a
//! `MOVE_TO` and continues with `LINE_TO`s, so the output can go straight
//! into a stroke generator.

use arrayvec::ArrayVec;
#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::basics::{PathCommand, Vertex, VertexSource};
use crate::conv_adaptor_vcgen::VcgenGenerator;
use crate::error::StyleError;
use crate::vertex_sequence::{shorten_path, VertexDist, VertexSequence};

// ============================================================================
// DashPattern
// ============================================================================

const MAX_DASH_LENGTHS: usize = 32;

/// Alternating dash and gap lengths plus a start phase.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct DashPattern {
    lengths: ArrayVec<f64, MAX_DASH_LENGTHS>,
    start: f64,
}

impl DashPattern {
    /// Room for 16 dash/gap pairs.
    pub const MAX_LENGTHS: usize = MAX_DASH_LENGTHS;

    pub fn new() -> Self {
        Self {
            lengths: ArrayVec::new(),
            start: 0.0,
        }
    }

    /// Build a pattern from `(dash, gap)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, StyleError> {
        let mut pattern = Self::new();
        for &(dash, gap) in pairs {
            pattern.try_add(dash, gap)?;
        }
        Ok(pattern)
    }

    /// Append one dash/gap pair.
    pub fn try_add(&mut self, dash: f64, gap: f64) -> Result<(), StyleError> {
        for len in [dash, gap] {
            if !len.is_finite() || len < 0.0 {
                return Err(StyleError::InvalidDashLength(len));
            }
        }
        if self.lengths.remaining_capacity() < 2 {
            return Err(StyleError::TooManyDashes {
                max: Self::MAX_LENGTHS,
            });
        }
        self.lengths.push(dash);
        self.lengths.push(gap);
        Ok(())
    }

    pub fn with_start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    pub fn set_start(&mut self, start: f64) {
        self.start = start;
    }

    /// Start phase. Only its magnitude is used.
    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    pub fn clear(&mut self) {
        self.lengths.clear();
    }

    pub fn total_length(&self) -> f64 {
        self.lengths.iter().sum()
    }

    /// Whether the pattern can drive the generator at all.
    pub fn is_usable(&self) -> bool {
        self.lengths.len() >= 2 && self.total_length() > 0.0
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        if let Some(&bad) = self.lengths.iter().find(|l| !l.is_finite() || **l < 0.0) {
            return Err(StyleError::InvalidDashLength(bad));
        }
        if !self.is_usable() {
            return Err(StyleError::EmptyDashPattern);
        }
        Ok(())
    }

    /// Position `phase` units into the pattern, wrapped to one period.
    pub fn cursor_at(&self, phase: f64) -> DashCursor {
        let total = self.total_length();
        let mut cursor = DashCursor::default();
        if total.is_nan() || total <= 0.0 {
            return cursor;
        }
        let mut ds = phase.abs() % total;
        while ds > 0.0 {
            let len = self.lengths[cursor.index];
            if ds > len {
                ds -= len;
                cursor.advance(self.lengths.len());
            } else {
                cursor.offset = ds;
                ds = 0.0;
            }
        }
        cursor
    }
}

/// Position inside a [`DashPattern`]: the current element and how far into
/// it the walk has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashCursor {
    pub index: usize,
    pub offset: f64,
}

impl DashCursor {
    /// Odd elements are gaps.
    #[inline]
    pub fn in_gap(&self) -> bool {
        self.index & 1 != 0
    }

    #[inline]
    fn advance(&mut self, count: usize) {
        self.index += 1;
        if self.index >= count {
            self.index = 0;
        }
        self.offset = 0.0;
    }
}

// ============================================================================
// VcgenDash
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum Status {
    Initial,
    Ready,
    Polyline,
    Stop,
}

/// Dash vertex generator.
#[derive(Debug, Clone)]
pub struct VcgenDash {
    pattern: DashPattern,
    cursor: DashCursor,
    shorten: f64,
    curr_rest: f64,
    v1: usize,
    v2: usize,
    src_vertices: VertexSequence,
    closed: bool,
    status: Status,
    src_vertex: usize,
}

impl VcgenDash {
    pub fn new() -> Self {
        Self::with_pattern(DashPattern::new())
    }

    pub fn with_pattern(pattern: DashPattern) -> Self {
        Self {
            pattern,
            cursor: DashCursor::default(),
            shorten: 0.0,
            curr_rest: 0.0,
            v1: 0,
            v2: 0,
            src_vertices: VertexSequence::new(),
            closed: false,
            status: Status::Initial,
            src_vertex: 0,
        }
    }

    pub fn remove_all_dashes(&mut self) {
        self.pattern.clear();
        self.cursor = DashCursor::default();
    }

    /// Append a dash/gap pair. Pairs past the pattern capacity, or with
    /// invalid lengths, are dropped.
    pub fn add_dash(&mut self, dash_len: f64, gap_len: f64) {
        if let Err(e) = self.pattern.try_add(dash_len, gap_len) {
            log::warn!("dash ({}, {}) ignored: {}", dash_len, gap_len, e);
        }
    }

    /// Set the start phase. Its magnitude is wrapped to one pattern period.
    pub fn dash_start(&mut self, ds: f64) {
        self.pattern.set_start(ds);
        self.cursor = self.pattern.cursor_at(ds);
    }

    pub fn set_pattern(&mut self, pattern: &DashPattern) {
        self.pattern = pattern.clone();
        self.cursor = self.pattern.cursor_at(self.pattern.start());
    }

    pub fn pattern(&self) -> &DashPattern {
        &self.pattern
    }

    pub fn set_shorten(&mut self, s: f64) {
        self.shorten = s;
    }

    pub fn shorten(&self) -> f64 {
        self.shorten
    }
}

impl Default for VcgenDash {
    fn default() -> Self {
        Self::new()
    }
}

impl VcgenGenerator for VcgenDash {
    fn remove_all(&mut self) {
        self.status = Status::Initial;
        self.src_vertices.remove_all();
        self.closed = false;
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

impl VertexSource for VcgenDash {
    fn rewind(&mut self, _path_id: u32) {
        if self.status == Status::Initial {
            self.src_vertices.close(self.closed);
            shorten_path(&mut self.src_vertices, self.shorten, self.closed);
            log::trace!(
                "dash: finalized {} vertices, closed: {}",
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
                    if !self.pattern.is_usable() || self.src_vertices.len() < 2 {
                        log::debug!(
                            "dash: nothing to do ({} lengths, {} vertices)",
                            self.pattern.len(),
                            self.src_vertices.len()
                        );
                        self.status = Status::Stop;
                        continue;
                    }
                    self.status = Status::Polyline;
                    self.src_vertex = 1;
                    self.v1 = 0;
                    self.v2 = 1;
                    self.curr_rest = self.src_vertices[0].dist;
                    self.cursor = self.pattern.cursor_at(self.pattern.start());
                    let v0 = self.src_vertices[0];
                    return Vertex::move_to(v0.x, v0.y);
                }
                Status::Polyline => {
                    let lengths = self.pattern.lengths();
                    let dash_rest = lengths[self.cursor.index] - self.cursor.offset;

                    // The point closing a gap starts the next dash.
                    let cmd = if self.cursor.in_gap() {
                        PathCommand::MOVE_TO
                    } else {
                        PathCommand::LINE_TO
                    };

                    let v1 = self.src_vertices[self.v1];
                    let v2 = self.src_vertices[self.v2];

                    if self.curr_rest > dash_rest {
                        self.curr_rest -= dash_rest;
                        self.cursor.advance(lengths.len());
                        let k = self.curr_rest / v1.dist;
                        return Vertex::new(v2.x - (v2.x - v1.x) * k, v2.y - (v2.y - v1.y) * k, cmd);
                    }

                    self.cursor.offset += self.curr_rest;
                    self.src_vertex += 1;
                    self.v1 = self.v2;
                    self.curr_rest = self.src_vertices[self.v1].dist;
                    let n = self.src_vertices.len();
                    if self.closed {
                        if self.src_vertex > n {
                            self.status = Status::Stop;
                        } else {
                            self.v2 = if self.src_vertex >= n { 0 } else { self.src_vertex };
                        }
                    } else if self.src_vertex >= n {
                        self.status = Status::Stop;
                    } else {
                        self.v2 = self.src_vertex;
                    }
                    return Vertex::new(v2.x, v2.y, cmd);
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
