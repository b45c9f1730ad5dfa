//! Polygon clipping processor.
//!
//! Clips closed polygons to a rectangle edge by edge. Parts of the polygon
//! outside the box are replaced by runs along the box border, so the result
//! is still a single closed polygon suitable for filling.

use arrayvec::ArrayVec;

use crate::basics::{PathCommand, PointD, RectD, Vertex};
use crate::clip_liang_barsky::{clip_liang_barsky, clipping_flags};
use crate::conv_adaptor_vpgen::VpgenProcessor;

/// Polygon clipping processor.
#[derive(Debug, Clone)]
pub struct VpgenClipPolygon {
    clip_box: RectD,
    x1: f64,
    y1: f64,
    clip_flags: u32,
    out: ArrayVec<PointD, 4>,
    vertex: usize,
    cmd: PathCommand,
}

impl VpgenClipPolygon {
    pub fn new() -> Self {
        Self {
            clip_box: RectD::new(0.0, 0.0, 1.0, 1.0),
            x1: 0.0,
            y1: 0.0,
            clip_flags: 0,
            out: ArrayVec::new(),
            vertex: 0,
            cmd: PathCommand::MOVE_TO,
        }
    }

    /// Set the clip rectangle; the corners may come in any order.
    pub fn set_clip_box(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.clip_box = RectD::new(x1, y1, x2, y2).normalized();
    }

    pub fn clip_box(&self) -> &RectD {
        &self.clip_box
    }

    fn clear_output(&mut self) {
        self.vertex = 0;
        self.out.clear();
    }
}

impl Default for VpgenClipPolygon {
    fn default() -> Self {
        Self::new()
    }
}

impl VpgenProcessor for VpgenClipPolygon {
    fn reset(&mut self) {
        self.clear_output();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.clear_output();
        self.clip_flags = clipping_flags(x, y, &self.clip_box);
        if self.clip_flags == 0 {
            self.out.push(PointD::new(x, y));
        }
        self.x1 = x;
        self.y1 = y;
        self.cmd = PathCommand::MOVE_TO;
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.clear_output();
        let flags = clipping_flags(x, y, &self.clip_box);

        if self.clip_flags == flags {
            // Both ends in the same region: inside passes through, outside
            // contributes nothing new.
            if flags == 0 {
                self.out.push(PointD::new(x, y));
            }
        } else {
            self.out = clip_liang_barsky(
                PointD::new(self.x1, self.y1),
                PointD::new(x, y),
                &self.clip_box,
            );
        }

        self.clip_flags = flags;
        self.x1 = x;
        self.y1 = y;
    }

    fn vertex(&mut self) -> Vertex {
        match self.out.get(self.vertex) {
            Some(p) => {
                self.vertex += 1;
                let cmd = self.cmd;
                self.cmd = PathCommand::LINE_TO;
                Vertex::new(p.x, p.y, cmd)
            }
            None => Vertex::stop(),
        }
    }

    fn auto_close() -> bool {
        true
    }

    fn auto_unclose() -> bool {
        false
    }
}

// ============================================================================
// Tests
// ============================================================================
