//! Polyline clipping processor.
//!
//! Clips open polylines to a rectangle. Invisible stretches are dropped and
//! the line restarts with a fresh `MOVE_TO` where it re-enters the box, so a
//! single input polyline can come out as several pieces.

use arrayvec::ArrayVec;

use crate::basics::{PointD, RectD, Vertex};
use crate::clip_liang_barsky::clip_line_segment;
use crate::conv_adaptor_vpgen::VpgenProcessor;

/// Polyline clipping processor.
#[derive(Debug, Clone)]
pub struct VpgenClipPolyline {
    clip_box: RectD,
    x1: f64,
    y1: f64,
    out: ArrayVec<Vertex, 2>,
    vertex: usize,
    move_to: bool,
}

impl VpgenClipPolyline {
    pub fn new() -> Self {
        Self {
            clip_box: RectD::new(0.0, 0.0, 1.0, 1.0),
            x1: 0.0,
            y1: 0.0,
            out: ArrayVec::new(),
            vertex: 0,
            move_to: false,
        }
    }

    /// Set the clip rectangle; the corners may come in any order.
    pub fn set_clip_box(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.clip_box = RectD::new(x1, y1, x2, y2).normalized();
    }

    pub fn clip_box(&self) -> &RectD {
        &self.clip_box
    }
}

impl Default for VpgenClipPolyline {
    fn default() -> Self {
        Self::new()
    }
}

impl VpgenProcessor for VpgenClipPolyline {
    fn reset(&mut self) {
        self.vertex = 0;
        self.out.clear();
        self.move_to = false;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.vertex = 0;
        self.out.clear();
        self.x1 = x;
        self.y1 = y;
        self.move_to = true;
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.vertex = 0;
        self.out.clear();

        let clip = clip_line_segment(PointD::new(self.x1, self.y1), PointD::new(x, y), &self.clip_box);
        if clip.is_visible() {
            if clip.first_moved() || self.move_to {
                self.out.push(Vertex::move_to(clip.p1.x, clip.p1.y));
            }
            self.out.push(Vertex::line_to(clip.p2.x, clip.p2.y));
            self.move_to = clip.second_moved();
        }

        self.x1 = x;
        self.y1 = y;
    }

    fn vertex(&mut self) -> Vertex {
        match self.out.get(self.vertex) {
            Some(&v) => {
                self.vertex += 1;
                v
            }
            None => Vertex::stop(),
        }
    }

    fn auto_close() -> bool {
        false
    }

    fn auto_unclose() -> bool {
        true
    }
}
