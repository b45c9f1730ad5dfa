//! Liang-Barsky clipping against an axis-aligned box.
//!
//! Pure functions: region codes for points, single-segment clipping for
//! polylines, and edge clipping for polygons (which may need to walk along
//! the box border through its corners).

use arrayvec::ArrayVec;

use crate::basics::{PointD, RectD};

// ============================================================================
// Region codes
// ============================================================================

/// Right of `x2`.
pub const CLIP_X2: u32 = 1;
/// Above `y2`.
pub const CLIP_Y2: u32 = 2;
/// Left of `x1`.
pub const CLIP_X1: u32 = 4;
/// Below `y1`.
pub const CLIP_Y1: u32 = 8;
pub const CLIP_X: u32 = CLIP_X1 | CLIP_X2;
pub const CLIP_Y: u32 = CLIP_Y1 | CLIP_Y2;

/// Region code of a point relative to `clip_box`; 0 means inside.
///
/// ```text
///        |        |
///  0110  |  0010  | 0011
///        |        |
/// -------+--------+-------- y2
///        |        |
///  0100  |  0000  | 0001
///        |        |
/// -------+--------+-------- y1
///        |        |
///  1100  |  1000  | 1001
///        |        |
///       x1       x2
/// ```
#[inline]
pub fn clipping_flags(x: f64, y: f64, clip_box: &RectD) -> u32 {
    clipping_flags_x(x, clip_box) | clipping_flags_y(y, clip_box)
}

#[inline]
pub fn clipping_flags_x(x: f64, clip_box: &RectD) -> u32 {
    (x > clip_box.x2) as u32 | (((x < clip_box.x1) as u32) << 2)
}

#[inline]
pub fn clipping_flags_y(y: f64, clip_box: &RectD) -> u32 {
    (((y > clip_box.y2) as u32) << 1) | (((y < clip_box.y1) as u32) << 3)
}

// ============================================================================
// Polygon edge clipping
// ============================================================================

/// Clip the polygon edge `p1 → p2`.
///
/// Returns the vertices to emit *after* `p1`: the entry corner, the entry
/// point, and the exit point (or `p2` itself). When the edge passes outside
/// a corner the box corner is emitted instead so that the clipped polygon
/// follows the border. An empty result means nothing of the edge is visible.
pub fn clip_liang_barsky(p1: PointD, p2: PointD, clip_box: &RectD) -> ArrayVec<PointD, 4> {
    const NEARZERO: f64 = 1e-30;

    let mut out = ArrayVec::new();

    let mut dx = p2.x - p1.x;
    let mut dy = p2.y - p1.y;
    if dx == 0.0 {
        // Bump off zero so the parametric divisions stay finite.
        dx = if p1.x > clip_box.x1 { -NEARZERO } else { NEARZERO };
    }
    if dy == 0.0 {
        dy = if p1.y > clip_box.y1 { -NEARZERO } else { NEARZERO };
    }

    let (xin, xout) = if dx > 0.0 {
        (clip_box.x1, clip_box.x2)
    } else {
        (clip_box.x2, clip_box.x1)
    };
    let (yin, yout) = if dy > 0.0 {
        (clip_box.y1, clip_box.y2)
    } else {
        (clip_box.y2, clip_box.y1)
    };

    let tinx = (xin - p1.x) / dx;
    let tiny = (yin - p1.y) / dy;
    let (tin1, tin2) = if tinx < tiny { (tinx, tiny) } else { (tiny, tinx) };

    if tin1 > 1.0 {
        return out;
    }
    if tin1 > 0.0 {
        out.push(PointD::new(xin, yin));
    }
    if tin2 > 1.0 {
        return out;
    }

    let toutx = (xout - p1.x) / dx;
    let touty = (yout - p1.y) / dy;
    let tout1 = toutx.min(touty);

    if tin2 <= 0.0 && tout1 <= 0.0 {
        return out;
    }

    if tin2 <= tout1 {
        if tin2 > 0.0 {
            if tinx > tiny {
                out.push(PointD::new(xin, p1.y + tinx * dy));
            } else {
                out.push(PointD::new(p1.x + tiny * dx, yin));
            }
        }
        if tout1 < 1.0 {
            if toutx < touty {
                out.push(PointD::new(xout, p1.y + toutx * dy));
            } else {
                out.push(PointD::new(p1.x + touty * dx, yout));
            }
        } else {
            out.push(p2);
        }
    } else if tinx > tiny {
        out.push(PointD::new(xin, yout));
    } else {
        out.push(PointD::new(xout, yin));
    }
    out
}

// ============================================================================
// Segment clipping
// ============================================================================

/// Result flag: the first endpoint was moved onto the border.
pub const SEGMENT_FIRST_MOVED: u32 = 1;
/// Result flag: the second endpoint was moved onto the border.
pub const SEGMENT_SECOND_MOVED: u32 = 2;
/// Result value (and anything above it): nothing visible.
pub const SEGMENT_INVISIBLE: u32 = 4;

/// Outcome of [`clip_line_segment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentClip {
    pub p1: PointD,
    pub p2: PointD,
    pub flags: u32,
}

impl SegmentClip {
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.flags < SEGMENT_INVISIBLE
    }

    #[inline]
    pub fn first_moved(&self) -> bool {
        self.flags & SEGMENT_FIRST_MOVED != 0
    }

    #[inline]
    pub fn second_moved(&self) -> bool {
        self.flags & SEGMENT_SECOND_MOVED != 0
    }

    /// The visible part as 0 or 2 points.
    pub fn points(&self) -> ArrayVec<PointD, 2> {
        let mut pts = ArrayVec::new();
        if self.is_visible() {
            pts.push(self.p1);
            pts.push(self.p2);
        }
        pts
    }
}

/// Slide `p`, an endpoint of `a → b` with region code `flags`, onto the box
/// border along the segment. `None` when the segment is parallel to the
/// border it would have to cross.
fn clip_move_point(a: PointD, b: PointD, clip_box: &RectD, mut p: PointD, flags: u32) -> Option<PointD> {
    if flags & CLIP_X != 0 {
        if a.x == b.x {
            return None;
        }
        let bound = if flags & CLIP_X1 != 0 {
            clip_box.x1
        } else {
            clip_box.x2
        };
        p.y = (bound - a.x) * (b.y - a.y) / (b.x - a.x) + a.y;
        p.x = bound;
    }

    let flags = clipping_flags_y(p.y, clip_box);
    if flags & CLIP_Y != 0 {
        if a.y == b.y {
            return None;
        }
        let bound = if flags & CLIP_Y1 != 0 {
            clip_box.y1
        } else {
            clip_box.y2
        };
        p.x = (bound - a.y) * (b.x - a.x) / (b.y - a.y) + a.x;
        p.y = bound;
    }
    Some(p)
}

/// Clip the segment `p1 → p2` to `clip_box`.
///
/// Both endpoints are returned, moved onto the border where needed. Trivial
/// rejects (both ends beyond the same side) and segments that only touch a
/// corner come back with [`SEGMENT_INVISIBLE`].
pub fn clip_line_segment(p1: PointD, p2: PointD, clip_box: &RectD) -> SegmentClip {
    let f1 = clipping_flags(p1.x, p1.y, clip_box);
    let f2 = clipping_flags(p2.x, p2.y, clip_box);
    let mut res = SegmentClip { p1, p2, flags: 0 };

    if f1 | f2 == 0 {
        return res;
    }

    let invisible = SegmentClip {
        p1,
        p2,
        flags: SEGMENT_INVISIBLE,
    };

    if f1 & CLIP_X != 0 && f1 & CLIP_X == f2 & CLIP_X {
        return invisible;
    }
    if f1 & CLIP_Y != 0 && f1 & CLIP_Y == f2 & CLIP_Y {
        return invisible;
    }

    if f1 != 0 {
        match clip_move_point(p1, p2, clip_box, p1, f1) {
            Some(p) => res.p1 = p,
            None => return invisible,
        }
        if res.p1 == res.p2 {
            return invisible;
        }
        res.flags |= SEGMENT_FIRST_MOVED;
    }

    if f2 != 0 {
        match clip_move_point(p1, p2, clip_box, p2, f2) {
            Some(p) => res.p2 = p,
            None => return invisible,
        }
        if res.p1 == res.p2 {
            return invisible;
        }
        res.flags |= SEGMENT_SECOND_MOVED;
    }

    // A segment cutting past a corner can land outside after the move.
    match (settle(res.p1, clip_box), settle(res.p2, clip_box)) {
        (Some(a), Some(b)) => {
            res.p1 = a;
            res.p2 = b;
            res
        }
        _ => invisible,
    }
}

/// Clamp a moved endpoint into the box, or `None` if it missed the box by
/// more than rounding noise.
fn settle(p: PointD, clip_box: &RectD) -> Option<PointD> {
    const TOLERANCE: f64 = 1e-9;
    if p.x < clip_box.x1 - TOLERANCE
        || p.x > clip_box.x2 + TOLERANCE
        || p.y < clip_box.y1 - TOLERANCE
        || p.y > clip_box.y2 + TOLERANCE
    {
        return None;
    }
    Some(PointD::new(
        p.x.clamp(clip_box.x1, clip_box.x2),
        p.y.clamp(clip_box.y1, clip_box.y2),
    ))
}

// ============================================================================
// Tests
// ============================================================================
