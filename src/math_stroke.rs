//! Join and cap geometry for stroked and offset paths.
//!
//! [`MathStroke`] turns one vertex (with its neighbours) into the handful of
//! outline points forming a cap or a join. Points go into a caller-owned
//! buffer that is cleared on every call so generators can reuse one
//! allocation for the whole path.

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::basics::PointD;
use crate::error::StyleError;
use crate::math::{calc_distance, calc_intersection, cross_product, lerp};
use crate::vertex_sequence::VertexDist;

use core::f64::consts::PI;

// ============================================================================
// Style
// ============================================================================

/// Shape at the ends of an open sub-path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum LineCap {
    #[default]
    Butt,
    Square,
    Round,
}

/// Shape at the outer side of a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum LineJoin {
    /// Sharp corner; becomes a bevel once the miter limit is exceeded.
    #[default]
    Miter,
    /// Sharp corner, cut off at the miter limit.
    MiterClip,
    /// Sharp corner; becomes a round join once the miter limit is exceeded.
    MiterRound,
    Round,
    Bevel,
}

/// Shape at the inner side of a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum InnerJoin {
    Bevel,
    #[default]
    Miter,
    Jag,
    Round,
}

/// Stroke configuration shared by the stroke and contour generators.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct StrokeStyle {
    /// Full stroke width. Negative widths swap the sides of the outline.
    ///
    /// Default value: `1.0`.
    pub width: f64,

    /// Default value: `LineCap::Butt`.
    pub line_cap: LineCap,

    /// Default value: `LineJoin::Miter`.
    pub line_join: LineJoin,

    /// Default value: `InnerJoin::Miter`.
    pub inner_join: InnerJoin,

    /// Longest allowed miter, in half-widths.
    ///
    /// Default value: `StrokeStyle::DEFAULT_MITER_LIMIT`.
    pub miter_limit: f64,

    /// Longest allowed inner miter, in half-widths.
    ///
    /// Default value: `StrokeStyle::DEFAULT_INNER_MITER_LIMIT`.
    pub inner_miter_limit: f64,

    /// Scale of the output device relative to path units. Higher values
    /// subdivide round joins and caps more finely.
    ///
    /// Default value: `1.0`.
    pub approximation_scale: f64,
}

impl StrokeStyle {
    pub const DEFAULT_MITER_LIMIT: f64 = 4.0;
    pub const DEFAULT_INNER_MITER_LIMIT: f64 = 1.01;

    pub const DEFAULT: Self = StrokeStyle {
        width: 1.0,
        line_cap: LineCap::Butt,
        line_join: LineJoin::Miter,
        inner_join: InnerJoin::Miter,
        miter_limit: Self::DEFAULT_MITER_LIMIT,
        inner_miter_limit: Self::DEFAULT_INNER_MITER_LIMIT,
        approximation_scale: 1.0,
    };

    #[inline]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    #[inline]
    pub const fn with_line_cap(mut self, cap: LineCap) -> Self {
        self.line_cap = cap;
        self
    }

    #[inline]
    pub const fn with_line_join(mut self, join: LineJoin) -> Self {
        self.line_join = join;
        self
    }

    #[inline]
    pub const fn with_inner_join(mut self, join: InnerJoin) -> Self {
        self.inner_join = join;
        self
    }

    #[inline]
    pub const fn with_miter_limit(mut self, limit: f64) -> Self {
        self.miter_limit = limit;
        self
    }

    #[inline]
    pub const fn with_inner_miter_limit(mut self, limit: f64) -> Self {
        self.inner_miter_limit = limit;
        self
    }

    #[inline]
    pub const fn with_approximation_scale(mut self, scale: f64) -> Self {
        self.approximation_scale = scale;
        self
    }

    /// Check that every numeric field is usable.
    pub fn validate(&self) -> Result<(), StyleError> {
        if !self.width.is_finite() {
            return Err(StyleError::InvalidWidth(self.width));
        }
        if !self.miter_limit.is_finite() || self.miter_limit < 1.0 {
            return Err(StyleError::InvalidMiterLimit(self.miter_limit));
        }
        if !self.inner_miter_limit.is_finite() || self.inner_miter_limit < 1.0 {
            return Err(StyleError::InvalidMiterLimit(self.inner_miter_limit));
        }
        if !self.approximation_scale.is_finite() || self.approximation_scale <= 0.0 {
            return Err(StyleError::InvalidApproximationScale(
                self.approximation_scale,
            ));
        }
        Ok(())
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// MathStroke
// ============================================================================

/// Cap and join calculator.
///
/// Offsets are taken to the right of the direction of travel (in a y-up
/// frame) for positive widths.
#[derive(Debug, Clone)]
pub struct MathStroke {
    style: StrokeStyle,
    // Signed half width and its derived values.
    width: f64,
    width_abs: f64,
    width_eps: f64,
    width_sign: f64,
}

impl MathStroke {
    pub fn new() -> Self {
        Self::with_style(StrokeStyle::DEFAULT)
    }

    pub fn with_style(style: StrokeStyle) -> Self {
        let mut ms = Self {
            style,
            width: 0.0,
            width_abs: 0.0,
            width_eps: 0.0,
            width_sign: 1.0,
        };
        ms.set_width(style.width);
        ms
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
        self.set_width(style.width);
    }

    pub fn set_line_cap(&mut self, cap: LineCap) {
        self.style.line_cap = cap;
    }
    pub fn line_cap(&self) -> LineCap {
        self.style.line_cap
    }

    pub fn set_line_join(&mut self, join: LineJoin) {
        self.style.line_join = join;
    }
    pub fn line_join(&self) -> LineJoin {
        self.style.line_join
    }

    pub fn set_inner_join(&mut self, join: InnerJoin) {
        self.style.inner_join = join;
    }
    pub fn inner_join(&self) -> InnerJoin {
        self.style.inner_join
    }

    /// Set the full stroke width.
    pub fn set_width(&mut self, w: f64) {
        self.style.width = w;
        self.width = w * 0.5;
        self.width_abs = self.width.abs();
        self.width_sign = if self.width < 0.0 { -1.0 } else { 1.0 };
        self.width_eps = self.width / 1024.0;
    }
    pub fn width(&self) -> f64 {
        self.style.width
    }

    pub fn set_miter_limit(&mut self, limit: f64) {
        self.style.miter_limit = limit;
    }
    pub fn miter_limit(&self) -> f64 {
        self.style.miter_limit
    }

    /// Set the miter limit from the sharpest corner angle (radians) that
    /// should still get a full miter.
    pub fn set_miter_limit_theta(&mut self, theta: f64) {
        self.style.miter_limit = 1.0 / (theta * 0.5).sin();
    }

    pub fn set_inner_miter_limit(&mut self, limit: f64) {
        self.style.inner_miter_limit = limit;
    }
    pub fn inner_miter_limit(&self) -> f64 {
        self.style.inner_miter_limit
    }

    pub fn set_approximation_scale(&mut self, scale: f64) {
        self.style.approximation_scale = scale;
    }
    pub fn approximation_scale(&self) -> f64 {
        self.style.approximation_scale
    }

    /// Angular step keeping the chord height of round geometry under 1/8 of
    /// a device unit.
    fn arc_step(&self) -> f64 {
        let r = self.width_abs;
        (r / (r + 0.125 / self.style.approximation_scale)).acos() * 2.0
    }

    /// Scaled normal of the segment `a → b` whose length is `len`.
    #[inline]
    fn normal(&self, a: &VertexDist, b: &VertexDist, len: f64) -> PointD {
        PointD::new(
            self.width * (b.y - a.y) / len,
            -self.width * (b.x - a.x) / len,
        )
    }

    /// Cap at `v0`, the end of a sub-path whose neighbouring vertex is `v1`
    /// at distance `len`.
    ///
    /// Butt caps produce 2 points, square caps 4, round caps an arc.
    pub fn calc_cap(&self, out: &mut Vec<PointD>, v0: &VertexDist, v1: &VertexDist, len: f64) {
        out.clear();

        let n = self.normal(v0, v1, len);
        let start = PointD::new(v0.x - n.x, v0.y - n.y);
        let end = PointD::new(v0.x + n.x, v0.y + n.y);

        match self.style.line_cap {
            LineCap::Butt => {
                out.push(start);
                out.push(end);
            }
            LineCap::Square => {
                // Pushed away from the neighbour by half the width.
                let ex = self.width_abs * (v1.x - v0.x) / len;
                let ey = self.width_abs * (v1.y - v0.y) / len;
                out.push(start);
                out.push(PointD::new(start.x - ex, start.y - ey));
                out.push(PointD::new(end.x - ex, end.y - ey));
                out.push(end);
            }
            LineCap::Round => {
                let steps = (PI / self.arc_step()) as i32;
                let da = self.width_sign * PI / (steps + 1) as f64;
                let a0 = (-n.y).atan2(-n.x);
                out.push(start);
                for i in 1..=steps {
                    let a = a0 + da * i as f64;
                    out.push(PointD::new(
                        v0.x + a.cos() * self.width_abs,
                        v0.y + a.sin() * self.width_abs,
                    ));
                }
                out.push(end);
            }
        }
    }

    /// Join at `v1` between the segments `v0 → v1` (length `len1`) and
    /// `v1 → v2` (length `len2`).
    pub fn calc_join(
        &self,
        out: &mut Vec<PointD>,
        v0: &VertexDist,
        v1: &VertexDist,
        v2: &VertexDist,
        len1: f64,
        len2: f64,
    ) {
        out.clear();

        let n1 = self.normal(v0, v1, len1);
        let n2 = self.normal(v1, v2, len2);
        let c = v1.point();
        let p1 = PointD::new(c.x + n1.x, c.y + n1.y);
        let p2 = PointD::new(c.x + n2.x, c.y + n2.y);

        let cp = cross_product(v0.point(), c, v2.point());
        if cp != 0.0 && (cp > 0.0) == (self.width > 0.0) {
            // Inner side of the turn.
            let limit = (len1.min(len2) / self.width_abs).max(self.style.inner_miter_limit);

            match self.style.inner_join {
                InnerJoin::Bevel => {
                    out.push(p1);
                    out.push(p2);
                }
                InnerJoin::Miter => {
                    self.calc_miter(out, v0, v1, v2, n1, n2, LineJoin::Miter, limit, 0.0);
                }
                InnerJoin::Jag | InnerJoin::Round => {
                    let dx = n1.x - n2.x;
                    let dy = n1.y - n2.y;
                    let d = dx * dx + dy * dy;
                    if d < len1 * len1 && d < len2 * len2 {
                        self.calc_miter(out, v0, v1, v2, n1, n2, LineJoin::Miter, limit, 0.0);
                    } else if self.style.inner_join == InnerJoin::Jag {
                        out.push(p1);
                        out.push(c);
                        out.push(p2);
                    } else {
                        out.push(p1);
                        out.push(c);
                        self.calc_arc(out, c, n2, n1);
                        out.push(c);
                        out.push(p2);
                    }
                }
            }
            return;
        }

        // Outer side of the turn.
        let mx = (n1.x + n2.x) * 0.5;
        let my = (n1.y + n2.y) * 0.5;
        let dbevel = (mx * mx + my * my).sqrt();

        let join = self.style.line_join;
        if matches!(join, LineJoin::Round | LineJoin::Bevel)
            && self.style.approximation_scale * (self.width_abs - dbevel) < self.width_eps
        {
            // Almost straight: a single point is indistinguishable.
            let v0p = PointD::new(v0.x + n1.x, v0.y + n1.y);
            let v2p = PointD::new(v2.x + n2.x, v2.y + n2.y);
            out.push(calc_intersection(v0p, p1, p2, v2p).unwrap_or(p1));
            return;
        }

        match join {
            LineJoin::Miter | LineJoin::MiterClip | LineJoin::MiterRound => {
                self.calc_miter(
                    out,
                    v0,
                    v1,
                    v2,
                    n1,
                    n2,
                    join,
                    self.style.miter_limit,
                    dbevel,
                );
            }
            LineJoin::Round => self.calc_arc(out, c, n1, n2),
            LineJoin::Bevel => {
                out.push(p1);
                out.push(p2);
            }
        }
    }

    /// Arc around `c` from `c + o1` to `c + o2`, turning the way the offset
    /// side turns.
    fn calc_arc(&self, out: &mut Vec<PointD>, c: PointD, o1: PointD, o2: PointD) {
        let a1 = o1.y.atan2(o1.x);
        let mut a2 = o2.y.atan2(o2.x);
        if self.width_sign > 0.0 {
            if a1 > a2 {
                a2 += 2.0 * PI;
            }
        } else if a1 < a2 {
            a2 -= 2.0 * PI;
        }
        let sweep = a2 - a1;
        let steps = (sweep.abs() / self.arc_step()) as i32;
        let da = sweep / (steps + 1) as f64;

        out.push(PointD::new(c.x + o1.x, c.y + o1.y));
        for i in 1..=steps {
            let a = a1 + da * i as f64;
            out.push(PointD::new(
                c.x + a.cos() * self.width_abs,
                c.y + a.sin() * self.width_abs,
            ));
        }
        out.push(PointD::new(c.x + o2.x, c.y + o2.y));
    }

    #[allow(clippy::too_many_arguments)]
    fn calc_miter(
        &self,
        out: &mut Vec<PointD>,
        v0: &VertexDist,
        v1: &VertexDist,
        v2: &VertexDist,
        n1: PointD,
        n2: PointD,
        fallback: LineJoin,
        limit: f64,
        dbevel: f64,
    ) {
        let c = v1.point();
        let p1 = PointD::new(c.x + n1.x, c.y + n1.y);
        let p2 = PointD::new(c.x + n2.x, c.y + n2.y);
        let lim = self.width_abs * limit;

        let miter = calc_intersection(
            PointD::new(v0.x + n1.x, v0.y + n1.y),
            p1,
            p2,
            PointD::new(v2.x + n2.x, v2.y + n2.y),
        );

        match miter {
            Some(pi) => {
                let di = calc_distance(c, pi);
                if di <= lim {
                    out.push(pi);
                    return;
                }
                match fallback {
                    LineJoin::MiterRound => self.calc_arc(out, c, n1, n2),
                    LineJoin::MiterClip => {
                        let k = (lim - dbevel) / (di - dbevel);
                        out.push(lerp(p1, pi, k));
                        out.push(lerp(p2, pi, k));
                    }
                    _ => {
                        out.push(p1);
                        out.push(p2);
                    }
                }
            }
            None => {
                // Parallel offset lines. Either the path goes straight on,
                // or it folds back onto itself.
                if (cross_product(v0.point(), c, p1) < 0.0)
                    == (cross_product(c, v2.point(), p1) < 0.0)
                {
                    out.push(p1);
                    return;
                }
                match fallback {
                    LineJoin::MiterRound => self.calc_arc(out, c, n1, n2),
                    LineJoin::MiterClip => {
                        let m = limit * self.width_sign;
                        out.push(PointD::new(p1.x - n1.y * m, p1.y + n1.x * m));
                        out.push(PointD::new(p2.x + n2.y * m, p2.y - n2.x * m));
                    }
                    _ => {
                        out.push(p1);
                        out.push(p2);
                    }
                }
            }
        }
    }
}

impl Default for MathStroke {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn vd(x: f64, y: f64) -> VertexDist {
        VertexDist::new(x, y)
    }

    fn stroker(style: StrokeStyle) -> MathStroke {
        MathStroke::with_style(style)
    }

    #[test]
    fn test_defaults() {
        let ms = MathStroke::new();
        assert_eq!(ms.width(), 1.0);
        assert_eq!(ms.line_cap(), LineCap::Butt);
        assert_eq!(ms.line_join(), LineJoin::Miter);
        assert_eq!(ms.inner_join(), InnerJoin::Miter);
        assert_eq!(ms.miter_limit(), 4.0);
        assert_eq!(ms.inner_miter_limit(), 1.01);
        assert_eq!(ms.approximation_scale(), 1.0);
    }

    #[test]
    fn test_style_builder_and_validation() {
        let style = StrokeStyle::DEFAULT
            .with_width(3.0)
            .with_line_cap(LineCap::Round)
            .with_line_join(LineJoin::Bevel);
        assert_eq!(style.width, 3.0);
        assert!(style.validate().is_ok());

        let bad = StrokeStyle::DEFAULT.with_miter_limit(0.5);
        assert_eq!(bad.validate(), Err(StyleError::InvalidMiterLimit(0.5)));
        let bad = StrokeStyle::DEFAULT.with_approximation_scale(0.0);
        assert_eq!(
            bad.validate(),
            Err(StyleError::InvalidApproximationScale(0.0))
        );
        let bad = StrokeStyle::DEFAULT.with_width(f64::NAN);
        assert!(matches!(bad.validate(), Err(StyleError::InvalidWidth(_))));
    }

    #[test]
    fn test_butt_cap() {
        let ms = stroker(StrokeStyle::DEFAULT.with_width(2.0));
        let mut out = Vec::new();
        ms.calc_cap(&mut out, &vd(0.0, 0.0), &vd(10.0, 0.0), 10.0);
        assert_eq!(out, vec![PointD::new(0.0, 1.0), PointD::new(0.0, -1.0)]);
    }

    #[test]
    fn test_square_cap_extends_by_half_width() {
        let ms = stroker(
            StrokeStyle::DEFAULT
                .with_width(2.0)
                .with_line_cap(LineCap::Square),
        );
        let mut out = Vec::new();
        ms.calc_cap(&mut out, &vd(0.0, 0.0), &vd(10.0, 0.0), 10.0);
        assert_eq!(out.len(), 4);
        assert_eq!(out[0], PointD::new(0.0, 1.0));
        assert_eq!(out[1], PointD::new(-1.0, 1.0));
        assert_eq!(out[2], PointD::new(-1.0, -1.0));
        assert_eq!(out[3], PointD::new(0.0, -1.0));
    }

    #[test]
    fn test_round_cap_stays_on_circle_and_behind_endpoint() {
        let ms = stroker(
            StrokeStyle::DEFAULT
                .with_width(10.0)
                .with_line_cap(LineCap::Round),
        );
        let mut out = Vec::new();
        ms.calc_cap(&mut out, &vd(0.0, 0.0), &vd(10.0, 0.0), 10.0);
        assert!(out.len() > 4);
        for p in &out {
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert!((r - 5.0).abs() < 1e-9);
            assert!(p.x <= 1e-9, "cap point {:?} lies towards the neighbour", p);
        }
    }

    #[test]
    fn test_round_cap_with_negative_width() {
        let mut ms = MathStroke::new();
        ms.set_width(-10.0);
        ms.set_line_cap(LineCap::Round);
        let mut out = Vec::new();
        ms.calc_cap(&mut out, &vd(0.0, 0.0), &vd(10.0, 0.0), 10.0);
        assert!(out.len() > 4);
        assert_eq!(out[0], PointD::new(0.0, -5.0));
        assert_eq!(out[out.len() - 1], PointD::new(0.0, 5.0));
        for p in &out {
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert!((r - 5.0).abs() < 1e-9);
            assert!(p.x <= 1e-9, "cap point {:?} lies towards the neighbour", p);
        }
    }

    #[test]
    fn test_round_cap_density_grows_with_scale() {
        let mut ms = stroker(
            StrokeStyle::DEFAULT
                .with_width(10.0)
                .with_line_cap(LineCap::Round),
        );
        let mut coarse = Vec::new();
        ms.calc_cap(&mut coarse, &vd(0.0, 0.0), &vd(10.0, 0.0), 10.0);
        ms.set_approximation_scale(4.0);
        let mut fine = Vec::new();
        ms.calc_cap(&mut fine, &vd(0.0, 0.0), &vd(10.0, 0.0), 10.0);
        assert!(fine.len() > coarse.len());
    }

    #[test]
    fn test_miter_join_at_right_angle() {
        let ms = stroker(StrokeStyle::DEFAULT.with_width(2.0));
        let mut out = Vec::new();
        // Right turn (clockwise in y-up): the offset side is outer.
        ms.calc_join(
            &mut out,
            &vd(0.0, 0.0),
            &vd(10.0, 0.0),
            &vd(10.0, -10.0),
            10.0,
            10.0,
        );
        // Positive width offsets to the right, which is the inner side here.
        assert_eq!(out.len(), 1);
        assert!((out[0].x - 9.0).abs() < 1e-9);
        assert!((out[0].y + 1.0).abs() < 1e-9);

        ms.calc_join(
            &mut out,
            &vd(0.0, 0.0),
            &vd(10.0, 0.0),
            &vd(10.0, 10.0),
            10.0,
            10.0,
        );
        assert_eq!(out.len(), 1);
        assert!((out[0].x - 11.0).abs() < 1e-9);
        assert!((out[0].y + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_miter_degrades_to_bevel_past_limit() {
        let ms = stroker(StrokeStyle::DEFAULT.with_width(2.0).with_miter_limit(1.2));
        let mut out = Vec::new();
        ms.calc_join(
            &mut out,
            &vd(0.0, 0.0),
            &vd(10.0, 0.0),
            &vd(10.0, 10.0),
            10.0,
            10.0,
        );
        // sqrt(2) > 1.2, so two bevel points.
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], PointD::new(10.0, -1.0));
        assert_eq!(out[1], PointD::new(11.0, 0.0));
    }

    #[test]
    fn test_miter_clip_truncates() {
        let ms = stroker(
            StrokeStyle::DEFAULT
                .with_width(2.0)
                .with_miter_limit(1.2)
                .with_line_join(LineJoin::MiterClip),
        );
        let mut out = Vec::new();
        ms.calc_join(
            &mut out,
            &vd(0.0, 0.0),
            &vd(10.0, 0.0),
            &vd(10.0, 10.0),
            10.0,
            10.0,
        );
        assert_eq!(out.len(), 2);
        // The clip line sits at the limit distance along the bisector.
        let mid = lerp(out[0], out[1], 0.5);
        let d = calc_distance(PointD::new(10.0, 0.0), mid);
        assert!((d - 1.2).abs() < 1e-9);
        assert!(out[0].x > 10.0 && out[1].y < 0.0);
    }

    #[test]
    fn test_miter_round_falls_back_to_arc() {
        let style = StrokeStyle::DEFAULT.with_width(20.0).with_miter_limit(1.2);
        let corner = [vd(0.0, 0.0), vd(100.0, 0.0), vd(100.0, 100.0)];
        let mut out = Vec::new();

        stroker(style).calc_join(&mut out, &corner[0], &corner[1], &corner[2], 100.0, 100.0);
        assert_eq!(out.len(), 2);

        stroker(style.with_line_join(LineJoin::MiterRound)).calc_join(
            &mut out,
            &corner[0],
            &corner[1],
            &corner[2],
            100.0,
            100.0,
        );
        assert!(out.len() > 2, "expected an arc, got {:?}", out);
        assert_eq!(out[0], PointD::new(100.0, -10.0));
        assert_eq!(out[out.len() - 1], PointD::new(110.0, 0.0));
        for p in &out {
            let d = calc_distance(PointD::new(100.0, 0.0), *p);
            assert!((d - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_miter_round_within_limit_is_sharp() {
        let ms = stroker(
            StrokeStyle::DEFAULT
                .with_width(20.0)
                .with_line_join(LineJoin::MiterRound),
        );
        let mut out = Vec::new();
        ms.calc_join(
            &mut out,
            &vd(0.0, 0.0),
            &vd(100.0, 0.0),
            &vd(100.0, 100.0),
            100.0,
            100.0,
        );
        assert_eq!(out.len(), 1);
        assert!((out[0].x - 110.0).abs() < 1e-9);
        assert!((out[0].y + 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_join_arc_radius() {
        let ms = stroker(
            StrokeStyle::DEFAULT
                .with_width(20.0)
                .with_line_join(LineJoin::Round),
        );
        let mut out = Vec::new();
        ms.calc_join(
            &mut out,
            &vd(0.0, 0.0),
            &vd(100.0, 0.0),
            &vd(100.0, 100.0),
            100.0,
            100.0,
        );
        assert!(out.len() > 2);
        for p in &out {
            let d = calc_distance(PointD::new(100.0, 0.0), *p);
            assert!((d - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bevel_join() {
        let ms = stroker(
            StrokeStyle::DEFAULT
                .with_width(2.0)
                .with_line_join(LineJoin::Bevel),
        );
        let mut out = Vec::new();
        ms.calc_join(
            &mut out,
            &vd(0.0, 0.0),
            &vd(10.0, 0.0),
            &vd(10.0, 10.0),
            10.0,
            10.0,
        );
        assert_eq!(out, vec![PointD::new(10.0, -1.0), PointD::new(11.0, 0.0)]);
    }

    #[test]
    fn test_inner_bevel_join() {
        let ms = stroker(
            StrokeStyle::DEFAULT
                .with_width(2.0)
                .with_inner_join(InnerJoin::Bevel),
        );
        let mut out = Vec::new();
        ms.calc_join(
            &mut out,
            &vd(0.0, 0.0),
            &vd(10.0, 0.0),
            &vd(10.0, -10.0),
            10.0,
            10.0,
        );
        assert_eq!(out, vec![PointD::new(10.0, -1.0), PointD::new(9.0, 0.0)]);
    }

    #[test]
    fn test_inner_jag_on_short_segments() {
        let ms = stroker(
            StrokeStyle::DEFAULT
                .with_width(10.0)
                .with_inner_join(InnerJoin::Jag),
        );
        let mut out = Vec::new();
        ms.calc_join(
            &mut out,
            &vd(0.0, 0.0),
            &vd(2.0, 0.0),
            &vd(2.0, -2.0),
            2.0,
            2.0,
        );
        assert_eq!(out.len(), 3);
        assert_eq!(out[1], PointD::new(2.0, 0.0));
    }

    #[test]
    fn test_inner_round_on_short_segments() {
        let ms = stroker(
            StrokeStyle::DEFAULT
                .with_width(10.0)
                .with_inner_join(InnerJoin::Round),
        );
        let mut out = Vec::new();
        ms.calc_join(
            &mut out,
            &vd(0.0, 0.0),
            &vd(2.0, 0.0),
            &vd(2.0, -2.0),
            2.0,
            2.0,
        );
        let c = PointD::new(2.0, 0.0);
        let n = out.len();
        assert!(n > 5, "expected an arc between the pivots, got {:?}", out);
        assert_eq!(out[0], PointD::new(2.0, -5.0));
        assert_eq!(out[1], c);
        assert_eq!(out[n - 2], c);
        assert_eq!(out[n - 1], PointD::new(-3.0, 0.0));
        for p in &out[2..n - 2] {
            assert!((calc_distance(c, *p) - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_inner_round_on_long_segments_is_miter() {
        let ms = stroker(
            StrokeStyle::DEFAULT
                .with_width(10.0)
                .with_inner_join(InnerJoin::Round),
        );
        let mut out = Vec::new();
        ms.calc_join(
            &mut out,
            &vd(0.0, 0.0),
            &vd(100.0, 0.0),
            &vd(100.0, -100.0),
            100.0,
            100.0,
        );
        assert_eq!(out.len(), 1);
        assert!((out[0].x - 95.0).abs() < 1e-9);
        assert!((out[0].y + 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_inner_miter_cut_off_on_short_segments() {
        let ms = stroker(StrokeStyle::DEFAULT.with_width(20.0));
        let mut out = Vec::new();

        // Long segments allow the inner miter.
        ms.calc_join(
            &mut out,
            &vd(0.0, 0.0),
            &vd(100.0, 0.0),
            &vd(100.0, -100.0),
            100.0,
            100.0,
        );
        assert_eq!(out.len(), 1);

        // With segments shorter than the width the miter would sit about 14 units
        // away, past max(0.2, 1.01) * 10, so the join becomes a bevel.
        ms.calc_join(
            &mut out,
            &vd(0.0, 0.0),
            &vd(2.0, 0.0),
            &vd(2.0, -2.0),
            2.0,
            2.0,
        );
        assert_eq!(out, vec![PointD::new(2.0, -10.0), PointD::new(-8.0, 0.0)]);
    }

    #[test]
    fn test_collinear_join_is_single_point() {
        let ms = MathStroke::new();
        let mut out = Vec::new();
        ms.calc_join(
            &mut out,
            &vd(0.0, 0.0),
            &vd(10.0, 0.0),
            &vd(20.0, 0.0),
            10.0,
            10.0,
        );
        assert_eq!(out, vec![PointD::new(10.0, -0.5)]);
    }

    #[test]
    fn test_buffer_is_reused() {
        let ms = MathStroke::new();
        let mut out = Vec::with_capacity(16);
        ms.calc_cap(&mut out, &vd(0.0, 0.0), &vd(10.0, 0.0), 10.0);
        ms.calc_cap(&mut out, &vd(0.0, 0.0), &vd(10.0, 0.0), 10.0);
        assert_eq!(out.len(), 2);
        assert!(out.capacity() >= 16);
    }

    #[test]
    fn test_miter_limit_theta() {
        let mut ms = MathStroke::new();
        ms.set_miter_limit_theta(PI / 4.0);
        assert!((ms.miter_limit() - 1.0 / (PI / 8.0).sin()).abs() < 1e-12);
    }
}
