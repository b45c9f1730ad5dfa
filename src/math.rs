//! Small geometric helpers shared by the generators.

use crate::basics::PointD;

/// Points closer than this are treated as coincident.
pub const VERTEX_DIST_EPSILON: f64 = 1e-14;

/// Denominator threshold below which two lines count as parallel.
pub const INTERSECTION_EPSILON: f64 = 1.0e-30;

/// Cross product of `b - a` and `p - b`.
///
/// The sign tells on which side of the directed line `a → b` the point `p`
/// lies; it is zero for collinear points.
#[inline]
pub fn cross_product(a: PointD, b: PointD, p: PointD) -> f64 {
    (p.x - b.x) * (b.y - a.y) - (p.y - b.y) * (b.x - a.x)
}

#[inline]
pub fn calc_distance(a: PointD, b: PointD) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: PointD, b: PointD, t: f64) -> PointD {
    PointD::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

/// Intersection of the infinite lines `a → b` and `c → d`, or `None` when
/// they are parallel.
#[inline]
pub fn calc_intersection(a: PointD, b: PointD, c: PointD, d: PointD) -> Option<PointD> {
    let num = (a.y - c.y) * (d.x - c.x) - (a.x - c.x) * (d.y - c.y);
    let den = (b.x - a.x) * (d.y - c.y) - (b.y - a.y) * (d.x - c.x);
    if den.abs() < INTERSECTION_EPSILON {
        return None;
    }
    Some(lerp(a, b, num / den))
}

/// Signed polygon area (shoelace). Positive for counter-clockwise rings in a
/// y-up frame.
pub fn calc_polygon_area<I>(points: I) -> f64
where
    I: IntoIterator<Item = PointD>,
{
    let mut iter = points.into_iter();
    let first = match iter.next() {
        Some(p) => p,
        None => return 0.0,
    };
    let mut sum = 0.0;
    let mut prev = first;
    for p in iter {
        sum += prev.x * p.y - prev.y * p.x;
        prev = p;
    }
    (sum + prev.x * first.y - prev.y * first.x) * 0.5
}
