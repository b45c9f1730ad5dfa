//! Path commands, points, rectangles and the vertex source protocol.
//!
//! The command encoding is shared with downstream rasterizers and must stay
//! bit-exact: the low nibble selects the command kind, the high nibble of an
//! `END_POLY` carries the close and orientation flags.

use core::fmt;

// ============================================================================
// Path commands
// ============================================================================

/// A path command word: command kind in the low nibble, flags in the high one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct PathCommand(u32);

impl PathCommand {
    pub const STOP: Self = Self(0);
    pub const MOVE_TO: Self = Self(1);
    pub const LINE_TO: Self = Self(2);
    pub const CURVE3: Self = Self(3);
    pub const CURVE4: Self = Self(4);
    pub const END_POLY: Self = Self(0x0F);

    pub const CMD_MASK: u32 = 0x0F;

    pub const FLAG_NONE: u32 = 0;
    pub const FLAG_CCW: u32 = 0x10;
    pub const FLAG_CW: u32 = 0x20;
    pub const FLAG_CLOSE: u32 = 0x40;
    pub const FLAG_MASK: u32 = 0xF0;

    /// Wrap a raw command word.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// `END_POLY` carrying the given flag bits.
    #[inline]
    pub const fn end_poly(flags: u32) -> Self {
        Self(Self::END_POLY.0 | (flags & Self::FLAG_MASK))
    }

    /// The command kind with all flags stripped.
    #[inline]
    pub const fn kind(self) -> Self {
        Self(self.0 & Self::CMD_MASK)
    }

    #[inline]
    pub const fn flags(self) -> u32 {
        self.0 & Self::FLAG_MASK
    }

    #[inline]
    pub const fn is_stop(self) -> bool {
        self.0 == Self::STOP.0
    }

    /// `MOVE_TO`, `LINE_TO` or a curve command.
    #[inline]
    pub const fn is_vertex(self) -> bool {
        self.0 >= Self::MOVE_TO.0 && self.0 < Self::END_POLY.0
    }

    #[inline]
    pub const fn is_drawing(self) -> bool {
        self.0 >= Self::LINE_TO.0 && self.0 < Self::END_POLY.0
    }

    #[inline]
    pub const fn is_move_to(self) -> bool {
        self.0 == Self::MOVE_TO.0
    }

    #[inline]
    pub const fn is_line_to(self) -> bool {
        self.0 == Self::LINE_TO.0
    }

    #[inline]
    pub const fn is_curve(self) -> bool {
        self.0 == Self::CURVE3.0 || self.0 == Self::CURVE4.0
    }

    #[inline]
    pub const fn is_end_poly(self) -> bool {
        self.0 & Self::CMD_MASK == Self::END_POLY.0
    }

    /// `END_POLY` with the close flag, orientation ignored.
    #[inline]
    pub const fn is_close(self) -> bool {
        self.0 & !(Self::FLAG_CW | Self::FLAG_CCW) == Self::END_POLY.0 | Self::FLAG_CLOSE
    }

    /// Stop, move-to or end-poly: anything that ends the current sub-path.
    #[inline]
    pub const fn is_next_poly(self) -> bool {
        self.is_stop() || self.is_move_to() || self.is_end_poly()
    }

    #[inline]
    pub const fn is_closed(self) -> bool {
        self.0 & Self::FLAG_CLOSE != 0
    }

    #[inline]
    pub const fn is_cw(self) -> bool {
        self.0 & Self::FLAG_CW != 0
    }

    #[inline]
    pub const fn is_ccw(self) -> bool {
        self.0 & Self::FLAG_CCW != 0
    }

    #[inline]
    pub const fn is_oriented(self) -> bool {
        self.0 & (Self::FLAG_CW | Self::FLAG_CCW) != 0
    }

    #[inline]
    pub const fn close_flag(self) -> u32 {
        self.0 & Self::FLAG_CLOSE
    }

    #[inline]
    pub const fn orientation(self) -> u32 {
        self.0 & (Self::FLAG_CW | Self::FLAG_CCW)
    }

    #[inline]
    pub const fn with_orientation(self, orientation: u32) -> Self {
        Self((self.0 & !(Self::FLAG_CW | Self::FLAG_CCW)) | orientation)
    }
}

impl fmt::Debug for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind().0 {
            0 => "Stop",
            1 => "MoveTo",
            2 => "LineTo",
            3 => "Curve3",
            4 => "Curve4",
            0x0F => "EndPoly",
            _ => "Unknown",
        };
        if !self.is_end_poly() {
            return f.write_str(name);
        }
        f.write_str(name)?;
        if self.is_closed() {
            f.write_str("|Close")?;
        }
        if self.is_ccw() {
            f.write_str("|CCW")?;
        }
        if self.is_cw() {
            f.write_str("|CW")?;
        }
        Ok(())
    }
}

impl From<PathCommand> for u32 {
    fn from(cmd: PathCommand) -> u32 {
        cmd.0
    }
}

// ============================================================================
// Point, Rect, Vertex
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointD {
    pub x: f64,
    pub y: f64,
}

impl PointD {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle. Most consumers expect it normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectD {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl RectD {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Swap corners so that `x1 <= x2` and `y1 <= y2`.
    pub fn normalize(&mut self) -> &mut Self {
        if self.x1 > self.x2 {
            core::mem::swap(&mut self.x1, &mut self.x2);
        }
        if self.y1 > self.y2 {
            core::mem::swap(&mut self.y1, &mut self.y2);
        }
        self
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Inclusive containment test.
    pub fn hit_test(&self, x: f64, y: f64) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

/// One element of a vertex stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub cmd: PathCommand,
}

impl Vertex {
    #[inline]
    pub const fn new(x: f64, y: f64, cmd: PathCommand) -> Self {
        Self { x, y, cmd }
    }

    /// End of stream. Coordinates are meaningless.
    #[inline]
    pub const fn stop() -> Self {
        Self::new(0.0, 0.0, PathCommand::STOP)
    }

    #[inline]
    pub const fn move_to(x: f64, y: f64) -> Self {
        Self::new(x, y, PathCommand::MOVE_TO)
    }

    #[inline]
    pub const fn line_to(x: f64, y: f64) -> Self {
        Self::new(x, y, PathCommand::LINE_TO)
    }

    /// An `END_POLY` vertex with the given flags.
    #[inline]
    pub const fn end_poly(flags: u32) -> Self {
        Self::new(0.0, 0.0, PathCommand::end_poly(flags))
    }

    #[inline]
    pub const fn point(&self) -> PointD {
        PointD::new(self.x, self.y)
    }
}

// ============================================================================
// VertexSource
// ============================================================================

/// The pull protocol every path, generator and converter speaks.
///
/// `rewind` positions the source at the start of path `path_id`; `vertex`
/// then yields one vertex per call until a [`PathCommand::STOP`] vertex.
pub trait VertexSource {
    fn rewind(&mut self, path_id: u32);
    fn vertex(&mut self) -> Vertex;
}

/// Lets a pipeline stage borrow its source instead of owning it.
impl<T: VertexSource + ?Sized> VertexSource for &mut T {
    fn rewind(&mut self, path_id: u32) {
        (**self).rewind(path_id);
    }

    fn vertex(&mut self) -> Vertex {
        (**self).vertex()
    }
}

/// Iterator over the vertices of one path, stopping before `STOP`.
pub struct Vertices<'a, VS: VertexSource + ?Sized> {
    source: &'a mut VS,
    done: bool,
}

impl<VS: VertexSource + ?Sized> Iterator for Vertices<'_, VS> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        if self.done {
            return None;
        }
        let v = self.source.vertex();
        if v.cmd.is_stop() {
            self.done = true;
            return None;
        }
        Some(v)
    }
}

/// Rewind `source` to `path_id` and iterate its vertices.
pub fn vertices<VS: VertexSource + ?Sized>(source: &mut VS, path_id: u32) -> Vertices<'_, VS> {
    source.rewind(path_id);
    Vertices {
        source,
        done: false,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_encoding_is_bit_exact() {
        assert_eq!(PathCommand::STOP.bits(), 0);
        assert_eq!(PathCommand::MOVE_TO.bits(), 1);
        assert_eq!(PathCommand::LINE_TO.bits(), 2);
        assert_eq!(PathCommand::CURVE3.bits(), 3);
        assert_eq!(PathCommand::CURVE4.bits(), 4);
        assert_eq!(PathCommand::END_POLY.bits(), 0x0F);
        assert_eq!(
            PathCommand::end_poly(PathCommand::FLAG_CLOSE | PathCommand::FLAG_CW).bits(),
            0x6F
        );
        assert_eq!(PathCommand::end_poly(PathCommand::FLAG_CCW).bits(), 0x1F);
    }

    #[test]
    fn test_command_classification() {
        assert!(PathCommand::STOP.is_stop());
        assert!(PathCommand::MOVE_TO.is_vertex());
        assert!(PathCommand::CURVE4.is_vertex());
        assert!(!PathCommand::END_POLY.is_vertex());
        assert!(!PathCommand::STOP.is_vertex());
        assert!(PathCommand::LINE_TO.is_drawing());
        assert!(!PathCommand::MOVE_TO.is_drawing());
        assert!(PathCommand::CURVE3.is_curve());
        assert!(!PathCommand::LINE_TO.is_curve());
        assert!(PathCommand::MOVE_TO.is_next_poly());
        assert!(!PathCommand::LINE_TO.is_next_poly());
    }

    #[test]
    fn test_end_poly_flags() {
        let cmd = PathCommand::end_poly(PathCommand::FLAG_CLOSE | PathCommand::FLAG_CW);
        assert!(cmd.is_end_poly());
        assert!(cmd.is_close());
        assert!(cmd.is_closed());
        assert!(cmd.is_cw());
        assert!(!cmd.is_ccw());
        assert!(cmd.is_oriented());
        assert_eq!(cmd.close_flag(), PathCommand::FLAG_CLOSE);
        assert_eq!(cmd.orientation(), PathCommand::FLAG_CW);
        assert_eq!(
            cmd.with_orientation(PathCommand::FLAG_CCW),
            PathCommand::end_poly(PathCommand::FLAG_CLOSE | PathCommand::FLAG_CCW)
        );
        assert!(!PathCommand::END_POLY.is_close());
    }

    #[test]
    fn test_debug_names() {
        let cmd = PathCommand::end_poly(PathCommand::FLAG_CLOSE | PathCommand::FLAG_CCW);
        assert_eq!(format!("{:?}", cmd), "EndPoly|Close|CCW");
        assert_eq!(format!("{:?}", PathCommand::LINE_TO), "LineTo");
    }

    #[test]
    fn test_rect_normalize() {
        let r = RectD::new(30.0, 40.0, 10.0, 20.0).normalized();
        assert_eq!(r, RectD::new(10.0, 20.0, 30.0, 40.0));
        assert!(r.is_valid());
        assert!(r.hit_test(10.0, 40.0));
        assert!(!r.hit_test(9.9, 25.0));
    }

    struct Triangle {
        idx: usize,
    }

    impl VertexSource for Triangle {
        fn rewind(&mut self, _path_id: u32) {
            self.idx = 0;
        }

        fn vertex(&mut self) -> Vertex {
            self.idx += 1;
            match self.idx {
                1 => Vertex::move_to(0.0, 0.0),
                2 => Vertex::line_to(1.0, 0.0),
                3 => Vertex::line_to(0.0, 1.0),
                _ => Vertex::stop(),
            }
        }
    }

    #[test]
    fn test_vertices_iterator_stops_before_stop() {
        let mut tri = Triangle { idx: 0 };
        let v: Vec<Vertex> = vertices(&mut tri, 0).collect();
        assert_eq!(v.len(), 3);
        assert_eq!(v[0].cmd, PathCommand::MOVE_TO);
        // Rewinds on every call.
        assert_eq!(vertices(&mut tri, 0).count(), 3);
    }
}
