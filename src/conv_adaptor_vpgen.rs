//! Adapter feeding a vertex source through a per-segment processor.
//!
//! A processor (vpgen) sees one segment at a time through `move_to` /
//! `line_to` and may emit any number of vertices for it. The adapter takes
//! care of closing polygons for processors that need it (`auto_close`) and
//! of dropping `END_POLY` for processors that produce polylines
//! (`auto_unclose`).

use crate::basics::{PathCommand, Vertex, VertexSource};

/// Per-segment vertex processor used by [`ConvAdaptorVpgen`].
pub trait VpgenProcessor {
    fn reset(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Next buffered output vertex, `STOP` when the buffer is drained.
    fn vertex(&mut self) -> Vertex;
    /// Close every polygon before handing it to the processor.
    fn auto_close() -> bool;
    /// Never emit `END_POLY`.
    fn auto_unclose() -> bool;
}

/// Feeds a [`VertexSource`] through a [`VpgenProcessor`].
pub struct ConvAdaptorVpgen<VS, Gen> {
    source: VS,
    vpgen: Gen,
    start_x: f64,
    start_y: f64,
    poly_flags: Option<PathCommand>,
    // Vertices fed to the current polygon. -1 means a move-to to the
    // pending start point is due, -2 that the source is exhausted.
    vertices: i32,
}

impl<VS: VertexSource, Gen: VpgenProcessor> ConvAdaptorVpgen<VS, Gen> {
    pub fn new(source: VS, vpgen: Gen) -> Self {
        Self {
            source,
            vpgen,
            start_x: 0.0,
            start_y: 0.0,
            poly_flags: None,
            vertices: 0,
        }
    }

    pub fn source(&self) -> &VS {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut VS {
        &mut self.source
    }

    pub fn vpgen(&self) -> &Gen {
        &self.vpgen
    }

    pub fn vpgen_mut(&mut self) -> &mut Gen {
        &mut self.vpgen
    }

    pub fn into_inner(self) -> VS {
        self.source
    }

    fn close_to_start(&mut self) {
        self.vpgen.line_to(self.start_x, self.start_y);
        self.poly_flags = Some(PathCommand::end_poly(PathCommand::FLAG_CLOSE));
    }
}

impl<VS: VertexSource, Gen: VpgenProcessor> VertexSource for ConvAdaptorVpgen<VS, Gen> {
    fn rewind(&mut self, path_id: u32) {
        self.source.rewind(path_id);
        self.vpgen.reset();
        self.start_x = 0.0;
        self.start_y = 0.0;
        self.poly_flags = None;
        self.vertices = 0;
    }

    fn vertex(&mut self) -> Vertex {
        loop {
            let v = self.vpgen.vertex();
            if !v.cmd.is_stop() {
                return v;
            }

            if !Gen::auto_unclose() {
                if let Some(cmd) = self.poly_flags.take() {
                    return Vertex::new(0.0, 0.0, cmd);
                }
            }

            if self.vertices < 0 {
                if self.vertices < -1 {
                    self.vertices = 0;
                    return Vertex::stop();
                }
                self.vpgen.move_to(self.start_x, self.start_y);
                self.vertices = 1;
                continue;
            }

            let v = self.source.vertex();
            if v.cmd.is_vertex() {
                if v.cmd.is_move_to() {
                    if Gen::auto_close() && self.vertices > 2 {
                        self.close_to_start();
                        self.start_x = v.x;
                        self.start_y = v.y;
                        self.vertices = -1;
                        continue;
                    }
                    self.vpgen.move_to(v.x, v.y);
                    self.start_x = v.x;
                    self.start_y = v.y;
                    self.vertices = 1;
                } else {
                    self.vpgen.line_to(v.x, v.y);
                    self.vertices += 1;
                }
            } else if v.cmd.is_end_poly() {
                let mut flags = v.cmd;
                if v.cmd.is_closed() || Gen::auto_close() {
                    if Gen::auto_close() {
                        flags = PathCommand::from_bits(flags.bits() | PathCommand::FLAG_CLOSE);
                    }
                    if self.vertices > 2 {
                        self.vpgen.line_to(self.start_x, self.start_y);
                    }
                    self.vertices = 0;
                }
                self.poly_flags = Some(flags);
            } else {
                if Gen::auto_close() && self.vertices > 2 {
                    self.close_to_start();
                    self.vertices = -2;
                    continue;
                }
                return Vertex::stop();
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
