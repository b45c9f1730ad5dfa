//! Adapter connecting a vertex source to a vertex generator.
//!
//! The source is split into sub-paths at every move-to. Each sub-path is fed
//! to the generator, which is then drained before the next one is read.
//! A [`Markers`] collector sees the same center-line vertices and can be
//! replayed afterwards to place arrowheads or other terminal decorations.

use crate::basics::{PathCommand, Vertex, VertexSource};

// ============================================================================
// Traits
// ============================================================================

/// Vertex generator interface used by [`ConvAdaptorVcgen`].
///
/// A generator accumulates one sub-path through `add_vertex` and then
/// produces its output through the [`VertexSource`] protocol.
pub trait VcgenGenerator: VertexSource {
    fn remove_all(&mut self);
    fn add_vertex(&mut self, x: f64, y: f64, cmd: PathCommand);
}

/// Receives the center-line vertices that pass through an adaptor.
pub trait Markers {
    fn remove_all(&mut self);
    fn add_vertex(&mut self, x: f64, y: f64, cmd: PathCommand);
}

/// Marker collector that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMarkers;

impl Markers for NullMarkers {
    fn remove_all(&mut self) {}
    fn add_vertex(&mut self, _x: f64, _y: f64, _cmd: PathCommand) {}
}

// ============================================================================
// ConvAdaptorVcgen
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum Status {
    Initial,
    Accumulate,
    Generate,
}

/// Feeds each sub-path of `source` through `generator`.
pub struct ConvAdaptorVcgen<VS: VertexSource, Gen: VcgenGenerator, M: Markers = NullMarkers> {
    source: VS,
    generator: Gen,
    markers: M,
    status: Status,
    last_cmd: PathCommand,
    start_x: f64,
    start_y: f64,
}

impl<VS: VertexSource, Gen: VcgenGenerator> ConvAdaptorVcgen<VS, Gen, NullMarkers> {
    pub fn new(source: VS, generator: Gen) -> Self {
        Self::with_markers(source, generator, NullMarkers)
    }
}

impl<VS: VertexSource, Gen: VcgenGenerator, M: Markers> ConvAdaptorVcgen<VS, Gen, M> {
    pub fn with_markers(source: VS, generator: Gen, markers: M) -> Self {
        Self {
            source,
            generator,
            markers,
            status: Status::Initial,
            last_cmd: PathCommand::STOP,
            start_x: 0.0,
            start_y: 0.0,
        }
    }

    pub fn generator(&self) -> &Gen {
        &self.generator
    }

    pub fn generator_mut(&mut self) -> &mut Gen {
        &mut self.generator
    }

    pub fn markers(&self) -> &M {
        &self.markers
    }

    pub fn markers_mut(&mut self) -> &mut M {
        &mut self.markers
    }

    pub fn source(&self) -> &VS {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut VS {
        &mut self.source
    }

    pub fn into_inner(self) -> VS {
        self.source
    }

    // Reads past a closed sub-path until the next vertex or stop.
    fn seek_start(&mut self) {
        loop {
            let v = self.source.vertex();
            if v.cmd.is_stop() {
                self.last_cmd = PathCommand::STOP;
                return;
            }
            if v.cmd.is_vertex() {
                self.last_cmd = v.cmd;
                self.start_x = v.x;
                self.start_y = v.y;
                return;
            }
        }
    }
}

impl<VS: VertexSource, Gen: VcgenGenerator, M: Markers> VertexSource
    for ConvAdaptorVcgen<VS, Gen, M>
{
    fn rewind(&mut self, path_id: u32) {
        self.source.rewind(path_id);
        self.status = Status::Initial;
    }

    fn vertex(&mut self) -> Vertex {
        loop {
            match self.status {
                Status::Initial => {
                    self.markers.remove_all();
                    let v = self.source.vertex();
                    self.last_cmd = v.cmd;
                    self.start_x = v.x;
                    self.start_y = v.y;
                    self.status = Status::Accumulate;
                }
                Status::Accumulate => {
                    if self.last_cmd.is_end_poly() {
                        self.seek_start();
                    }
                    if self.last_cmd.is_stop() {
                        return Vertex::stop();
                    }

                    self.generator.remove_all();
                    self.generator
                        .add_vertex(self.start_x, self.start_y, PathCommand::MOVE_TO);
                    self.markers
                        .add_vertex(self.start_x, self.start_y, PathCommand::MOVE_TO);

                    loop {
                        let v = self.source.vertex();
                        if v.cmd.is_vertex() {
                            self.last_cmd = v.cmd;
                            if v.cmd.is_move_to() {
                                self.start_x = v.x;
                                self.start_y = v.y;
                                break;
                            }
                            self.generator.add_vertex(v.x, v.y, v.cmd);
                            self.markers.add_vertex(v.x, v.y, PathCommand::LINE_TO);
                        } else if v.cmd.is_stop() {
                            self.last_cmd = PathCommand::STOP;
                            break;
                        } else if v.cmd.is_end_poly() {
                            self.generator.add_vertex(v.x, v.y, v.cmd);
                            self.last_cmd = v.cmd;
                            break;
                        }
                    }
                    self.generator.rewind(0);
                    self.status = Status::Generate;
                }
                Status::Generate => {
                    let v = self.generator.vertex();
                    if v.cmd.is_stop() {
                        self.status = Status::Accumulate;
                        continue;
                    }
                    return v;
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
