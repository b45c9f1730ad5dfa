//! Stroke converter for vertex sources.
//!
//! Wraps `ConvAdaptorVcgen` around `VcgenStroke` so any vertex source can be
//! stroked in a single decorator. An optional marker collector sees the
//! center line as it is fed to the stroker.

use crate::basics::{Vertex, VertexSource};
use crate::conv_adaptor_vcgen::{ConvAdaptorVcgen, Markers, NullMarkers};
use crate::math_stroke::{LineCap, LineJoin, StrokeStyle};
use crate::vcgen_stroke::VcgenStroke;

// ============================================================================
// ConvStroke
// ============================================================================

/// Stroke converter: generates a stroked outline from a center-line path.
pub struct ConvStroke<VS: VertexSource, M: Markers = NullMarkers> {
    base: ConvAdaptorVcgen<VS, VcgenStroke, M>,
}

impl<VS: VertexSource> ConvStroke<VS> {
    pub fn new(source: VS) -> Self {
        Self {
            base: ConvAdaptorVcgen::new(source, VcgenStroke::new()),
        }
    }

    pub fn with_style(source: VS, style: StrokeStyle) -> Self {
        Self {
            base: ConvAdaptorVcgen::new(source, VcgenStroke::with_style(style)),
        }
    }
}

impl<VS: VertexSource, M: Markers> ConvStroke<VS, M> {
    /// Stroke `source` and record its terminal points into `markers`.
    pub fn with_markers(source: VS, markers: M) -> Self {
        Self {
            base: ConvAdaptorVcgen::with_markers(source, VcgenStroke::new(), markers),
        }
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.base.generator_mut().set_style(style);
    }
    pub fn style(&self) -> &StrokeStyle {
        self.base.generator().style()
    }

    pub fn set_line_cap(&mut self, lc: LineCap) {
        self.base.generator_mut().set_line_cap(lc);
    }
    pub fn line_cap(&self) -> LineCap {
        self.base.generator().line_cap()
    }

    pub fn set_line_join(&mut self, lj: LineJoin) {
        self.base.generator_mut().set_line_join(lj);
    }
    pub fn line_join(&self) -> LineJoin {
        self.base.generator().line_join()
    }

    pub fn set_width(&mut self, w: f64) {
        self.base.generator_mut().set_width(w);
    }
    pub fn width(&self) -> f64 {
        self.base.generator().width()
    }

    /// Trim `s` units off the end of every open sub-path before stroking.
    pub fn set_shorten(&mut self, s: f64) {
        self.base.generator_mut().set_shorten(s);
    }
    pub fn shorten(&self) -> f64 {
        self.base.generator().shorten()
    }

    pub fn markers(&self) -> &M {
        self.base.markers()
    }

    pub fn markers_mut(&mut self) -> &mut M {
        self.base.markers_mut()
    }

    pub fn source(&self) -> &VS {
        self.base.source()
    }

    pub fn source_mut(&mut self) -> &mut VS {
        self.base.source_mut()
    }

    pub fn into_inner(self) -> VS {
        self.base.into_inner()
    }
}

impl<VS: VertexSource, M: Markers> VertexSource for ConvStroke<VS, M> {
    fn rewind(&mut self, path_id: u32) {
        self.base.rewind(path_id);
    }

    fn vertex(&mut self) -> Vertex {
        self.base.vertex()
    }
}

// ============================================================================
// Tests
// ============================================================================
