//! Contour converter for vertex sources.
//!
//! Wraps `ConvAdaptorVcgen` around `VcgenContour` to offset every polygon of
//! a source.

use crate::basics::{Vertex, VertexSource};
use crate::conv_adaptor_vcgen::ConvAdaptorVcgen;
use crate::math_stroke::{LineJoin, StrokeStyle};
use crate::vcgen_contour::VcgenContour;

// ============================================================================
// ConvContour
// ============================================================================

/// Contour converter: generates an offset contour from a closed polygon.
pub struct ConvContour<VS: VertexSource> {
    base: ConvAdaptorVcgen<VS, VcgenContour>,
}

impl<VS: VertexSource> ConvContour<VS> {
    pub fn new(source: VS) -> Self {
        Self {
            base: ConvAdaptorVcgen::new(source, VcgenContour::new()),
        }
    }

    /// See [`VcgenContour::set_style`].
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.base.generator_mut().set_style(style);
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

    pub fn set_auto_detect_orientation(&mut self, v: bool) {
        self.base.generator_mut().set_auto_detect_orientation(v);
    }
    pub fn auto_detect_orientation(&self) -> bool {
        self.base.generator().auto_detect_orientation()
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

impl<VS: VertexSource> VertexSource for ConvContour<VS> {
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
