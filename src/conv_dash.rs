//! Dash converter for vertex sources.
//!
//! Wraps `ConvAdaptorVcgen` around `VcgenDash` to cut any path into dashes.

use crate::basics::{Vertex, VertexSource};
use crate::conv_adaptor_vcgen::ConvAdaptorVcgen;
use crate::vcgen_dash::{DashPattern, VcgenDash};

// ============================================================================
// ConvDash
// ============================================================================

/// Dash converter: generates a dashed line from a continuous center-line path.
pub struct ConvDash<VS: VertexSource> {
    base: ConvAdaptorVcgen<VS, VcgenDash>,
}

impl<VS: VertexSource> ConvDash<VS> {
    pub fn new(source: VS) -> Self {
        Self {
            base: ConvAdaptorVcgen::new(source, VcgenDash::new()),
        }
    }

    pub fn with_pattern(source: VS, pattern: DashPattern) -> Self {
        Self {
            base: ConvAdaptorVcgen::new(source, VcgenDash::with_pattern(pattern)),
        }
    }

    pub fn remove_all_dashes(&mut self) {
        self.base.generator_mut().remove_all_dashes();
    }

    pub fn add_dash(&mut self, dash_len: f64, gap_len: f64) {
        self.base.generator_mut().add_dash(dash_len, gap_len);
    }

    pub fn dash_start(&mut self, ds: f64) {
        self.base.generator_mut().dash_start(ds);
    }

    pub fn set_pattern(&mut self, pattern: &DashPattern) {
        self.base.generator_mut().set_pattern(pattern);
    }
    pub fn pattern(&self) -> &DashPattern {
        self.base.generator().pattern()
    }

    pub fn set_shorten(&mut self, s: f64) {
        self.base.generator_mut().set_shorten(s);
    }
    pub fn shorten(&self) -> f64 {
        self.base.generator().shorten()
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

impl<VS: VertexSource> VertexSource for ConvDash<VS> {
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
