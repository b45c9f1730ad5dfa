//! Polygon clipping converter.
//!
//! Wraps `ConvAdaptorVpgen` around `VpgenClipPolygon`. Every polygon of the
//! source is closed and clipped to the box; the output is ready to be filled.

use crate::basics::{RectD, Vertex, VertexSource};
use crate::conv_adaptor_vpgen::ConvAdaptorVpgen;
use crate::vpgen_clip_polygon::VpgenClipPolygon;

// ============================================================================
// ConvClipPolygon
// ============================================================================

/// Clips closed polygons to a rectangle.
pub struct ConvClipPolygon<VS: VertexSource> {
    base: ConvAdaptorVpgen<VS, VpgenClipPolygon>,
}

impl<VS: VertexSource> ConvClipPolygon<VS> {
    pub fn new(source: VS) -> Self {
        Self {
            base: ConvAdaptorVpgen::new(source, VpgenClipPolygon::new()),
        }
    }

    pub fn set_clip_box(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.base.vpgen_mut().set_clip_box(x1, y1, x2, y2);
    }

    pub fn clip_box(&self) -> &RectD {
        self.base.vpgen().clip_box()
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

impl<VS: VertexSource> VertexSource for ConvClipPolygon<VS> {
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
