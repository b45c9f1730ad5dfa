//! Polyline clipping converter.
//!
//! Wraps `ConvAdaptorVpgen` around `VpgenClipPolyline`. The output never
//! contains `END_POLY`, so closed input comes out as an open line that
//! includes its closing edge.

use crate::basics::{RectD, Vertex, VertexSource};
use crate::conv_adaptor_vpgen::ConvAdaptorVpgen;
use crate::vpgen_clip_polyline::VpgenClipPolyline;

/// Clips polylines to a rectangle.
pub struct ConvClipPolyline<VS: VertexSource> {
    base: ConvAdaptorVpgen<VS, VpgenClipPolyline>,
}

impl<VS: VertexSource> ConvClipPolyline<VS> {
    pub fn new(source: VS) -> Self {
        Self {
            base: ConvAdaptorVpgen::new(source, VpgenClipPolyline::new()),
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

impl<VS: VertexSource> VertexSource for ConvClipPolyline<VS> {
    fn rewind(&mut self, path_id: u32) {
        self.base.rewind(path_id);
    }

    fn vertex(&mut self) -> Vertex {
        self.base.vertex()
    }
}
