//! # path-vcgen
//!
//! Vertex generators for 2D vector paths. Every stage consumes and produces
//! the same pull protocol ([`VertexSource`]), so stages chain as decorators:
//!
//! ```
//! use path_vcgen::{ConvDash, ConvStroke, PathStorage, VertexSource, vertices};
//!
//! let mut path = PathStorage::new();
//! path.move_to(0.0, 0.0);
//! path.line_to(100.0, 0.0);
//!
//! let mut dash = ConvDash::new(&mut path);
//! dash.add_dash(10.0, 5.0);
//! let mut stroke = ConvStroke::new(dash);
//! stroke.set_width(2.0);
//!
//! let outline: Vec<_> = vertices(&mut stroke, 0).collect();
//! assert!(!outline.is_empty());
//! ```
//!
//! ## Stages
//!
//! 1. **Path storage**: [`VertexSequence`] keeps source vertices together
//!    with per-segment distances, collapsing coincident points.
//! 2. **Geometry**: [`MathStroke`] builds joins and caps,
//!    [`clip_liang_barsky`] clips segments against a box.
//! 3. **Generators**: stroke, dash, contour, smooth corners and terminal
//!    markers (`vcgen_*`), plus the clip processors (`vpgen_*`).
//! 4. **Converters**: `conv_*` adaptors wiring a source to a generator.
//!
//! Generators have no error channel: "nothing to draw" is simply
//! [`PathCommand::STOP`]. Configuration types can be validated up front and
//! report [`StyleError`].

// Foundation
pub mod basics;
pub mod error;
pub mod math;
pub mod vertex_sequence;

// Geometry primitives
pub mod clip_liang_barsky;
pub mod math_stroke;
pub mod path_storage;

// Vertex generators and processors
pub mod vcgen_contour;
pub mod vcgen_dash;
pub mod vcgen_markers_term;
pub mod vcgen_smooth_poly1;
pub mod vcgen_stroke;
pub mod vpgen_clip_polygon;
pub mod vpgen_clip_polyline;

// Converters
pub mod conv_adaptor_vcgen;
pub mod conv_adaptor_vpgen;
pub mod conv_clip_polygon;
pub mod conv_clip_polyline;
pub mod conv_contour;
pub mod conv_dash;
pub mod conv_smooth_poly1;
pub mod conv_stroke;

pub use basics::{vertices, PathCommand, PointD, RectD, Vertex, VertexSource, Vertices};
pub use conv_adaptor_vcgen::{ConvAdaptorVcgen, Markers, NullMarkers, VcgenGenerator};
pub use conv_adaptor_vpgen::{ConvAdaptorVpgen, VpgenProcessor};
pub use conv_clip_polygon::ConvClipPolygon;
pub use conv_clip_polyline::ConvClipPolyline;
pub use conv_contour::ConvContour;
pub use conv_dash::ConvDash;
pub use conv_smooth_poly1::ConvSmoothPoly1;
pub use conv_stroke::ConvStroke;
pub use error::StyleError;
pub use math_stroke::{InnerJoin, LineCap, LineJoin, MathStroke, StrokeStyle};
pub use path_storage::PathStorage;
pub use vcgen_contour::VcgenContour;
pub use vcgen_dash::{DashCursor, DashPattern, VcgenDash};
pub use vcgen_markers_term::VcgenMarkersTerm;
pub use vcgen_smooth_poly1::VcgenSmoothPoly1;
pub use vcgen_stroke::VcgenStroke;
pub use vpgen_clip_polygon::VpgenClipPolygon;
pub use vpgen_clip_polyline::VpgenClipPolyline;
pub use vertex_sequence::{VertexDist, VertexSequence};
