//! Core-Domänentypen: Punkte, Normalisierung, Kurven, Viewport-Fit, Transformationen.

pub mod curve;
pub mod curve_presets;
mod error;
pub mod mirror;
pub mod normalize;
pub mod point;
pub mod point_store;
pub mod render_mode;
pub mod transform;
pub mod viewport;
/// Einpassen abgetasteter Kurven in den Viewport
///
/// Verschieben, seitenverhältnistreu skalieren, zentrieren,
/// vertikal spiegeln und in den Render-Raum normalisieren.
pub mod viewport_fit;

pub use curve::{sample_curve, CurveDomain};
pub use curve_presets::CurvePreset;
pub use error::GeometryError;
pub use mirror::{MirrorAxis, MirrorMode};
pub use normalize::{normalize, normalize_to_render, NormalizedCoordinate};
pub use point::{Point, PointSet};
pub use point_store::PointSetStore;
pub use render_mode::RenderMode;
pub use transform::TransformState;
pub use viewport::Viewport;
pub use viewport_fit::{fit_to_viewport, ViewportFitter, FIT_MARGIN_PX};
