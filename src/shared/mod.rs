//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::PlotterOptions;
pub use options::{DEFAULT_WINDOW_SIZE, POINT_COLOR, POINT_SIZE_PX};
pub use render_scene::RenderScene;
