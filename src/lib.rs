//! Point-Plotter Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, GestureKind, UiState, ViewState};
pub use core::{
    CurvePreset, GeometryError, MirrorAxis, MirrorMode, Point, PointSet, PointSetStore,
    RenderMode, TransformState, Viewport,
};
pub use shared::{PlotterOptions, RenderScene};
