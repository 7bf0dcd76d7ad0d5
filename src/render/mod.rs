//! GPU-Rendering mit wgpu.

mod callback;
mod point_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use callback::WgpuRenderCallback;
pub(crate) use point_renderer::{PointRenderer, PointStyle};
use types::RenderContext;

use eframe::egui_wgpu;

/// Haupt-Renderer für die Punktmenge.
///
/// Verwaltet seinen eigenen Zustand (GPU-Buffer, Pipelines).
/// Ablauf pro Frame: `prepare_scene()` lädt hoch, `paint()` zeichnet.
pub struct Renderer {
    point_renderer: PointRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let device = &render_state.device;

        // Eingebetteter Shader, kein Datei-I/O zur Laufzeit
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Point Plotter Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
        });

        Self {
            point_renderer: PointRenderer::new(render_state, &shader),
        }
    }

    /// Lädt die Szene in die GPU-Buffer.
    pub fn prepare_scene(
        &mut self,
        device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        scene: &RenderScene,
    ) {
        log::debug!(
            "Renderer.prepare_scene(): {} Punkte, Modus {}",
            scene.points.len(),
            scene.render_mode.label()
        );

        let ctx = RenderContext {
            device,
            queue,
            viewport_size: scene.viewport_size,
        };
        let style = PointStyle {
            transform: scene.transform,
            size: scene.point_size,
            color: scene.point_color,
        };

        self.point_renderer
            .prepare(&ctx, &scene.points, scene.render_mode, &style);
    }

    /// Zeichnet die vorbereitete Szene.
    pub fn paint(&self, render_pass: &mut eframe::wgpu::RenderPass<'static>) {
        self.point_renderer.paint(render_pass);
    }
}
