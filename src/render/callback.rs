//! wgpu Custom Render Callback für egui-Integration.

use super::Renderer;
use crate::shared::RenderScene;
use std::sync::{Arc, Mutex};

/// Custom wgpu Render Callback – kapselt die Renderer-Interaktion für egui
pub struct WgpuRenderCallback {
    /// Geteilter Renderer-Zustand (thread-safe)
    pub renderer: Arc<Mutex<Renderer>>,
    /// Render-Szene für diesen Frame
    pub scene: RenderScene,
}

impl eframe::egui_wgpu::CallbackTrait for WgpuRenderCallback {
    fn prepare(
        &self,
        device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        _screen_descriptor: &eframe::egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut eframe::wgpu::CommandEncoder,
        _callback_resources: &mut eframe::egui_wgpu::CallbackResources,
    ) -> Vec<eframe::wgpu::CommandBuffer> {
        match self.renderer.lock() {
            Ok(mut renderer) => renderer.prepare_scene(device, queue, &self.scene),
            Err(_) => log::error!("Renderer-Lock fehlgeschlagen (Mutex vergiftet)"),
        }
        Vec::new()
    }

    fn paint<'b>(
        &'b self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        _callback_resources: &'b eframe::egui_wgpu::CallbackResources,
    ) {
        if !self.scene.has_geometry() {
            return;
        }
        match self.renderer.lock() {
            Ok(renderer) => renderer.paint(render_pass),
            Err(_) => log::error!("Renderer-Lock fehlgeschlagen (Mutex vergiftet)"),
        }
    }
}
