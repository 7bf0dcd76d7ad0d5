//! Point-Plotter.
//!
//! Interaktiver 2D-Punkt-Plotter mit Kurvengenerator und affinen Gesten.
//! egui für Eingabe und Panels, wgpu für die Punktgeometrie.

use eframe::egui;
use eframe::egui_wgpu;
use point_plotter::{render, ui, AppController, AppIntent, AppState, PlotterOptions};
use std::sync::{Arc, Mutex};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Point-Plotter v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let plotter_options = PlotterOptions::load_from_file(&PlotterOptions::config_path());

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(plotter_options.window_size)
                .with_title("Point-Plotter"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Point-Plotter",
            options,
            Box::new(|cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                Ok(Box::new(PlotterApp::new(render_state, plotter_options)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct PlotterApp {
    state: AppState,
    controller: AppController,
    renderer: Arc<Mutex<render::Renderer>>,
    input: ui::InputState,
}

impl PlotterApp {
    fn new(render_state: &egui_wgpu::RenderState, options: PlotterOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            renderer: Arc::new(Mutex::new(render::Renderer::new(render_state))),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for PlotterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        if has_meaningful_events || self.state.should_exit {
            ctx.request_repaint();
        }
    }
}

impl PlotterApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::show_key_help(ctx, self.state.ui.show_key_help));

        let background = self.state.options.background_color32();
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(background))
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

                events.extend(self.input.collect_viewport_events(ui, rect));

                let scene = self
                    .controller
                    .build_render_scene(&self.state, [rect.width(), rect.height()]);

                let callback = egui_wgpu::Callback::new_paint_callback(
                    rect,
                    render::WgpuRenderCallback {
                        renderer: self.renderer.clone(),
                        scene,
                    },
                );

                ui.painter().add(callback);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
