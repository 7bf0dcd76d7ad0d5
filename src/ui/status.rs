//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Punkte: {}", state.point_count()));
            ui.separator();

            ui.label(format!("Modus: {}", state.render_mode.label()));
            ui.separator();

            let t = &state.transform;
            ui.label(format!(
                "Rotation: {:.1}° | Skalierung: ({:.2}, {:.2})",
                t.rotation.to_degrees(),
                t.scale_x,
                t.scale_y
            ));
            ui.separator();

            let gesture = state
                .gestures
                .active()
                .map_or("–", |kind| kind.label());
            ui.label(format!("Geste: {}", gesture));
            ui.separator();

            let [w, h] = state.view.viewport.size();
            ui.label(format!("Viewport: {:.0}×{:.0}", w, h));

            // Statusnachricht (z.B. verworfene Geste)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label("H = Tastenbelegung");
            });
        });
    });
}
