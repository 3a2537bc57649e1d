//! Status-Bar am unteren Bildschirmrand.

use crate::shared::RenderPlan;

/// Rendert die Status-Bar mit t₁, Polaren-Stufe und Punktanzahl.
pub fn render_status_bar(ctx: &egui::Context, plan: &RenderPlan) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("t1 = {:.2} (Use UP/DOWN keys to adjust)", plan.blend));

            ui.separator();

            ui.label(format!(
                "Polar Level: {} (Use LEFT/RIGHT keys to adjust)",
                plan.polar_level
            ));

            ui.separator();

            ui.label(format!("Points: {}", plan.markers.len()));

            ui.separator();

            ui.label("Press 'C' to clear points");
        });
    });
}
