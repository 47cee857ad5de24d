use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Left side panel – series visibility
// ---------------------------------------------------------------------------

/// Render the left panel: one checkbox per probability series, tinted with
/// the series colour.
pub fn side_panel(ui: &mut Ui, state: &mut ViewerState) {
    ui.heading("Series");
    ui.separator();

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });
    ui.add_space(4.0);

    // Clone the keys so we can mutate state inside the loop.
    let probabilities: Vec<_> = state.dataset.probabilities.iter().cloned().collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for p in &probabilities {
                let (r, g, b) = state.colors.color_for(p);
                let text =
                    RichText::new(format!("Probability p={p}")).color(Color32::from_rgb(r, g, b));

                let mut checked = state.is_visible(p);
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle(p);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status strip.
pub fn top_bar(ui: &mut Ui, state: &ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(format!(
            "{} measurements, {}/{} series shown",
            state.dataset.len(),
            state.visible.len(),
            state.dataset.probabilities.len()
        ));

        ui.separator();

        ui.label(format!("Figure saved to {}", state.png_path.display()));
    });
}
