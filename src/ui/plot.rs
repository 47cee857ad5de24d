use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::config;
use crate::figure::build_series;
use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Fundamental-diagram scatter (central panel)
// ---------------------------------------------------------------------------

/// Render the interactive fundamental diagram in the central panel.
///
/// Same series, colours and labels as the exported PNG; series hidden in
/// the side panel are skipped.
pub fn diagram_plot(ui: &mut Ui, state: &ViewerState) {
    if state.dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("The results file contains no measurements");
        });
        return;
    }

    let series = build_series(&state.dataset, &state.colors);

    Plot::new("fundamental_diagram")
        .legend(Legend::default())
        .x_axis_label(config::X_LABEL)
        .y_axis_label(config::Y_LABEL)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for s in &series {
                if !state.is_visible(&s.probability) {
                    continue;
                }
                let (r, g, b) = s.color;
                let points: PlotPoints = s.points.iter().map(|&(x, y)| [x, y]).collect();

                plot_ui.points(
                    Points::new(points)
                        .name(&s.label)
                        .color(Color32::from_rgb(r, g, b))
                        .shape(MarkerShape::Cross)
                        .radius(4.0),
                );
            }
        });
}
