use eframe::egui;

use crate::config;
use crate::state::ViewerState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FdPlotApp {
    pub state: ViewerState,
}

impl FdPlotApp {
    pub fn new(state: ViewerState) -> Self {
        Self { state }
    }
}

impl eframe::App for FdPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status strip ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: series visibility ----
        egui::SidePanel::left("series_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::diagram_plot(ui, &self.state);
        });
    }
}

/// Open the interactive viewer window. Blocks until the window is closed.
pub fn show(state: ViewerState) -> eframe::Result {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let title = config::window_title();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |_cc| Ok(Box::new(FdPlotApp::new(state)))),
    )
}
