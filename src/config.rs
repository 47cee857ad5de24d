//! Fixed parameters of the study this tool visualizes.
//!
//! The simulation sweep is identified by its maximum speed and road length;
//! both file names encode them so results from different sweeps never get
//! mixed up.

/// Maximum vehicle speed the sweep was run with, in cells per step.
pub const VMAX: u32 = 5;

/// Road length of the simulated ring, in cells.
pub const ROAD_LENGTH: u32 = 1000;

/// Output bitmap size in pixels: an 8x5 inch canvas at 300 DPI.
pub const FIG_WIDTH: u32 = 2400;
pub const FIG_HEIGHT: u32 = 1500;

/// Chart title, shared by the PNG caption and the viewer window.
pub const TITLE: &str = "Fundamental Diagram";

/// Axis labels, shared by the PNG and the interactive plot.
pub const X_LABEL: &str = "Density";
pub const Y_LABEL: &str = "Flow";

/// Name of the results file the simulation sweep produces.
pub fn input_csv_name() -> String {
    format!("results_fundamental_diagram_vmax{VMAX}_L{ROAD_LENGTH}.csv")
}

/// Name of the figure written next to the results file.
pub fn output_png_name() -> String {
    format!("fundamental_diagram_vmax{VMAX}.png")
}

/// Title of the viewer window, carrying the sweep's vmax.
pub fn window_title() -> String {
    format!("{TITLE} – vmax={VMAX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_encode_run_parameters() {
        assert_eq!(
            input_csv_name(),
            "results_fundamental_diagram_vmax5_L1000.csv"
        );
        assert_eq!(output_png_name(), "fundamental_diagram_vmax5.png");
    }

    #[test]
    fn test_window_title_names_the_sweep() {
        assert_eq!(window_title(), "Fundamental Diagram – vmax=5");
    }
}
