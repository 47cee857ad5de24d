mod app;
mod color;
mod config;
mod data;
mod figure;
mod state;
mod ui;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use color::ColorMap;
use data::loader;
use data::model::Dataset;
use state::ViewerState;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let input = PathBuf::from(config::input_csv_name());
    let output = PathBuf::from(config::output_png_name());

    let (dataset, colors) = produce_diagram(&input, &output)?;

    if display_available() {
        app::show(ViewerState::new(dataset, colors, output))
            .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))?;
    } else {
        log::info!("No display available, skipping the interactive viewer");
    }

    Ok(())
}

/// Load the results and write the figure next to them. Returns the loaded
/// dataset and its colour map so the viewer can reuse both.
fn produce_diagram(input: &Path, output: &Path) -> anyhow::Result<(Dataset, ColorMap)> {
    let dataset = loader::load_csv(input)?;
    log::info!(
        "Loaded {} measurements across {} probability values from {}",
        dataset.len(),
        dataset.probabilities.len(),
        input.display()
    );

    let colors = ColorMap::new(&dataset.probabilities);
    figure::render_png(&dataset, &colors, output)?;
    log::info!("Wrote {}", output.display());

    Ok((dataset, colors))
}

/// Whether a windowing session is reachable. On Linux that means an X11 or
/// Wayland display; elsewhere assume one exists.
fn display_available() -> bool {
    if cfg!(target_os = "linux") {
        std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
    } else {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_produces_no_figure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("absent.csv");
        let output = dir.path().join("diagram.png");

        let err = produce_diagram(&input, &output).unwrap_err();
        assert!(err.to_string().contains("absent.csv"));
        assert!(!output.exists());
    }

    #[test]
    fn test_pipeline_writes_figure_for_valid_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("results.csv");
        std::fs::write(
            &input,
            "density,flow,probability\n0.1,0.4,0.0\n0.2,0.7,0.5\n",
        )
        .unwrap();
        let output = dir.path().join("diagram.png");

        let (dataset, colors) = produce_diagram(&input, &output).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(colors.legend_entries().len(), 2);
        assert!(output.exists());
    }
}
