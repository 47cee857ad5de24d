use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::color::ColorMap;
use crate::data::model::{Dataset, ParamValue};

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering. The window only opens
/// after a successful load, so the dataset is always present.
pub struct ViewerState {
    /// Loaded results.
    pub dataset: Dataset,

    /// Colour assignment, shared with the exported figure.
    pub colors: ColorMap,

    /// Probability series currently shown in the plot.
    pub visible: BTreeSet<ParamValue>,

    /// Where the exported figure was written; shown in the top bar.
    pub png_path: PathBuf,
}

impl ViewerState {
    /// Start with every series visible, mirroring the exported figure.
    pub fn new(dataset: Dataset, colors: ColorMap, png_path: PathBuf) -> Self {
        let visible = dataset.probabilities.clone();
        ViewerState {
            dataset,
            colors,
            visible,
            png_path,
        }
    }

    /// Whether the series for `probability` is currently shown.
    pub fn is_visible(&self, probability: &ParamValue) -> bool {
        self.visible.contains(probability)
    }

    /// Show/hide a single series.
    pub fn toggle(&mut self, probability: &ParamValue) {
        if !self.visible.remove(probability) {
            self.visible.insert(probability.clone());
        }
    }

    /// Show every series.
    pub fn select_all(&mut self) {
        self.visible = self.dataset.probabilities.clone();
    }

    /// Hide every series.
    pub fn select_none(&mut self) {
        self.visible.clear();
    }
}
