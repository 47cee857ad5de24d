use std::collections::{BTreeMap, BTreeSet};

use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::ParamValue;

/// An 8-bit RGB triple. Backend-neutral so the same palette feeds both the
/// PNG renderer and the interactive viewer.
pub type Rgb = (u8, u8, u8);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            (
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: probability value → colour
// ---------------------------------------------------------------------------

/// Assigns each distinct probability value its own colour. Keyed by a
/// `BTreeMap` so the assignment is deterministic for a given value set.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<ParamValue, Rgb>,
    default_color: Rgb,
}

impl ColorMap {
    /// Build a colour map from the sorted set of distinct probabilities.
    pub fn new(probabilities: &BTreeSet<ParamValue>) -> Self {
        let palette = generate_palette(probabilities.len());
        let mapping: BTreeMap<ParamValue, Rgb> = probabilities
            .iter()
            .zip(palette.into_iter())
            .map(|(v, c)| (v.clone(), c))
            .collect();

        ColorMap {
            mapping,
            default_color: (128, 128, 128),
        }
    }

    /// Look up the colour for a probability value.
    pub fn color_for(&self, value: &ParamValue) -> Rgb {
        self.mapping
            .get(value)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Legend entries (value label, colour) in ascending value order.
    pub fn legend_entries(&self) -> Vec<(String, Rgb)> {
        self.mapping
            .iter()
            .map(|(v, c)| (v.to_string(), *c))
            .collect()
    }
}
