/// UI layer: panel layout and the interactive plot.

pub mod panels;
pub mod plot;
