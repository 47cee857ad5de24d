/// Data layer: core types and CSV loading.
///
/// Architecture:
/// ```text
///  results_*.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, distinct probabilities
///   └──────────┘
///        │
///        ▼
///   partition(p)   one (density, flow) point set per probability
/// ```

pub mod loader;
pub mod model;
