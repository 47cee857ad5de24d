use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{Dataset, ParamValue, Record};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while reading a results file.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read header row of {}: {source}", path.display())]
    Header {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} is missing required column '{column}'", path.display())]
    MissingColumn {
        path: PathBuf,
        column: &'static str,
    },

    #[error("failed to parse {} row {row}: {source}", path.display())]
    Row {
        path: PathBuf,
        row: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Columns every results file must provide.
const REQUIRED_COLUMNS: [&str; 3] = ["density", "flow", "probability"];

/// One raw CSV row. `serde` binds fields by header name, so the column
/// order in the file does not matter and extra columns are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    density: f64,
    flow: f64,
    probability: String,
}

/// Load simulation results from a CSV file.
///
/// Expected layout: a header row naming at least `density`, `flow` and
/// `probability`, then one measurement per row. `density` and `flow` must
/// parse as floats; `probability` is guess-typed (see [`ParamValue::parse`]).
pub fn load_csv(path: &Path) -> Result<Dataset, DataLoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| DataLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| DataLoadError::Header {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataLoadError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.map_err(|source| DataLoadError::Row {
            path: path.to_path_buf(),
            row: row_no,
            source,
        })?;
        records.push(Record {
            density: raw.density,
            flow: raw.flow,
            probability: ParamValue::parse(&raw.probability),
        });
    }

    Ok(Dataset::from_records(records))
}
