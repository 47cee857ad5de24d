use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// ParamValue – one cell of the `probability` column
// ---------------------------------------------------------------------------

/// A dynamically-typed simulation parameter value. The results file usually
/// carries numeric probabilities, but the column may also hold categorical
/// identifiers, so cells are guess-typed rather than forced to `f64`.
/// Using `BTreeMap` / `BTreeSet` downstream so `ParamValue` must be `Ord`.
#[derive(Debug, Clone)]
pub enum ParamValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    /// Guess-type a raw cell: integer first, then float, else text.
    pub fn parse(s: &str) -> ParamValue {
        if let Ok(i) = s.parse::<i64>() {
            return ParamValue::Integer(i);
        }
        if let Ok(v) = s.parse::<f64>() {
            return ParamValue::Float(v);
        }
        ParamValue::Text(s.to_string())
    }
}

// -- Manual Eq/Ord so we can put ParamValue in BTreeSet --
//
// Equality goes through `cmp` so it agrees with the ordering even for NaN:
// a NaN probability dedupes to one entry and selects one partition.

impl PartialEq for ParamValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for ParamValue {}

impl PartialOrd for ParamValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ParamValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use ParamValue::*;
        fn discriminant(v: &ParamValue) -> u8 {
            match v {
                Integer(_) => 0,
                Float(_) => 1,
                Text(_) => 2,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Integer(i) => write!(f, "{i}"),
            // Whole floats keep a .0 suffix so 0.0 and 1.0 still read as floats.
            ParamValue::Float(v) if v.is_finite() && v.fract() == 0.0 => {
                write!(f, "{v:.1}")
            }
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the results table
// ---------------------------------------------------------------------------

/// A single measurement (one row of the source CSV).
#[derive(Debug, Clone)]
pub struct Record {
    /// Occupancy of the simulated road, cars per cell.
    pub density: f64,
    /// Throughput measured at that density.
    pub flow: f64,
    /// Slowdown probability the measurement was taken with.
    pub probability: ParamValue,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded results table
// ---------------------------------------------------------------------------

/// The full parsed dataset with the pre-computed set of series keys.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All records (rows), in file order.
    pub records: Vec<Record>,
    /// Sorted set of distinct probability values; one plot series each.
    pub probabilities: BTreeSet<ParamValue>,
}

impl Dataset {
    /// Build the series index from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let probabilities = records.iter().map(|r| r.probability.clone()).collect();
        Dataset {
            records,
            probabilities,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The (density, flow) points sharing one probability value, in file
    /// order. Derived on demand; the dataset itself stays flat.
    pub fn partition(&self, probability: &ParamValue) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .filter(|r| r.probability == *probability)
            .map(|r| (r.density, r.flow))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(density: f64, flow: f64, probability: &str) -> Record {
        Record {
            density,
            flow,
            probability: ParamValue::parse(probability),
        }
    }

    #[test]
    fn test_parse_guesses_types() {
        assert_eq!(ParamValue::parse("3"), ParamValue::Integer(3));
        assert_eq!(ParamValue::parse("0.2"), ParamValue::Float(0.2));
        assert_eq!(ParamValue::parse("high"), ParamValue::Text("high".into()));
    }

    #[test]
    fn test_float_display_keeps_decimal_point() {
        assert_eq!(ParamValue::parse("0.0").to_string(), "0.0");
        assert_eq!(ParamValue::parse("1.0").to_string(), "1.0");
        assert_eq!(ParamValue::parse("0.2").to_string(), "0.2");
        assert_eq!(ParamValue::parse("0.35").to_string(), "0.35");
        assert_eq!(ParamValue::parse("7").to_string(), "7");
        assert_eq!(ParamValue::parse("high").to_string(), "high");
    }

    #[test]
    fn test_distinct_probabilities_sort_ascending() {
        let dataset = Dataset::from_records(vec![
            record(0.1, 0.1, "0.6"),
            record(0.2, 0.2, "0.0"),
            record(0.3, 0.3, "0.3"),
            record(0.4, 0.4, "0.0"),
        ]);
        let order: Vec<String> = dataset.probabilities.iter().map(|p| p.to_string()).collect();
        assert_eq!(order, vec!["0.0", "0.3", "0.6"]);
    }

    #[test]
    fn test_partition_selects_matching_rows() {
        let dataset = Dataset::from_records(vec![
            record(0.1, 0.05, "0.3"),
            record(0.2, 0.09, "0.3"),
            record(0.1, 0.02, "0.6"),
        ]);
        assert_eq!(dataset.probabilities.len(), 2);
        assert_eq!(
            dataset.partition(&ParamValue::parse("0.3")),
            vec![(0.1, 0.05), (0.2, 0.09)]
        );
        assert_eq!(
            dataset.partition(&ParamValue::parse("0.6")),
            vec![(0.1, 0.02)]
        );
    }

    #[test]
    fn test_every_record_lands_in_exactly_one_partition() {
        let dataset = Dataset::from_records(vec![
            record(0.1, 0.1, "0.0"),
            record(0.2, 0.2, "0.5"),
            record(0.3, 0.3, "0.5"),
            record(0.4, 0.4, "1.0"),
            record(0.5, 0.5, "0.0"),
        ]);
        let total: usize = dataset
            .probabilities
            .iter()
            .map(|p| dataset.partition(p).len())
            .sum();
        assert_eq!(total, dataset.len());
        for r in &dataset.records {
            let hits = dataset
                .probabilities
                .iter()
                .filter(|p| r.probability == **p)
                .count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn test_nan_probability_forms_a_single_partition() {
        let dataset = Dataset::from_records(vec![
            record(0.1, 0.1, "nan"),
            record(0.2, 0.2, "nan"),
        ]);
        assert_eq!(dataset.probabilities.len(), 1);
        let p = dataset.probabilities.iter().next().unwrap();
        assert_eq!(dataset.partition(p).len(), 2);
    }

    #[test]
    fn test_mixed_types_order_integers_before_floats_before_text() {
        let mut set = BTreeSet::new();
        set.insert(ParamValue::parse("fast"));
        set.insert(ParamValue::parse("0.5"));
        set.insert(ParamValue::parse("2"));
        let order: Vec<String> = set.iter().map(|p| p.to_string()).collect();
        assert_eq!(order, vec!["2", "0.5", "fast"]);
    }
}
