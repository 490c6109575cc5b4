// File: crates/chart-core/src/series.rs
// Summary: Series and Dataset models passed to a single render call.

/// One named sequence of numeric values contributing one dimension of a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: Option<String>,
    /// Unit suffix appended to formatted readings (gauge).
    pub units: Option<String>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(values: Vec<f64>) -> Self {
        Self { label: None, units: None, values }
    }

    /// Single-reading series (pie slices, gauge readings).
    pub fn scalar_value(value: f64) -> Self {
        Self::new(vec![value])
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// The first value, used where a series contributes one scalar
    /// (pie, donut, gauge). Empty series contribute `0.0`.
    pub fn scalar(&self) -> f64 {
        self.values.first().copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordered collection of series for one render call. Insertion order is
/// significant: the first series is the independent (x-axis) series for line
/// and bubble charts, and order decides z-order and color assignment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub series: Vec<Series>,
}

impl Dataset {
    pub fn new(series: Vec<Series>) -> Self {
        Self { series }
    }

    /// Build a dataset from bare value arrays, in order.
    pub fn from_values(values: Vec<Vec<f64>>) -> Self {
        Self::new(values.into_iter().map(Series::new).collect())
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Values of series `idx`, or an empty slice when absent.
    pub fn values(&self, idx: usize) -> &[f64] {
        self.series.get(idx).map(|s| s.values.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_of_empty_series_is_zero() {
        assert_eq!(Series::new(vec![]).scalar(), 0.0);
        assert_eq!(Series::scalar_value(4.0).scalar(), 4.0);
    }

    #[test]
    fn missing_series_yields_empty_values() {
        let data = Dataset::from_values(vec![vec![1.0, 2.0]]);
        assert_eq!(data.values(0), &[1.0, 2.0]);
        assert!(data.values(3).is_empty());
    }
}
