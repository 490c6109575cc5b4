// File: crates/chart-core/src/error.rs
// Summary: Opt-in boundary validation for datasets.

use thiserror::Error;

use crate::chart::ChartKind;
use crate::series::Dataset;

/// Shape problems a caller may check for before rendering.
///
/// Renderers never perform these checks themselves: malformed input degrades
/// to degenerate or non-finite geometry instead of failing, so rendering
/// always succeeds. Validation is purely advisory and cannot change the
/// output for well-formed input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("dataset has no series")]
    Empty,
    #[error("{kind:?} chart needs at least {required} series, got {got}")]
    TooFewSeries { kind: ChartKind, required: usize, got: usize },
    #[error("series {index} has {got} values, expected {expected}")]
    LengthMismatch { index: usize, expected: usize, got: usize },
}

impl Dataset {
    /// Check this dataset against the shape `kind` expects.
    pub fn check(&self, kind: ChartKind) -> Result<(), DataError> {
        if self.series.is_empty() {
            return Err(DataError::Empty);
        }
        let required = match kind {
            ChartKind::Line | ChartKind::Pie | ChartKind::Donut => 2,
            ChartKind::Bubble => 3,
            _ => 1,
        };
        if self.series.len() < required {
            return Err(DataError::TooFewSeries { kind, required, got: self.series.len() });
        }
        // histogram and radar index all series at every axis position
        if matches!(kind, ChartKind::Histogram | ChartKind::Radar) {
            let expected = self.series[0].len();
            for (index, s) in self.series.iter().enumerate().skip(1) {
                if s.len() != expected {
                    return Err(DataError::LengthMismatch { index, expected, got: s.len() });
                }
            }
        }
        Ok(())
    }
}
