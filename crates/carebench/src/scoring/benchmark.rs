use serde::{Deserialize, Serialize};

/// Tolerance applied when a comparison does not specify its own, in
/// percent of the benchmark value.
pub const DEFAULT_TOLERANCE_PERCENT: f64 = 5.0;

/// Relationship of an achieved value to its benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkStatus {
    Below,
    Meets,
    Exceeds,
}

impl BenchmarkStatus {
    pub const fn label(self) -> &'static str {
        match self {
            BenchmarkStatus::Below => "below",
            BenchmarkStatus::Meets => "meets",
            BenchmarkStatus::Exceeds => "exceeds",
        }
    }
}

/// Classification against a zero benchmark is undefined; the error is
/// surfaced instead of letting `Infinity`/`NaN` masquerade as a status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BenchmarkError {
    #[error("benchmark value is zero; comparison is undefined")]
    ZeroBenchmark,
}

/// Classifies `actual` against `benchmark` within a tolerance band.
///
/// With `percentage = actual / benchmark * 100`: strictly above
/// `100 + tolerance` is `Exceeds`, at or above `100 - tolerance` is
/// `Meets`, anything lower is `Below`.
pub fn classify(
    actual: f64,
    benchmark: f64,
    tolerance_percent: f64,
) -> Result<BenchmarkStatus, BenchmarkError> {
    if benchmark == 0.0 {
        return Err(BenchmarkError::ZeroBenchmark);
    }

    let percentage = actual / benchmark * 100.0;
    let status = if percentage > 100.0 + tolerance_percent {
        BenchmarkStatus::Exceeds
    } else if percentage >= 100.0 - tolerance_percent {
        BenchmarkStatus::Meets
    } else {
        BenchmarkStatus::Below
    };

    Ok(status)
}

/// Gap between benchmark and achieved value in percent of the benchmark.
/// Positive means the actual value trails the benchmark; sign presentation
/// is the caller's concern.
pub fn performance_gap(actual: f64, benchmark: f64) -> Result<f64, BenchmarkError> {
    if benchmark == 0.0 {
        return Err(BenchmarkError::ZeroBenchmark);
    }

    Ok((benchmark - actual) / benchmark * 100.0)
}

/// One ephemeral comparison, computed per call and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenchmarkComparison {
    pub actual: f64,
    pub benchmark: f64,
    pub tolerance_percent: f64,
    pub status: BenchmarkStatus,
    pub gap_percent: f64,
}

impl BenchmarkComparison {
    pub fn evaluate(
        actual: f64,
        benchmark: f64,
        tolerance_percent: f64,
    ) -> Result<Self, BenchmarkError> {
        let status = classify(actual, benchmark, tolerance_percent)?;
        let gap_percent = performance_gap(actual, benchmark)?;

        Ok(Self {
            actual,
            benchmark,
            tolerance_percent,
            status,
            gap_percent,
        })
    }

    pub fn with_default_tolerance(actual: f64, benchmark: f64) -> Result<Self, BenchmarkError> {
        Self::evaluate(actual, benchmark, DEFAULT_TOLERANCE_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_band_boundaries_are_exact() {
        assert_eq!(classify(95.0, 100.0, 5.0), Ok(BenchmarkStatus::Meets));
        assert_eq!(classify(94.0, 100.0, 5.0), Ok(BenchmarkStatus::Below));
        assert_eq!(classify(106.0, 100.0, 5.0), Ok(BenchmarkStatus::Exceeds));
        assert_eq!(classify(105.0, 100.0, 5.0), Ok(BenchmarkStatus::Meets));
    }

    #[test]
    fn classification_scales_with_the_benchmark() {
        assert_eq!(classify(47.0, 50.0, 5.0), Ok(BenchmarkStatus::Below));
        assert_eq!(classify(48.0, 50.0, 5.0), Ok(BenchmarkStatus::Meets));
        assert_eq!(classify(53.0, 50.0, 5.0), Ok(BenchmarkStatus::Exceeds));
    }

    #[test]
    fn performance_gap_signs_trail_and_excess() {
        assert_eq!(performance_gap(90.0, 100.0), Ok(10.0));
        assert_eq!(performance_gap(110.0, 100.0), Ok(-10.0));
    }

    #[test]
    fn zero_benchmark_is_an_explicit_error() {
        assert_eq!(
            classify(50.0, 0.0, 5.0),
            Err(BenchmarkError::ZeroBenchmark)
        );
        assert_eq!(
            performance_gap(50.0, 0.0),
            Err(BenchmarkError::ZeroBenchmark)
        );
    }

    #[test]
    fn comparison_bundles_status_and_gap() {
        let comparison =
            BenchmarkComparison::with_default_tolerance(92.0, 100.0).expect("benchmark nonzero");
        assert_eq!(comparison.status, BenchmarkStatus::Below);
        assert_eq!(comparison.gap_percent, 8.0);
        assert_eq!(comparison.tolerance_percent, DEFAULT_TOLERANCE_PERCENT);
    }
}
