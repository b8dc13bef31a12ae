//! Benchmark dashboard summaries.
//!
//! Metrics arrive as (actual, benchmark) pairs per tracked facility
//! metric; each is classified against its tolerance band and rendered
//! into a view row for the dashboard.

use serde::{Deserialize, Serialize};

use crate::scoring::benchmark::{BenchmarkComparison, BenchmarkError, DEFAULT_TOLERANCE_PERCENT};

/// Facility metrics tracked on the benchmarks dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    AuditCompletionRate,
    DocumentationQuality,
    StaffPerformance,
    PatientSatisfaction,
}

impl MetricKind {
    pub const fn label(self) -> &'static str {
        match self {
            MetricKind::AuditCompletionRate => "audit completion rate",
            MetricKind::DocumentationQuality => "documentation quality",
            MetricKind::StaffPerformance => "staff performance",
            MetricKind::PatientSatisfaction => "patient satisfaction",
        }
    }
}

/// One observed metric value alongside its target. Tolerance falls back
/// to the engine default when the reading does not carry its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReading {
    pub metric: MetricKind,
    pub actual: f64,
    pub benchmark: f64,
    #[serde(default)]
    pub tolerance_percent: Option<f64>,
}

/// Dashboard row: the classified status plus the gap rendered as
/// supporting text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricStatusView {
    pub metric: MetricKind,
    pub metric_label: &'static str,
    pub actual: f64,
    pub benchmark: f64,
    pub status: &'static str,
    pub gap_percent: f64,
}

/// Classifies every reading, failing the whole report on the first
/// undefined comparison rather than rendering a partial dashboard.
pub fn dashboard_summary(
    readings: &[BenchmarkReading],
) -> Result<Vec<MetricStatusView>, BenchmarkError> {
    readings
        .iter()
        .map(|reading| {
            let tolerance = reading
                .tolerance_percent
                .unwrap_or(DEFAULT_TOLERANCE_PERCENT);
            let comparison =
                BenchmarkComparison::evaluate(reading.actual, reading.benchmark, tolerance)?;

            Ok(MetricStatusView {
                metric: reading.metric,
                metric_label: reading.metric.label(),
                actual: reading.actual,
                benchmark: reading.benchmark,
                status: comparison.status.label(),
                gap_percent: comparison.gap_percent,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings() -> Vec<BenchmarkReading> {
        vec![
            BenchmarkReading {
                metric: MetricKind::AuditCompletionRate,
                actual: 92.0,
                benchmark: 90.0,
                tolerance_percent: None,
            },
            BenchmarkReading {
                metric: MetricKind::DocumentationQuality,
                actual: 70.0,
                benchmark: 85.0,
                tolerance_percent: None,
            },
            BenchmarkReading {
                metric: MetricKind::PatientSatisfaction,
                actual: 99.0,
                benchmark: 80.0,
                tolerance_percent: Some(10.0),
            },
        ]
    }

    #[test]
    fn summary_classifies_each_metric() {
        let rows = dashboard_summary(&readings()).expect("benchmarks nonzero");

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].status, "meets");
        assert_eq!(rows[1].status, "below");
        assert_eq!(rows[2].status, "exceeds");
        assert_eq!(rows[2].metric_label, "patient satisfaction");
    }

    #[test]
    fn summary_preserves_reading_order() {
        let rows = dashboard_summary(&readings()).expect("benchmarks nonzero");
        assert_eq!(rows[0].metric, MetricKind::AuditCompletionRate);
        assert_eq!(rows[1].metric, MetricKind::DocumentationQuality);
        assert_eq!(rows[2].metric, MetricKind::PatientSatisfaction);
    }

    #[test]
    fn summary_fails_on_zero_benchmark() {
        let readings = vec![BenchmarkReading {
            metric: MetricKind::StaffPerformance,
            actual: 50.0,
            benchmark: 0.0,
            tolerance_percent: None,
        }];

        assert_eq!(
            dashboard_summary(&readings),
            Err(BenchmarkError::ZeroBenchmark)
        );
    }

    #[test]
    fn per_reading_tolerance_overrides_the_default() {
        let tight = vec![BenchmarkReading {
            metric: MetricKind::StaffPerformance,
            actual: 96.0,
            benchmark: 100.0,
            tolerance_percent: Some(1.0),
        }];

        let rows = dashboard_summary(&tight).expect("benchmark nonzero");
        assert_eq!(rows[0].status, "below");
    }
}
