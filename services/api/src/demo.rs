use crate::infra::{InMemoryAssessmentRepository, InMemoryNotificationPublisher};
use carebench::benchmarks::{dashboard_summary, BenchmarkReading, MetricKind};
use carebench::error::AppError;
use carebench::evaluations::domain::{
    AssessmentSubmission, Criterion, EvaluationKind, FacilitySnapshot, Indicator, IndicatorMeasure,
};
use carebench::evaluations::import::RatingImporter;
use carebench::evaluations::{AssessmentService, ScoringPolicy};
use carebench::scoring::benchmark::DEFAULT_TOLERANCE_PERCENT;
use carebench::scoring::rating::Rating;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) conducted_on: Option<NaiveDate>,
    /// Facility code shown in the demo output.
    #[arg(long, default_value = "fac-001")]
    pub(crate) facility_code: String,
    /// Optional ratings CSV export to hydrate the assessment.
    #[arg(long)]
    pub(crate) ratings_csv: Option<PathBuf>,
    /// Skip the benchmark dashboard portion of the demo.
    #[arg(long)]
    pub(crate) skip_benchmarks: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BenchmarkReportArgs {
    /// Tolerance band in percent of the benchmark, applied to readings
    /// that do not carry their own.
    #[arg(long)]
    pub(crate) tolerance_percent: Option<f64>,
    /// Optional JSON file with an array of metric readings; sample
    /// readings are used when omitted.
    #[arg(long)]
    pub(crate) readings_json: Option<PathBuf>,
}

pub(crate) fn run_benchmark_report(args: BenchmarkReportArgs) -> Result<(), AppError> {
    let BenchmarkReportArgs {
        tolerance_percent,
        readings_json,
    } = args;

    let mut readings = match readings_json {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str::<Vec<BenchmarkReading>>(&raw)
                .map_err(|err| AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))?
        }
        None => sample_readings(),
    };

    if let Some(tolerance) = tolerance_percent {
        for reading in &mut readings {
            reading.tolerance_percent.get_or_insert(tolerance);
        }
    }

    render_benchmark_dashboard(&readings)?;
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        conducted_on,
        facility_code,
        ratings_csv,
        skip_benchmarks,
    } = args;

    let conducted_on = conducted_on.unwrap_or_else(|| Local::now().date_naive());
    let facility = FacilitySnapshot {
        facility_code,
        name: "Sunrise Care Center".to_string(),
    };

    println!("Facility evaluation demo");
    let (submission, imported) = match ratings_csv {
        Some(path) => {
            let submission = RatingImporter::from_path(
                path,
                facility.clone(),
                EvaluationKind::Audit,
                conducted_on,
            )?;
            (submission, true)
        }
        None => (demo_submission(facility.clone(), conducted_on), false),
    };

    if imported {
        println!("Data source: ratings CSV import");
    } else {
        println!("Data source: built-in sample assessment");
    }
    println!(
        "Facility {} ({}), evaluated {}",
        submission.facility.facility_code, submission.facility.name, conducted_on
    );

    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let notifications = Arc::new(InMemoryNotificationPublisher::default());
    let service = Arc::new(AssessmentService::new(
        repository,
        notifications.clone(),
        ScoringPolicy::default(),
    ));

    let record = match service.submit(submission) {
        Ok(record) => record,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    };
    println!(
        "- Received assessment {} -> status {}",
        record.snapshot.assessment_id.0,
        record.status.label()
    );

    let outcome = match service.score(&record.snapshot.assessment_id) {
        Ok(outcome) => outcome,
        Err(err) => {
            println!("  Scoring unavailable: {}", err);
            return Ok(());
        }
    };
    println!(
        "  Overall score: {} ({})",
        outcome.overall_score,
        outcome.overall_band.label()
    );
    println!("  Criterion trail:");
    for entry in &outcome.criteria {
        println!(
            "    - {} (weight {}): {} ({})",
            entry.name,
            entry.weight,
            entry.score,
            entry.band.label()
        );
    }

    let events = notifications.events();
    if events.is_empty() {
        println!("  Notifications: none dispatched");
    } else {
        println!("  Notifications:");
        for event in events {
            println!(
                "    - template={} -> {}",
                event.template, event.assessment_id.0
            );
        }
    }

    if skip_benchmarks {
        return Ok(());
    }

    println!("\nBenchmark dashboard");
    let mut readings = sample_readings();
    // Feed the fresh facility score into the staff performance metric.
    for reading in &mut readings {
        if reading.metric == MetricKind::StaffPerformance {
            reading.actual = outcome.overall_score as f64;
        }
    }
    render_benchmark_dashboard(&readings)?;

    Ok(())
}

fn demo_submission(facility: FacilitySnapshot, conducted_on: NaiveDate) -> AssessmentSubmission {
    AssessmentSubmission {
        facility,
        kind: EvaluationKind::Assessment,
        conducted_on,
        criteria: vec![
            Criterion {
                id: "c-hygiene".to_string(),
                name: "Hand Hygiene".to_string(),
                description: "Hand hygiene protocol adherence".to_string(),
                category: "infection-control".to_string(),
                weight: 60.0,
                kind: EvaluationKind::Assessment,
                indicators: vec![
                    Indicator {
                        id: "i-soap".to_string(),
                        name: "Soap availability".to_string(),
                        weight: 50.0,
                        measure: IndicatorMeasure::Rating(Rating::Pass),
                    },
                    Indicator {
                        id: "i-audit".to_string(),
                        name: "Audit trail".to_string(),
                        weight: 50.0,
                        measure: IndicatorMeasure::Rating(Rating::HighPartial),
                    },
                ],
            },
            Criterion {
                id: "c-docs".to_string(),
                name: "Documentation".to_string(),
                description: "Chart completeness and timeliness".to_string(),
                category: "records".to_string(),
                weight: 40.0,
                kind: EvaluationKind::Assessment,
                indicators: vec![
                    Indicator {
                        id: "i-charts".to_string(),
                        name: "Chart completeness".to_string(),
                        weight: 70.0,
                        measure: IndicatorMeasure::Percent(82.0),
                    },
                    Indicator {
                        id: "i-isolation".to_string(),
                        name: "Isolation room logs".to_string(),
                        weight: 30.0,
                        measure: IndicatorMeasure::Rating(Rating::NotApplicable),
                    },
                ],
            },
        ],
    }
}

fn sample_readings() -> Vec<BenchmarkReading> {
    vec![
        BenchmarkReading {
            metric: MetricKind::AuditCompletionRate,
            actual: 92.0,
            benchmark: 90.0,
            tolerance_percent: None,
        },
        BenchmarkReading {
            metric: MetricKind::DocumentationQuality,
            actual: 78.0,
            benchmark: 85.0,
            tolerance_percent: None,
        },
        BenchmarkReading {
            metric: MetricKind::StaffPerformance,
            actual: 81.0,
            benchmark: 80.0,
            tolerance_percent: None,
        },
        BenchmarkReading {
            metric: MetricKind::PatientSatisfaction,
            actual: 88.0,
            benchmark: 75.0,
            tolerance_percent: None,
        },
    ]
}

fn render_benchmark_dashboard(readings: &[BenchmarkReading]) -> Result<(), AppError> {
    let rows = dashboard_summary(readings)?;
    for row in rows {
        let tolerance = readings
            .iter()
            .find(|reading| reading.metric == row.metric)
            .and_then(|reading| reading.tolerance_percent)
            .unwrap_or(DEFAULT_TOLERANCE_PERCENT);
        println!(
            "- {}: {:.1} vs target {:.1} -> {} (gap {:+.1}%, tolerance +/-{:.0}%)",
            row.metric_label, row.actual, row.benchmark, row.status, -row.gap_percent, tolerance
        );
    }
    Ok(())
}
