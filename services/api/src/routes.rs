use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use carebench::benchmarks::{dashboard_summary, BenchmarkReading, MetricStatusView};
use carebench::error::AppError;
use carebench::evaluations::repository::{AssessmentRepository, NotificationPublisher};
use carebench::evaluations::router::assessment_router;
use carebench::evaluations::AssessmentService;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct BenchmarkReportRequest {
    pub(crate) readings: Vec<BenchmarkReading>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BenchmarkReportResponse {
    pub(crate) metrics: Vec<MetricStatusView>,
}

pub(crate) fn with_assessment_routes<R, N>(
    service: Arc<AssessmentService<R, N>>,
) -> axum::Router
where
    R: AssessmentRepository + 'static,
    N: NotificationPublisher + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/benchmarks/report",
            axum::routing::post(benchmark_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn benchmark_report_endpoint(
    Json(payload): Json<BenchmarkReportRequest>,
) -> Result<Json<BenchmarkReportResponse>, AppError> {
    let metrics = dashboard_summary(&payload.readings)?;
    Ok(Json(BenchmarkReportResponse { metrics }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use carebench::benchmarks::MetricKind;

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
                actual: 70.0,
                benchmark: 85.0,
                tolerance_percent: None,
            },
        ]
    }

    #[tokio::test]
    async fn benchmark_report_endpoint_classifies_metrics() {
        let request = BenchmarkReportRequest {
            readings: sample_readings(),
        };

        let Json(body) = benchmark_report_endpoint(Json(request))
            .await
            .expect("report builds");

        assert_eq!(body.metrics.len(), 2);
        assert_eq!(body.metrics[0].status, "meets");
        assert_eq!(body.metrics[1].status, "below");
    }

    #[tokio::test]
    async fn benchmark_report_endpoint_rejects_zero_benchmarks() {
        let request = BenchmarkReportRequest {
            readings: vec![BenchmarkReading {
                metric: MetricKind::StaffPerformance,
                actual: 50.0,
                benchmark: 0.0,
                tolerance_percent: None,
            }],
        };

        let error = benchmark_report_endpoint(Json(request))
            .await
            .expect_err("zero benchmark rejected");
        assert!(matches!(error, AppError::Benchmark(_)));
    }
}
