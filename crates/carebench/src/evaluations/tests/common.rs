use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::evaluations::domain::{
    AssessmentId, AssessmentStatus, AssessmentSubmission, Criterion, EvaluationKind,
    FacilitySnapshot, Indicator, IndicatorMeasure,
};
use crate::evaluations::repository::{
    AssessmentRecord, AssessmentRepository, NotificationError, NotificationPublisher,
    RepositoryError, ScoreNotification,
};
use crate::evaluations::{AssessmentService, ScoringPolicy};
use crate::scoring::rating::Rating;

pub(super) fn facility() -> FacilitySnapshot {
    FacilitySnapshot {
        facility_code: "fac-001".to_string(),
        name: "Sunrise Care Center".to_string(),
    }
}

pub(super) fn conducted_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date")
}

pub(super) fn rated(id: &str, weight: f64, rating: Rating) -> Indicator {
    Indicator {
        id: id.to_string(),
        name: id.to_string(),
        weight,
        measure: IndicatorMeasure::Rating(rating),
    }
}

pub(super) fn measured(id: &str, weight: f64, percent: f64) -> Indicator {
    Indicator {
        id: id.to_string(),
        name: id.to_string(),
        weight,
        measure: IndicatorMeasure::Percent(percent),
    }
}

pub(super) fn criterion(id: &str, weight: f64, indicators: Vec<Indicator>) -> Criterion {
    Criterion {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        category: "infection-control".to_string(),
        weight,
        kind: EvaluationKind::Assessment,
        indicators,
    }
}

/// Two-level fixture: hygiene rolls up to 75, documentation to 40, and
/// the 60/40 criterion weights put the facility score at 61.
pub(super) fn submission() -> AssessmentSubmission {
    AssessmentSubmission {
        facility: facility(),
        kind: EvaluationKind::Assessment,
        conducted_on: conducted_on(),
        criteria: vec![
            criterion(
                "c-hygiene",
                60.0,
                vec![
                    rated("i-soap", 50.0, Rating::Pass),
                    rated("i-audit", 50.0, Rating::Partial),
                ],
            ),
            criterion(
                "c-docs",
                40.0,
                vec![measured("i-charts", 100.0, 40.0)],
            ),
        ],
    }
}

pub(super) fn low_scoring_submission() -> AssessmentSubmission {
    AssessmentSubmission {
        facility: facility(),
        kind: EvaluationKind::Audit,
        conducted_on: conducted_on(),
        criteria: vec![criterion(
            "c-docs",
            100.0,
            vec![measured("i-charts", 100.0, 20.0)],
        )],
    }
}

pub(super) fn build_service() -> (
    AssessmentService<MemoryRepository, MemoryNotifications>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifications>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifications = Arc::new(MemoryNotifications::default());
    let service = AssessmentService::new(
        repository.clone(),
        notifications.clone(),
        ScoringPolicy::default(),
    );
    (service, repository, notifications)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.snapshot.assessment_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.snapshot.assessment_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.snapshot.assessment_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.status == AssessmentStatus::Submitted)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifications {
    events: Arc<Mutex<Vec<ScoreNotification>>>,
}

impl MemoryNotifications {
    pub(super) fn events(&self) -> Vec<ScoreNotification> {
        self.events
            .lock()
            .expect("notification mutex poisoned")
            .clone()
    }
}

impl NotificationPublisher for MemoryNotifications {
    fn publish(&self, notification: ScoreNotification) -> Result<(), NotificationError> {
        self.events
            .lock()
            .expect("notification mutex poisoned")
            .push(notification);
        Ok(())
    }
}

pub(super) struct ConflictRepository;

impl AssessmentRepository for ConflictRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(None)
    }

    fn pending(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn pending(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assessment_router_with_service(
    service: AssessmentService<MemoryRepository, MemoryNotifications>,
) -> axum::Router {
    crate::evaluations::router::assessment_router(Arc::new(service))
}
