use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{AssessmentId, AssessmentSnapshot, AssessmentStatus};
use super::outcome::AssessmentOutcome;

/// Repository record containing the snapshot, scoring outcome, and status
/// metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub snapshot: AssessmentSnapshot,
    pub status: AssessmentStatus,
    pub outcome: Option<AssessmentOutcome>,
}

impl AssessmentRecord {
    pub fn score_summary(&self) -> String {
        match &self.outcome {
            Some(outcome) => outcome.summary(),
            None => "pending scoring".to_string(),
        }
    }

    pub fn status_view(&self) -> AssessmentStatusView {
        AssessmentStatusView {
            assessment_id: self.snapshot.assessment_id.clone(),
            facility_code: self.snapshot.facility.facility_code.clone(),
            status: self.status.label(),
            score_summary: self.score_summary(),
            overall_score: self.outcome.as_ref().map(|outcome| outcome.overall_score),
        }
    }
}

/// Storage abstraction so the service module can be exercised in
/// isolation.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    fn pending(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Trait describing outbound notification hooks (e.g., facility ops
/// e-mail or task-queue adapters).
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, notification: ScoreNotification) -> Result<(), NotificationError>;
}

/// Notification payload so routes/tests can assert integration
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreNotification {
    pub template: String,
    pub assessment_id: AssessmentId,
    pub details: BTreeMap<String, String>,
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of an assessment's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentStatusView {
    pub assessment_id: AssessmentId,
    pub facility_code: String,
    pub status: &'static str,
    pub score_summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<u8>,
}
