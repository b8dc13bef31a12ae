use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::domain::{AssessmentId, AssessmentStatus, AssessmentSubmission};
use super::outcome::{score_assessment, AssessmentOutcome};
use super::policy::ScoringPolicy;
use super::repository::{
    AssessmentRecord, AssessmentRepository, NotificationError, NotificationPublisher,
    RepositoryError, ScoreNotification,
};
use super::validate::{SubmissionGuard, ValidationError};

/// Service composing the submission guard, repository, and scoring
/// policy.
pub struct AssessmentService<R, N> {
    guard: SubmissionGuard,
    repository: Arc<R>,
    notifications: Arc<N>,
    policy: ScoringPolicy,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("asmt-{id:06}"))
}

impl<R, N> AssessmentService<R, N>
where
    R: AssessmentRepository + 'static,
    N: NotificationPublisher + 'static,
{
    pub fn new(repository: Arc<R>, notifications: Arc<N>, policy: ScoringPolicy) -> Self {
        Self {
            guard: SubmissionGuard::default(),
            repository,
            notifications,
            policy,
        }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Submit a new assessment, returning the repository-backed record.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let mut snapshot = self.guard.snapshot_from_submission(submission)?;
        snapshot.assessment_id = next_assessment_id();

        let record = AssessmentRecord {
            snapshot,
            status: AssessmentStatus::Submitted,
            outcome: None,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Score a submitted assessment and persist the outcome. Re-scoring
    /// recomputes from the stored snapshot; the snapshot itself never
    /// changes.
    pub fn score(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<AssessmentOutcome, AssessmentServiceError> {
        let mut record = self
            .repository
            .fetch(assessment_id)?
            .ok_or(RepositoryError::NotFound)?;

        let outcome = score_assessment(
            record.snapshot.assessment_id.clone(),
            &record.snapshot.criteria,
        );

        record.status = AssessmentStatus::Scored;
        record.outcome = Some(outcome.clone());
        self.repository.update(record)?;

        if outcome.overall_score < self.policy.alert_below_score {
            let mut details = BTreeMap::new();
            details.insert(
                "overall_score".to_string(),
                outcome.overall_score.to_string(),
            );
            details.insert(
                "band".to_string(),
                outcome.overall_band.label().to_string(),
            );
            self.notifications.publish(ScoreNotification {
                template: "assessment_below_threshold".to_string(),
                assessment_id: outcome.assessment_id.clone(),
                details,
            })?;
        }

        Ok(outcome)
    }

    /// Fetch an assessment and current status for API responses.
    pub fn get(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(assessment_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notification(#[from] NotificationError),
}
