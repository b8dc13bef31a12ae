use super::common::*;
use crate::evaluations::{SubmissionGuard, ValidationError};
use crate::scoring::rating::Rating;

#[test]
fn guard_snapshots_a_clean_submission() {
    let guard = SubmissionGuard::default();
    let snapshot = guard
        .snapshot_from_submission(submission())
        .expect("clean submission");

    assert_eq!(snapshot.facility, facility());
    assert_eq!(snapshot.criteria.len(), 2);
    // The id is assigned later by the service.
    assert!(snapshot.assessment_id.0.is_empty());
}

#[test]
fn guard_rejects_duplicate_criterion_ids() {
    let mut submission = submission();
    let duplicate = submission.criteria[0].clone();
    submission.criteria.push(duplicate);

    let error = SubmissionGuard::default()
        .snapshot_from_submission(submission)
        .expect_err("duplicate criterion");

    match error {
        ValidationError::DuplicateCriterion(id) => assert_eq!(id, "c-hygiene"),
        other => panic!("expected duplicate criterion, got {other:?}"),
    }
}

#[test]
fn guard_rejects_duplicate_indicator_ids_within_a_criterion() {
    let mut submission = submission();
    let duplicate = submission.criteria[0].indicators[0].clone();
    submission.criteria[0].indicators.push(duplicate);

    let error = SubmissionGuard::default()
        .snapshot_from_submission(submission)
        .expect_err("duplicate indicator");

    match error {
        ValidationError::DuplicateIndicator { criterion_id, id } => {
            assert_eq!(criterion_id, "c-hygiene");
            assert_eq!(id, "i-soap");
        }
        other => panic!("expected duplicate indicator, got {other:?}"),
    }
}

#[test]
fn guard_rejects_weights_outside_the_authoring_range() {
    let mut submission = submission();
    submission.criteria[0].weight = -5.0;

    let error = SubmissionGuard::default()
        .snapshot_from_submission(submission)
        .expect_err("negative weight");
    assert!(matches!(
        error,
        ValidationError::CriterionWeightOutOfRange { .. }
    ));

    let mut submission = super::common::submission();
    submission.criteria[0].indicators[0].weight = 120.0;

    let error = SubmissionGuard::default()
        .snapshot_from_submission(submission)
        .expect_err("oversized weight");
    assert!(matches!(
        error,
        ValidationError::IndicatorWeightOutOfRange { .. }
    ));
}

#[test]
fn guard_rejects_percent_scores_off_the_scale() {
    let mut submission = submission();
    submission.criteria[1].indicators[0] = measured("i-charts", 100.0, 140.0);

    let error = SubmissionGuard::default()
        .snapshot_from_submission(submission)
        .expect_err("score off scale");

    match error {
        ValidationError::ScoreOutOfRange { id, value } => {
            assert_eq!(id, "i-charts");
            assert_eq!(value, 140.0);
        }
        other => panic!("expected score out of range, got {other:?}"),
    }
}

#[test]
fn guard_quantizes_weights_to_one_decimal() {
    let mut submission = submission();
    submission.criteria[0].weight = 59.96;
    submission.criteria[0].indicators[0] = rated("i-soap", 50.04, Rating::Pass);

    let snapshot = SubmissionGuard::default()
        .snapshot_from_submission(submission)
        .expect("clean submission");

    assert_eq!(snapshot.criteria[0].weight, 60.0);
    assert_eq!(snapshot.criteria[0].indicators[0].weight, 50.0);
}
