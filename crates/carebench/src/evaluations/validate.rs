use std::collections::HashSet;

use super::domain::{
    AssessmentId, AssessmentSnapshot, AssessmentSubmission, Criterion, Indicator, IndicatorMeasure,
};

/// Validation errors raised by the submission guard. Malformed weights are
/// authoring errors caught here, before anything reaches the pure scoring
/// functions.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("criterion '{id}' weight {weight} is outside the 0-100 range")]
    CriterionWeightOutOfRange { id: String, weight: f64 },
    #[error("indicator '{id}' weight {weight} is outside the 0-100 range")]
    IndicatorWeightOutOfRange { id: String, weight: f64 },
    #[error("indicator '{id}' percent score {value} is outside the 0-100 scale")]
    ScoreOutOfRange { id: String, value: f64 },
    #[error("duplicate criterion id '{0}' in submission")]
    DuplicateCriterion(String),
    #[error("duplicate indicator id '{id}' under criterion '{criterion_id}'")]
    DuplicateIndicator { criterion_id: String, id: String },
}

/// Guard responsible for producing immutable `AssessmentSnapshot`
/// instances from form submissions. Weights are quantized to the one
/// decimal the authoring form collects.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGuard;

impl SubmissionGuard {
    pub fn snapshot_from_submission(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentSnapshot, ValidationError> {
        let AssessmentSubmission {
            facility,
            kind,
            conducted_on,
            criteria,
        } = submission;

        let mut seen_criteria = HashSet::new();
        let criteria = criteria
            .into_iter()
            .map(|criterion| self.sanitize_criterion(criterion, &mut seen_criteria))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AssessmentSnapshot {
            // Placeholder until the service assigns a sequence id.
            assessment_id: AssessmentId(String::new()),
            facility,
            kind,
            conducted_on,
            criteria,
        })
    }

    fn sanitize_criterion(
        &self,
        criterion: Criterion,
        seen_criteria: &mut HashSet<String>,
    ) -> Result<Criterion, ValidationError> {
        let Criterion {
            id,
            name,
            description,
            category,
            weight,
            kind,
            indicators,
        } = criterion;

        if !seen_criteria.insert(id.clone()) {
            return Err(ValidationError::DuplicateCriterion(id));
        }

        if !weight_in_range(weight) {
            return Err(ValidationError::CriterionWeightOutOfRange { id, weight });
        }

        let mut seen_indicators = HashSet::new();
        let indicators = indicators
            .into_iter()
            .map(|indicator| sanitize_indicator(indicator, &id, &mut seen_indicators))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Criterion {
            id,
            name,
            description,
            category,
            weight: quantize_weight(weight),
            kind,
            indicators,
        })
    }
}

fn sanitize_indicator(
    indicator: Indicator,
    criterion_id: &str,
    seen: &mut HashSet<String>,
) -> Result<Indicator, ValidationError> {
    if !seen.insert(indicator.id.clone()) {
        return Err(ValidationError::DuplicateIndicator {
            criterion_id: criterion_id.to_string(),
            id: indicator.id,
        });
    }

    if !weight_in_range(indicator.weight) {
        return Err(ValidationError::IndicatorWeightOutOfRange {
            id: indicator.id,
            weight: indicator.weight,
        });
    }

    if let IndicatorMeasure::Percent(value) = indicator.measure {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::ScoreOutOfRange {
                id: indicator.id,
                value,
            });
        }
    }

    Ok(Indicator {
        weight: quantize_weight(indicator.weight),
        ..indicator
    })
}

fn weight_in_range(weight: f64) -> bool {
    weight.is_finite() && (0.0..=100.0).contains(&weight)
}

fn quantize_weight(weight: f64) -> f64 {
    (weight * 10.0).round() / 10.0
}
