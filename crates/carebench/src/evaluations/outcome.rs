use serde::{Deserialize, Serialize};

use super::domain::{AssessmentId, Criterion};
use crate::scoring::aggregate;
use crate::scoring::benchmark::{BenchmarkComparison, BenchmarkError};
use crate::scoring::rating::Rating;

/// Per-criterion entry in the score audit trail. Entries follow the order
/// of the submitted criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub criterion_id: String,
    pub name: String,
    pub weight: f64,
    pub score: u8,
    pub band: Rating,
}

/// Scoring output for one assessment: the facility-level score, its
/// qualitative band, and the per-criterion trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub assessment_id: AssessmentId,
    pub overall_score: u8,
    pub overall_band: Rating,
    pub criteria: Vec<CriterionScore>,
}

/// Hierarchical rollup: indicators aggregate into criterion scores, which
/// aggregate (by criterion weight) into the facility score. A criterion
/// whose every indicator is excluded is recorded with band
/// `not-applicable` and omitted from the facility rollup.
pub fn score_assessment(assessment_id: AssessmentId, criteria: &[Criterion]) -> AssessmentOutcome {
    let mut trail = Vec::with_capacity(criteria.len());
    let mut rollup = Vec::with_capacity(criteria.len());

    for criterion in criteria {
        match criterion.contribution() {
            Some(weighted) => {
                let score = criterion.rolled_up_score();
                trail.push(CriterionScore {
                    criterion_id: criterion.id.clone(),
                    name: criterion.name.clone(),
                    weight: criterion.weight,
                    score,
                    band: Rating::from_percent(score as f64),
                });
                rollup.push(weighted);
            }
            None => {
                trail.push(CriterionScore {
                    criterion_id: criterion.id.clone(),
                    name: criterion.name.clone(),
                    weight: criterion.weight,
                    score: 0,
                    band: Rating::NotApplicable,
                });
            }
        }
    }

    let overall_score = aggregate::aggregate(&rollup);

    AssessmentOutcome {
        assessment_id,
        overall_score,
        overall_band: Rating::from_percent(overall_score as f64),
        criteria: trail,
    }
}

impl AssessmentOutcome {
    pub fn summary(&self) -> String {
        format!(
            "overall score {} ({}), {} criteria scored",
            self.overall_score,
            self.overall_band.label(),
            self.criteria
                .iter()
                .filter(|entry| entry.band != Rating::NotApplicable)
                .count()
        )
    }

    /// Ephemeral comparison of this outcome against a benchmark target,
    /// using the caller's tolerance.
    pub fn against_benchmark(
        &self,
        benchmark: f64,
        tolerance_percent: f64,
    ) -> Result<BenchmarkComparison, BenchmarkError> {
        BenchmarkComparison::evaluate(self.overall_score as f64, benchmark, tolerance_percent)
    }
}
