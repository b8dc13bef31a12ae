use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scoring::aggregate::{self, WeightedValue};
use crate::scoring::rating::Rating;

/// Identifier wrapper for submitted assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Minimal description of the facility under evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilitySnapshot {
    pub facility_code: String,
    pub name: String,
}

/// Track a criterion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationKind {
    Assessment,
    Audit,
}

impl EvaluationKind {
    pub const fn label(self) -> &'static str {
        match self {
            EvaluationKind::Assessment => "assessment",
            EvaluationKind::Audit => "audit",
        }
    }
}

/// Raw measurement captured for a leaf indicator: either a qualitative
/// rating or a raw percentage on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorMeasure {
    Rating(Rating),
    Percent(f64),
}

/// Leaf-level scored item within a criterion. The weight is a relative
/// share among siblings (0-100, one decimal); siblings are never required
/// to sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub id: String,
    pub name: String,
    pub weight: f64,
    pub measure: IndicatorMeasure,
}

impl Indicator {
    /// Contribution to the parent rollup, or `None` when the indicator is
    /// rated `not-applicable` and drops out of both sides of the mean.
    pub fn contribution(&self) -> Option<WeightedValue> {
        match self.measure {
            IndicatorMeasure::Percent(value) => Some(WeightedValue {
                weight: self.weight,
                value,
            }),
            IndicatorMeasure::Rating(rating) => {
                rating.numeric_value().map(|value| WeightedValue {
                    weight: self.weight,
                    value: value * 100.0,
                })
            }
        }
    }
}

/// A weighted grouping of indicators representing one evaluation
/// dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub weight: f64,
    pub kind: EvaluationKind,
    pub indicators: Vec<Indicator>,
}

impl Criterion {
    /// Weighted rollup of this criterion's indicators on the 0-100 scale.
    /// Defined as `0` when no indicator is scorable.
    pub fn rolled_up_score(&self) -> u8 {
        let contributions: Vec<WeightedValue> = self
            .indicators
            .iter()
            .filter_map(Indicator::contribution)
            .collect();

        aggregate::aggregate(&contributions)
    }

    /// This criterion as an input to the facility-level rollup. `None`
    /// when every indicator is excluded: the exclusion marker propagates
    /// upward instead of dragging the facility score to zero.
    pub fn contribution(&self) -> Option<WeightedValue> {
        if self.indicators.iter().all(|i| i.contribution().is_none()) {
            return None;
        }

        Some(WeightedValue {
            weight: self.weight,
            value: self.rolled_up_score() as f64,
        })
    }
}

/// Applicant-facing payload collected by assessment and audit forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub facility: FacilitySnapshot,
    pub kind: EvaluationKind,
    pub conducted_on: NaiveDate,
    pub criteria: Vec<Criterion>,
}

/// Validated, immutable snapshot produced by the submission guard. Each
/// scoring pass computes from this snapshot; re-scoring never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSnapshot {
    pub assessment_id: AssessmentId,
    pub facility: FacilitySnapshot,
    pub kind: EvaluationKind,
    pub conducted_on: NaiveDate,
    pub criteria: Vec<Criterion>,
}

/// High level status tracked through the assessment workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Submitted,
    Scored,
}

impl AssessmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentStatus::Submitted => "submitted",
            AssessmentStatus::Scored => "scored",
        }
    }
}
