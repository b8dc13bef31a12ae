use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Qualitative rating captured on assessment and audit forms in lieu of a
/// raw percentage. The set is closed: adding a label is a compile-checked
/// change at every consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    Pass,
    HighPartial,
    Partial,
    LowPartial,
    Fail,
    /// Counted in the weight total with a value of zero; an unanswered
    /// indicator penalizes the aggregate.
    NotRated,
    /// Exclusion marker: removed from both numerator and denominator.
    NotApplicable,
}

impl Rating {
    pub const fn label(self) -> &'static str {
        match self {
            Rating::Pass => "pass",
            Rating::HighPartial => "high-partial",
            Rating::Partial => "partial",
            Rating::LowPartial => "low-partial",
            Rating::Fail => "fail",
            Rating::NotRated => "not-rated",
            Rating::NotApplicable => "not-applicable",
        }
    }

    /// Normalized value on the unit scale, or `None` when the rating is
    /// excluded from scoring entirely. `NotRated` maps to `Some(0.0)`, not
    /// `None`: it keeps its weight in the denominator.
    pub fn numeric_value(self) -> Option<f64> {
        match self {
            Rating::Pass => Some(1.0),
            Rating::HighPartial => Some(0.75),
            Rating::Partial => Some(0.5),
            Rating::LowPartial => Some(0.25),
            Rating::Fail | Rating::NotRated => Some(0.0),
            Rating::NotApplicable => None,
        }
    }

    /// Bands a percent score (0-100 scale) back into a qualitative rating.
    /// Bands are inclusive of their lower threshold.
    pub fn from_percent(score: f64) -> Rating {
        if score >= 80.0 {
            Rating::Pass
        } else if score >= 65.0 {
            Rating::HighPartial
        } else if score >= 40.0 {
            Rating::Partial
        } else if score >= 20.0 {
            Rating::LowPartial
        } else {
            Rating::Fail
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An input label outside the closed rating set. Raised at parse
/// boundaries (CSV import, free-form form input); never coerced to a
/// default rating.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized rating label '{0}'")]
pub struct InvalidRating(pub String);

impl FromStr for Rating {
    type Err = InvalidRating;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pass" => Ok(Rating::Pass),
            "high-partial" => Ok(Rating::HighPartial),
            "partial" => Ok(Rating::Partial),
            "low-partial" => Ok(Rating::LowPartial),
            "fail" => Ok(Rating::Fail),
            "not-rated" => Ok(Rating::NotRated),
            "not-applicable" => Ok(Rating::NotApplicable),
            _ => Err(InvalidRating(value.trim().to_string())),
        }
    }
}
