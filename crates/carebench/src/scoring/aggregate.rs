use serde::{Deserialize, Serialize};

use super::rating::Rating;

/// One contribution to a weighted rollup. Values live on the 0-100 percent
/// scale, which makes the aggregator recursively composable: the output of
/// one aggregation is a valid `value` for the next level up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedValue {
    pub weight: f64,
    pub value: f64,
}

/// One qualitative contribution prior to normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedRating {
    pub weight: f64,
    pub rating: Rating,
}

/// Weighted mean of the given items, rounded half-up to an integer percent.
///
/// The denominator is the sum of weights actually present: weights are
/// relative shares, not percentages of a fixed 100. Zero-weight items
/// contribute nothing. Empty input or a zero weight total yields `0`.
pub fn aggregate(items: &[WeightedValue]) -> u8 {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for item in items {
        weighted_sum += item.value * item.weight;
        total_weight += item.weight;
    }

    if total_weight <= 0.0 {
        return 0;
    }

    (weighted_sum / total_weight).round().clamp(0.0, 100.0) as u8
}

/// Weighted mean over qualitative ratings. Items rated `not-applicable`
/// are removed from both the numerator and the weight total; `not-rated`
/// items keep their weight and pull the aggregate down.
pub fn aggregate_ratings(items: &[WeightedRating]) -> u8 {
    let survivors: Vec<WeightedValue> = items
        .iter()
        .filter_map(|item| {
            item.rating.numeric_value().map(|value| WeightedValue {
                weight: item.weight,
                value: value * 100.0,
            })
        })
        .collect();

    aggregate(&survivors)
}
