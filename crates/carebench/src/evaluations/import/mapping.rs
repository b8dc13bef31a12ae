use super::parser::RatingRecord;
use crate::evaluations::domain::{Criterion, EvaluationKind, Indicator};

/// Groups flat spreadsheet rows into criteria, preserving first-seen
/// criterion order and row order within each criterion. The criterion
/// weight comes from the first row carrying the criterion id.
pub(crate) fn group_criteria(records: Vec<RatingRecord>, kind: EvaluationKind) -> Vec<Criterion> {
    let mut criteria: Vec<Criterion> = Vec::new();

    for record in records {
        let indicator = Indicator {
            id: record.indicator_id,
            name: record.indicator_name,
            weight: record.indicator_weight,
            measure: record.measure,
        };

        match criteria
            .iter_mut()
            .find(|criterion| criterion.id == record.criterion_id)
        {
            Some(criterion) => criterion.indicators.push(indicator),
            None => criteria.push(Criterion {
                id: record.criterion_id,
                name: record.criterion_name,
                description: String::new(),
                category: record.category,
                weight: record.criterion_weight,
                kind,
                indicators: vec![indicator],
            }),
        }
    }

    criteria
}
