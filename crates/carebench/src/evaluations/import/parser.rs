use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::evaluations::domain::IndicatorMeasure;
use crate::scoring::rating::{InvalidRating, Rating};

/// One spreadsheet row tying an indicator result to its criterion.
#[derive(Debug)]
pub(crate) struct RatingRecord {
    pub(crate) criterion_id: String,
    pub(crate) criterion_name: String,
    pub(crate) category: String,
    pub(crate) criterion_weight: f64,
    pub(crate) indicator_id: String,
    pub(crate) indicator_name: String,
    pub(crate) indicator_weight: f64,
    pub(crate) measure: IndicatorMeasure,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<RatingRecord>, super::RatingImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<RatingRow>() {
        let row = record?;
        let measure = parse_measure(row.result.as_deref())?;

        records.push(RatingRecord {
            criterion_id: row.criterion_id,
            criterion_name: row.criterion,
            category: row.category,
            criterion_weight: row.criterion_weight,
            indicator_id: row.indicator_id,
            indicator_name: row.indicator,
            indicator_weight: row.indicator_weight,
            measure,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RatingRow {
    #[serde(rename = "Criterion ID")]
    criterion_id: String,
    #[serde(rename = "Criterion")]
    criterion: String,
    #[serde(rename = "Category", default)]
    category: String,
    #[serde(rename = "Criterion Weight")]
    criterion_weight: f64,
    #[serde(rename = "Indicator ID")]
    indicator_id: String,
    #[serde(rename = "Indicator")]
    indicator: String,
    #[serde(rename = "Indicator Weight")]
    indicator_weight: f64,
    #[serde(rename = "Result", default, deserialize_with = "empty_string_as_none")]
    result: Option<String>,
}

/// The result cell is free-form: a raw percentage, a rating label, or
/// blank. A blank cell is an unanswered indicator and maps to
/// `not-rated`; an unrecognized label is rejected, never coerced.
fn parse_measure(cell: Option<&str>) -> Result<IndicatorMeasure, InvalidRating> {
    let Some(raw) = cell else {
        return Ok(IndicatorMeasure::Rating(Rating::NotRated));
    };

    let trimmed = raw.trim_start_matches('\u{feff}').trim();
    if let Ok(percent) = trimmed.parse::<f64>() {
        return Ok(IndicatorMeasure::Percent(percent));
    }

    trimmed.parse::<Rating>().map(IndicatorMeasure::Rating)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
pub(crate) fn parse_measure_for_tests(cell: Option<&str>) -> Result<IndicatorMeasure, InvalidRating> {
    parse_measure(cell)
}
