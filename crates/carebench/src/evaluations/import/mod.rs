mod mapping;
mod parser;

use chrono::NaiveDate;
use std::io::Read;
use std::path::Path;

use crate::evaluations::domain::{AssessmentSubmission, EvaluationKind, FacilitySnapshot};
use crate::scoring::rating::InvalidRating;

#[derive(Debug)]
pub enum RatingImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Rating(InvalidRating),
}

impl std::fmt::Display for RatingImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingImportError::Io(err) => write!(f, "failed to read ratings export: {}", err),
            RatingImportError::Csv(err) => write!(f, "invalid ratings CSV data: {}", err),
            RatingImportError::Rating(err) => {
                write!(f, "could not interpret result cell: {}", err)
            }
        }
    }
}

impl std::error::Error for RatingImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RatingImportError::Io(err) => Some(err),
            RatingImportError::Csv(err) => Some(err),
            RatingImportError::Rating(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RatingImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RatingImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<InvalidRating> for RatingImportError {
    fn from(err: InvalidRating) -> Self {
        Self::Rating(err)
    }
}

/// Builds an [`AssessmentSubmission`] from the flat ratings spreadsheet
/// exported by the evaluation forms.
pub struct RatingImporter;

impl RatingImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        facility: FacilitySnapshot,
        kind: EvaluationKind,
        conducted_on: NaiveDate,
    ) -> Result<AssessmentSubmission, RatingImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, facility, kind, conducted_on)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        facility: FacilitySnapshot,
        kind: EvaluationKind,
        conducted_on: NaiveDate,
    ) -> Result<AssessmentSubmission, RatingImportError> {
        let records = parser::parse_records(reader)?;
        let criteria = mapping::group_criteria(records, kind);

        Ok(AssessmentSubmission {
            facility,
            kind,
            conducted_on,
            criteria,
        })
    }
}
