pub mod domain;
pub mod import;
pub mod outcome;
pub mod repository;
pub mod router;

mod policy;
mod service;
mod validate;

#[cfg(test)]
mod tests;

pub use policy::ScoringPolicy;
pub use service::{AssessmentService, AssessmentServiceError};
pub use validate::{SubmissionGuard, ValidationError};
