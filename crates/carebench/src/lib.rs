//! Weighted evaluation scoring and benchmark classification for facility
//! assessments and audits.
//!
//! The `scoring` module holds the pure engine: rating normalization,
//! weighted aggregation with exclusion handling, and tolerance-band
//! benchmark classification. The `evaluations` module wraps the engine in
//! the intake/scoring workflow (validation, persistence seams, HTTP
//! routes, CSV ratings import), and `benchmarks` builds the dashboard
//! views consumed by the API service.

pub mod benchmarks;
pub mod config;
pub mod error;
pub mod evaluations;
pub mod scoring;
pub mod telemetry;
