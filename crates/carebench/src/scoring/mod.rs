//! Pure scoring engine: rating normalization, weighted aggregation, and
//! benchmark classification. Everything here is a side-effect-free
//! computation over its inputs; callers may invoke it concurrently without
//! coordination.

pub mod aggregate;
pub mod benchmark;
pub mod rating;

pub use aggregate::{aggregate, aggregate_ratings, WeightedRating, WeightedValue};
pub use benchmark::{
    classify, performance_gap, BenchmarkComparison, BenchmarkError, BenchmarkStatus,
    DEFAULT_TOLERANCE_PERCENT,
};
pub use rating::{InvalidRating, Rating};
