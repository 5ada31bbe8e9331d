//! Course Recommendation Engine
//!
//! Deterministic, rule-based course lookup and ranking over a static
//! in-memory catalog, plus the curated per-tool course table.

mod catalog;
mod curated;
mod engine;
mod types;

pub use catalog::CourseCatalog;
pub use curated::CuratedCourses;
pub use engine::CourseEngine;
pub use types::*;

use crate::errors::DomainError;

/// Result type for course operations
pub type CourseResult<T> = Result<T, DomainError>;

/// Default number of results returned by a search
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Upper bound a caller may request per search
pub const MAX_RESULTS_CAP: usize = 50;

/// Default minimum rating filter
pub const DEFAULT_MIN_RATING: f64 = 3.0;

/// Topics queried, in order, when assembling popular courses for a role
pub const POPULAR_TOPICS: [&str; 4] = ["ChatGPT", "AI", "Automation", "Machine Learning"];

/// Per-topic result cap used by the popular aggregation
pub const POPULAR_PER_TOPIC: usize = 3;

/// Default number of popular courses returned
pub const DEFAULT_POPULAR_LIMIT: usize = 5;
