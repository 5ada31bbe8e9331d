//! Course recommendation engine implementation

use std::collections::HashSet;
use std::sync::Arc;

use super::catalog::{CourseCatalog, GENERAL_BUCKET};
use super::types::{Course, CourseQuery, CourseRecord};
use super::{CourseResult, POPULAR_PER_TOPIC, POPULAR_TOPICS};
use crate::errors::DomainError;

/// Ordered role-classification rule table: any marker contained in the
/// lowercased role appends the corresponding `<topic>-<category>` key.
const ROLE_MARKERS: &[(&[&str], &str)] = &[
    (&["account"], "accounting"),
    (&["market"], "marketing"),
    (&["design"], "design"),
    (&["develop", "engineer", "programmer"], "developer"),
];

/// Maps a free-text `(topic, role)` pair onto a ranked, filtered subset of
/// the static course catalog. Purely functional over the catalog; concurrent
/// callers share it without locking.
#[derive(Debug, Clone)]
pub struct CourseEngine {
    catalog: Arc<CourseCatalog>,
}

impl CourseEngine {
    pub fn new(catalog: Arc<CourseCatalog>) -> Self {
        Self { catalog }
    }

    /// Engine over the compiled-in catalog.
    pub fn builtin() -> Self {
        Self::new(Arc::new(CourseCatalog::builtin()))
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    /// Search the catalog for a ranked list of course recommendations.
    ///
    /// Candidates are gathered per derived key in priority order and are not
    /// deduplicated across buckets; a record matched under several keys
    /// appears once per match. Results are sorted by rating descending with
    /// a relevance tie-break, and the sort is stable so fully tied records
    /// keep their gathering order.
    pub fn get_courses(&self, query: &CourseQuery) -> CourseResult<Vec<Course>> {
        if query.topic.trim().is_empty() {
            return Err(DomainError::EmptyTopic);
        }
        if query.role.trim().is_empty() {
            return Err(DomainError::EmptyRole);
        }

        let mut candidates: Vec<&CourseRecord> = Vec::new();
        for key in search_keys(&query.topic, &query.role) {
            if let Some(bucket) = self.catalog.bucket(&key) {
                candidates.extend(bucket.iter());
            }
        }

        // Generic AI courses stand in when no specific bucket matched.
        if candidates.is_empty() {
            if let Some(bucket) = self.catalog.bucket(GENERAL_BUCKET) {
                candidates.extend(bucket.iter());
            }
        }

        if let Some(platform) = query.platform {
            candidates.retain(|record| record.platform == platform);
        }
        candidates.retain(|record| record.rating >= query.min_rating);

        let topic_lower = query.topic.to_lowercase();
        let role_lower = query.role.to_lowercase();
        let mut scored: Vec<(&CourseRecord, u32)> = candidates
            .into_iter()
            .map(|record| (record, relevance(record, &topic_lower, &role_lower)))
            .collect();

        scored.sort_by(|a, b| {
            b.0.rating
                .partial_cmp(&a.0.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(b.1.cmp(&a.1))
        });

        scored.truncate(query.max_results);
        Ok(scored.into_iter().map(|(record, _)| record.to_course()).collect())
    }

    /// Aggregate courses for the fixed popular-topic list, deduplicated by
    /// url (first occurrence wins) and truncated to `limit`. No re-ranking
    /// is applied after deduplication; order is exactly concatenation order.
    pub fn popular_courses(&self, role: &str, limit: usize) -> CourseResult<Vec<Course>> {
        let mut seen_urls = HashSet::new();
        let mut courses = Vec::new();

        for topic in POPULAR_TOPICS {
            let query = CourseQuery::new(topic, role).with_max_results(POPULAR_PER_TOPIC);
            for course in self.get_courses(&query)? {
                if seen_urls.insert(course.url.clone()) {
                    courses.push(course);
                }
            }
        }

        courses.truncate(limit);
        Ok(courses)
    }
}

/// Derive the ordered candidate key list for a `(topic, role)` pair.
fn search_keys(topic: &str, role: &str) -> Vec<String> {
    let topic_lower = topic.to_lowercase();
    let role_lower = role.to_lowercase();

    let mut keys = vec![format!("{topic_lower}-{role_lower}")];

    for (markers, category) in ROLE_MARKERS {
        if markers.iter().any(|marker| role_lower.contains(marker)) {
            keys.push(format!("{topic_lower}-{category}"));
        }
    }

    keys.push(format!("{topic_lower}-general"));
    keys
}

/// Ordinal tie-break score from keyword overlap between the query and a
/// record's title, description, and tags. Maximum 12; never a primary key.
fn relevance(record: &CourseRecord, topic_lower: &str, role_lower: &str) -> u32 {
    let title = record.title.to_lowercase();
    let description = record.description.as_deref().unwrap_or_default().to_lowercase();
    let tags = record.tags.join(" ").to_lowercase();

    let mut score = 0;
    if title.contains(topic_lower) {
        score += 3;
    }
    if title.contains(role_lower) {
        score += 3;
    }
    if description.contains(topic_lower) {
        score += 2;
    }
    if description.contains(role_lower) {
        score += 2;
    }
    if tags.contains(topic_lower) {
        score += 1;
    }
    if tags.contains(role_lower) {
        score += 1;
    }
    score
}
