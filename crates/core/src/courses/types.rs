//! Types for the course recommendation engine

use serde::{Deserialize, Serialize};

/// Platforms a course can be hosted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "YouTube")]
    YouTube,
    Coursera,
    Udemy,
    #[serde(rename = "edX")]
    EdX,
    #[serde(rename = "LinkedIn Learning")]
    LinkedInLearning,
    Skillshare,
    Pluralsight,
}

impl Platform {
    /// All supported platforms, in canonical order
    pub const ALL: [Platform; 7] = [
        Platform::YouTube,
        Platform::Coursera,
        Platform::Udemy,
        Platform::EdX,
        Platform::LinkedInLearning,
        Platform::Skillshare,
        Platform::Pluralsight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::Coursera => "Coursera",
            Platform::Udemy => "Udemy",
            Platform::EdX => "edX",
            Platform::LinkedInLearning => "LinkedIn Learning",
            Platform::Skillshare => "Skillshare",
            Platform::Pluralsight => "Pluralsight",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for platform literals outside the supported set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported platform `{0}`")]
pub struct UnknownPlatform(pub String);

impl std::str::FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .iter()
            .copied()
            .find(|platform| platform.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownPlatform(value.to_string()))
    }
}

/// Difficulty level of a catalog entry. Informational only, never ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

/// Internal catalog entry. The extra fields beyond [`Course`] feed relevance
/// scoring and are stripped before results leave the engine.
#[derive(Debug, Clone)]
pub struct CourseRecord {
    pub title: String,
    pub platform: Platform,
    pub url: String,
    pub rating: f64,
    pub duration: String,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub level: Option<Level>,
    pub tags: Vec<String>,
}

impl CourseRecord {
    /// Public projection returned to callers
    pub fn to_course(&self) -> Course {
        Course {
            title: self.title.clone(),
            platform: self.platform,
            url: self.url.clone(),
            rating: self.rating,
            duration: self.duration.clone(),
        }
    }
}

/// A course recommendation as exposed to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub platform: Platform,
    pub url: String,
    pub rating: f64,
    pub duration: String,
}

/// Search request for course recommendations
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseQuery {
    /// Learning topic, free text
    pub topic: String,
    /// Professional role, free text
    pub role: String,
    /// Optional exact platform filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    /// Result cap, 1..=50
    pub max_results: usize,
    /// Minimum rating filter, 0..=5
    pub min_rating: f64,
}

impl CourseQuery {
    /// Create a query with default result cap and rating floor
    pub fn new(topic: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            role: role.into(),
            platform: None,
            max_results: super::DEFAULT_MAX_RESULTS,
            min_rating: super::DEFAULT_MIN_RATING,
        }
    }

    /// Restrict results to a single platform
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Set the result cap
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the minimum rating filter
    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_round_trips_through_display_and_from_str() {
        for platform in Platform::ALL {
            let parsed: Platform = platform.as_str().parse().expect("canonical name parses");
            assert_eq!(parsed, platform);
        }
    }

    #[test]
    fn platform_parse_is_case_insensitive() {
        assert_eq!("linkedin learning".parse::<Platform>(), Ok(Platform::LinkedInLearning));
        assert_eq!("EDX".parse::<Platform>(), Ok(Platform::EdX));
    }

    #[test]
    fn platform_parse_rejects_unknown_literals() {
        let error = "MySpace Learning".parse::<Platform>().unwrap_err();
        assert_eq!(error, UnknownPlatform("MySpace Learning".to_string()));
    }

    #[test]
    fn platform_serializes_to_display_names() {
        let json = serde_json::to_string(&Platform::LinkedInLearning).expect("serialize");
        assert_eq!(json, "\"LinkedIn Learning\"");
        let json = serde_json::to_string(&Platform::EdX).expect("serialize");
        assert_eq!(json, "\"edX\"");
    }

    #[test]
    fn query_builder_applies_defaults() {
        let query = CourseQuery::new("ChatGPT", "Accountant");
        assert_eq!(query.max_results, crate::courses::DEFAULT_MAX_RESULTS);
        assert!((query.min_rating - crate::courses::DEFAULT_MIN_RATING).abs() < f64::EPSILON);
        assert!(query.platform.is_none());
    }

    #[test]
    fn query_echo_uses_camel_case_keys() {
        let query = CourseQuery::new("AI", "Marketer").with_max_results(7).with_min_rating(4.0);
        let value = serde_json::to_value(&query).expect("serialize");
        assert_eq!(value["maxResults"], 7);
        assert_eq!(value["minRating"], 4.0);
    }
}
