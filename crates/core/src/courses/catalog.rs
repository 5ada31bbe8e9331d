//! Static course catalog, compiled in and built once at startup.

use std::collections::HashMap;

use super::types::{CourseRecord, Level, Platform};

/// Seed entry for the compiled-in catalog.
#[derive(Debug, Clone, Copy)]
struct CourseSeed {
    title: &'static str,
    platform: Platform,
    url: &'static str,
    rating: f64,
    duration: &'static str,
    description: Option<&'static str>,
    instructor: Option<&'static str>,
    level: Option<Level>,
    tags: &'static [&'static str],
}

/// Bucket key for generic AI courses, also the universal fallback bucket.
pub const GENERAL_BUCKET: &str = "ai-general";

const BUCKET_SEEDS: &[(&str, &[CourseSeed])] = &[
    (
        "chatgpt-accounting",
        &[
            CourseSeed {
                title: "AI for Accounting Professionals: ChatGPT & Automation",
                platform: Platform::Udemy,
                url: "https://www.udemy.com/course/ai-accounting-chatgpt/",
                rating: 4.6,
                duration: "3.5 hours",
                description: Some(
                    "Master ChatGPT for accounting workflows, journal entries, and financial reporting",
                ),
                instructor: Some("ExpertEase Education"),
                level: Some(Level::Intermediate),
                tags: &["ChatGPT", "Accounting", "Automation", "Financial Reporting"],
            },
            CourseSeed {
                title: "Generative AI for Accountants: Complete Guide",
                platform: Platform::Udemy,
                url: "https://www.udemy.com/course/generative-ai-accountants/",
                rating: 4.7,
                duration: "4.2 hours",
                description: Some(
                    "Comprehensive guide to using ChatGPT, Claude, and other AI tools for accounting",
                ),
                instructor: Some("AI Finance Academy"),
                level: Some(Level::Beginner),
                tags: &["AI", "ChatGPT", "Accounting", "Bookkeeping"],
            },
            CourseSeed {
                title: "ChatGPT for Financial Analysis and Reporting",
                platform: Platform::Coursera,
                url: "https://www.coursera.org/learn/chatgpt-financial-analysis",
                rating: 4.5,
                duration: "6 weeks",
                description: Some(
                    "Learn to leverage AI for financial statement analysis and reporting",
                ),
                instructor: Some("University of Pennsylvania"),
                level: Some(Level::Intermediate),
                tags: &["Financial Analysis", "AI", "Reporting"],
            },
            CourseSeed {
                title: "AI-Powered Accounting: From Basics to Advanced",
                platform: Platform::LinkedInLearning,
                url: "https://www.linkedin.com/learning/ai-powered-accounting",
                rating: 4.4,
                duration: "2.5 hours",
                description: Some(
                    "Transform your accounting practice with AI tools and automation",
                ),
                instructor: Some("Sarah Chen"),
                level: Some(Level::Beginner),
                tags: &["AI", "Accounting", "Automation"],
            },
            CourseSeed {
                title: "Prompt Engineering for Finance Professionals",
                platform: Platform::Skillshare,
                url: "https://www.skillshare.com/classes/prompt-engineering-finance",
                rating: 4.3,
                duration: "1.8 hours",
                description: Some(
                    "Master prompt engineering techniques for financial and accounting tasks",
                ),
                instructor: Some("Finance Tech Studio"),
                level: Some(Level::Intermediate),
                tags: &["Prompt Engineering", "Finance", "AI"],
            },
        ],
    ),
    (
        "chatgpt-marketing",
        &[
            CourseSeed {
                title: "ChatGPT for Digital Marketing Mastery",
                platform: Platform::Udemy,
                url: "https://www.udemy.com/course/chatgpt-digital-marketing/",
                rating: 4.8,
                duration: "5.5 hours",
                description: Some(
                    "Create compelling marketing content, campaigns, and strategies using ChatGPT",
                ),
                instructor: Some("Marketing AI Pro"),
                level: Some(Level::Beginner),
                tags: &["ChatGPT", "Digital Marketing", "Content Creation"],
            },
            CourseSeed {
                title: "AI Marketing Automation with ChatGPT",
                platform: Platform::Coursera,
                url: "https://www.coursera.org/learn/ai-marketing-automation",
                rating: 4.6,
                duration: "4 weeks",
                description: Some("Automate your marketing workflows with AI tools and ChatGPT"),
                instructor: Some("Northwestern University"),
                level: Some(Level::Intermediate),
                tags: &["Marketing Automation", "AI", "ChatGPT"],
            },
            CourseSeed {
                title: "Content Marketing with AI: ChatGPT Strategies",
                platform: Platform::LinkedInLearning,
                url: "https://www.linkedin.com/learning/content-marketing-ai-chatgpt",
                rating: 4.5,
                duration: "3.2 hours",
                description: Some(
                    "Scale your content marketing using ChatGPT and AI writing tools",
                ),
                instructor: Some("Jennifer Kim"),
                level: Some(Level::Beginner),
                tags: &["Content Marketing", "AI Writing", "ChatGPT"],
            },
            CourseSeed {
                title: "Social Media Marketing with ChatGPT",
                platform: Platform::Skillshare,
                url: "https://www.skillshare.com/classes/social-media-chatgpt",
                rating: 4.4,
                duration: "2.1 hours",
                description: Some(
                    "Create engaging social media content and campaigns with AI assistance",
                ),
                instructor: Some("Social Media Academy"),
                level: Some(Level::Beginner),
                tags: &["Social Media", "ChatGPT", "Content Creation"],
            },
        ],
    ),
    (
        "chatgpt-design",
        &[
            CourseSeed {
                title: "AI-Assisted Design with ChatGPT and Midjourney",
                platform: Platform::Udemy,
                url: "https://www.udemy.com/course/ai-design-chatgpt-midjourney/",
                rating: 4.7,
                duration: "4.8 hours",
                description: Some(
                    "Combine ChatGPT prompting with visual AI tools for creative design workflows",
                ),
                instructor: Some("Creative AI Studio"),
                level: Some(Level::Intermediate),
                tags: &["AI Design", "ChatGPT", "Midjourney", "Creative Process"],
            },
            CourseSeed {
                title: "UX Writing with ChatGPT",
                platform: Platform::Coursera,
                url: "https://www.coursera.org/learn/ux-writing-chatgpt",
                rating: 4.5,
                duration: "3 weeks",
                description: Some("Enhance your UX writing skills using AI tools and ChatGPT"),
                instructor: Some("Google"),
                level: Some(Level::Beginner),
                tags: &["UX Writing", "ChatGPT", "User Experience"],
            },
            CourseSeed {
                title: "Design Systems with AI Assistance",
                platform: Platform::LinkedInLearning,
                url: "https://www.linkedin.com/learning/design-systems-ai",
                rating: 4.3,
                duration: "2.7 hours",
                description: Some("Build and maintain design systems with ChatGPT and AI tools"),
                instructor: Some("Alex Rivera"),
                level: Some(Level::Intermediate),
                tags: &["Design Systems", "AI", "ChatGPT"],
            },
        ],
    ),
    (
        "chatgpt-developer",
        &[
            CourseSeed {
                title: "ChatGPT for Developers: Code Generation & Review",
                platform: Platform::Udemy,
                url: "https://www.udemy.com/course/chatgpt-developers-coding/",
                rating: 4.9,
                duration: "6.2 hours",
                description: Some(
                    "Master code generation, debugging, and review using ChatGPT",
                ),
                instructor: Some("CodeAI Academy"),
                level: Some(Level::Intermediate),
                tags: &["ChatGPT", "Programming", "Code Generation", "Debugging"],
            },
            CourseSeed {
                title: "AI-Powered Software Development",
                platform: Platform::Coursera,
                url: "https://www.coursera.org/learn/ai-software-development",
                rating: 4.7,
                duration: "8 weeks",
                description: Some(
                    "Integrate AI tools into your development workflow for increased productivity",
                ),
                instructor: Some("Stanford University"),
                level: Some(Level::Advanced),
                tags: &["AI Development", "Software Engineering", "Productivity"],
            },
            CourseSeed {
                title: "GitHub Copilot and ChatGPT for Coding",
                platform: Platform::Pluralsight,
                url: "https://www.pluralsight.com/courses/github-copilot-chatgpt-coding",
                rating: 4.6,
                duration: "4.5 hours",
                description: Some(
                    "Combine GitHub Copilot and ChatGPT for efficient code development",
                ),
                instructor: Some("Tech Learning Path"),
                level: Some(Level::Intermediate),
                tags: &["GitHub Copilot", "ChatGPT", "Coding Efficiency"],
            },
        ],
    ),
    (
        GENERAL_BUCKET,
        &[
            CourseSeed {
                title: "Introduction to Artificial Intelligence for Everyone",
                platform: Platform::Coursera,
                url: "https://www.coursera.org/learn/introduction-to-ai",
                rating: 4.8,
                duration: "4 weeks",
                description: Some(
                    "Comprehensive introduction to AI concepts and applications across industries",
                ),
                instructor: Some("Andrew Ng"),
                level: Some(Level::Beginner),
                tags: &["AI Fundamentals", "Machine Learning", "Applications"],
            },
            CourseSeed {
                title: "AI for Business Professionals",
                platform: Platform::EdX,
                url: "https://www.edx.org/course/ai-business-professionals",
                rating: 4.5,
                duration: "6 weeks",
                description: Some("Strategic implementation of AI in business contexts"),
                instructor: Some("MIT"),
                level: Some(Level::Intermediate),
                tags: &["AI Strategy", "Business Applications", "Implementation"],
            },
        ],
    ),
];

impl CourseSeed {
    fn to_record(self) -> CourseRecord {
        CourseRecord {
            title: self.title.to_owned(),
            platform: self.platform,
            url: self.url.to_owned(),
            rating: self.rating,
            duration: self.duration.to_owned(),
            description: self.description.map(str::to_owned),
            instructor: self.instructor.map(str::to_owned),
            level: self.level,
            tags: self.tags.iter().map(|tag| (*tag).to_owned()).collect(),
        }
    }
}

/// Read-only mapping from bucket key to ordered course records.
///
/// Built once during startup and shared by `Arc`; never mutated afterwards,
/// so concurrent lookups need no synchronization.
#[derive(Debug, Clone)]
pub struct CourseCatalog {
    buckets: HashMap<String, Vec<CourseRecord>>,
}

impl CourseCatalog {
    /// Build the compiled-in catalog.
    pub fn builtin() -> Self {
        Self::from_buckets(BUCKET_SEEDS.iter().map(|(key, seeds)| {
            ((*key).to_owned(), seeds.iter().map(|seed| seed.to_record()).collect())
        }))
    }

    /// Build a catalog from explicit buckets. Used by tests that need a
    /// catalog with specific shapes.
    pub fn from_buckets(
        buckets: impl IntoIterator<Item = (String, Vec<CourseRecord>)>,
    ) -> Self {
        Self { buckets: buckets.into_iter().collect() }
    }

    /// Records under a bucket key, in declaration order.
    pub fn bucket(&self, key: &str) -> Option<&[CourseRecord]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn record_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_all_seeded_buckets() {
        let catalog = CourseCatalog::builtin();
        for (key, seeds) in BUCKET_SEEDS {
            let bucket = catalog.bucket(key).expect("bucket exists");
            assert_eq!(bucket.len(), seeds.len(), "bucket `{key}` size");
        }
        assert_eq!(catalog.bucket_count(), BUCKET_SEEDS.len());
    }

    #[test]
    fn all_ratings_are_within_bounds() {
        let catalog = CourseCatalog::builtin();
        for (key, _) in BUCKET_SEEDS {
            for record in catalog.bucket(key).expect("bucket exists") {
                assert!(
                    (0.0..=5.0).contains(&record.rating),
                    "rating out of range for `{}`",
                    record.title
                );
            }
        }
    }

    #[test]
    fn general_bucket_is_present() {
        let catalog = CourseCatalog::builtin();
        let general = catalog.bucket(GENERAL_BUCKET).expect("fallback bucket exists");
        assert!(!general.is_empty());
    }

    #[test]
    fn bucket_order_matches_declaration_order() {
        let catalog = CourseCatalog::builtin();
        let accounting = catalog.bucket("chatgpt-accounting").expect("bucket exists");
        assert_eq!(accounting[0].title, "AI for Accounting Professionals: ChatGPT & Automation");
        assert_eq!(accounting[1].title, "Generative AI for Accountants: Complete Guide");
    }
}
