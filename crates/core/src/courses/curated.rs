//! Curated per-tool course lookup.
//!
//! Independent of the ranking engine: a fixed table from AI-tool display
//! name to a small hand-picked course list, consulted before asking the
//! language model to generate suggestions.

use super::types::{Course, Platform};

#[derive(Debug, Clone, Copy)]
struct CuratedSeed {
    title: &'static str,
    platform: Platform,
    url: &'static str,
    rating: f64,
    duration: &'static str,
}

const TOOL_SEEDS: &[(&str, &[CuratedSeed])] = &[
    (
        "ChatGPT",
        &[
            CuratedSeed {
                title: "ChatGPT Complete Guide - Zero to Hero",
                platform: Platform::Udemy,
                url: "https://www.udemy.com/course/chatgpt-complete-guide/",
                rating: 4.5,
                duration: "4.5 hours",
            },
            CuratedSeed {
                title: "ChatGPT Tutorial for Beginners",
                platform: Platform::YouTube,
                url: "https://www.youtube.com/watch?v=JTxsNm9IdYU",
                rating: 4.6,
                duration: "45 mins",
            },
            CuratedSeed {
                title: "Introduction to Generative AI",
                platform: Platform::Coursera,
                url: "https://www.coursera.org/learn/introduction-generative-ai",
                rating: 4.7,
                duration: "1 week",
            },
            CuratedSeed {
                title: "Prompt Engineering for ChatGPT",
                platform: Platform::LinkedInLearning,
                url: "https://www.linkedin.com/learning/prompt-engineering-how-to-talk-to-the-ais",
                rating: 4.4,
                duration: "1.5 hours",
            },
        ],
    ),
    (
        "Claude AI",
        &[
            CuratedSeed {
                title: "Claude AI Complete Tutorial",
                platform: Platform::YouTube,
                url: "https://www.youtube.com/watch?v=Gaf_jCnA6mc",
                rating: 4.4,
                duration: "25 mins",
            },
            CuratedSeed {
                title: "AI Conversation Design",
                platform: Platform::Skillshare,
                url: "https://www.skillshare.com/classes/AI-Conversation-Design-with-Claude/1827394810",
                rating: 4.3,
                duration: "2 hours",
            },
            CuratedSeed {
                title: "Advanced AI Prompting Techniques",
                platform: Platform::Udemy,
                url: "https://www.udemy.com/course/advanced-ai-prompting/",
                rating: 4.5,
                duration: "3 hours",
            },
        ],
    ),
    (
        "Midjourney",
        &[
            CuratedSeed {
                title: "Midjourney AI Art Generation Complete Course",
                platform: Platform::YouTube,
                url: "https://www.youtube.com/watch?v=35RQKLhIhgU",
                rating: 4.6,
                duration: "32 mins",
            },
            CuratedSeed {
                title: "Midjourney Mastery Course",
                platform: Platform::Udemy,
                url: "https://www.udemy.com/course/midjourney-mastery/",
                rating: 4.7,
                duration: "3.5 hours",
            },
            CuratedSeed {
                title: "AI Art Creation with Midjourney",
                platform: Platform::Skillshare,
                url: "https://www.skillshare.com/classes/AI-Art-Creation-with-Midjourney/1827394811",
                rating: 4.5,
                duration: "2 hours",
            },
        ],
    ),
    (
        "GitHub Copilot",
        &[
            CuratedSeed {
                title: "GitHub Copilot Complete Tutorial",
                platform: Platform::YouTube,
                url: "https://www.youtube.com/watch?v=Fi3AJZZregI",
                rating: 4.5,
                duration: "18 mins",
            },
            CuratedSeed {
                title: "AI-Powered Development with GitHub Copilot",
                platform: Platform::Pluralsight,
                url: "https://www.pluralsight.com/courses/github-copilot-ai-powered-development",
                rating: 4.6,
                duration: "2 hours",
            },
            CuratedSeed {
                title: "Getting Started with GitHub Copilot",
                platform: Platform::LinkedInLearning,
                url: "https://www.linkedin.com/learning/github-copilot-first-look",
                rating: 4.4,
                duration: "1 hour",
            },
        ],
    ),
    (
        "Runway ML",
        &[
            CuratedSeed {
                title: "Runway ML Complete Guide for Beginners",
                platform: Platform::YouTube,
                url: "https://www.youtube.com/watch?v=mvdlAtUt9pQ",
                rating: 4.4,
                duration: "28 mins",
            },
            CuratedSeed {
                title: "AI Video Creation Masterclass",
                platform: Platform::Udemy,
                url: "https://www.udemy.com/course/ai-video-creation-masterclass/",
                rating: 4.5,
                duration: "4 hours",
            },
            CuratedSeed {
                title: "Creative AI Video Production",
                platform: Platform::Skillshare,
                url: "https://www.skillshare.com/classes/Creative-AI-Video-Production/1827394812",
                rating: 4.3,
                duration: "2.5 hours",
            },
        ],
    ),
    (
        "Gemini AI",
        &[
            CuratedSeed {
                title: "Google Gemini AI Tutorial",
                platform: Platform::YouTube,
                url: "https://www.youtube.com/watch?v=UIZAiXYceBI",
                rating: 4.4,
                duration: "15 mins",
            },
            CuratedSeed {
                title: "Google AI Essentials",
                platform: Platform::Coursera,
                url: "https://www.coursera.org/learn/google-ai-essentials",
                rating: 4.6,
                duration: "6 weeks",
            },
            CuratedSeed {
                title: "Multimodal AI with Gemini",
                platform: Platform::EdX,
                url: "https://www.edx.org/course/multimodal-ai",
                rating: 4.5,
                duration: "4 weeks",
            },
        ],
    ),
    (
        "Perplexity AI",
        &[
            CuratedSeed {
                title: "Perplexity AI Complete Guide",
                platform: Platform::YouTube,
                url: "https://www.youtube.com/watch?v=3lD9BZVrpKM",
                rating: 4.3,
                duration: "12 mins",
            },
            CuratedSeed {
                title: "AI Research Tools Masterclass",
                platform: Platform::Udemy,
                url: "https://www.udemy.com/course/ai-research-tools/",
                rating: 4.4,
                duration: "2 hours",
            },
            CuratedSeed {
                title: "Advanced Search with AI",
                platform: Platform::Skillshare,
                url: "https://www.skillshare.com/classes/Advanced-Search-with-AI/1827394813",
                rating: 4.2,
                duration: "1 hour",
            },
        ],
    ),
    (
        "Notion AI",
        &[
            CuratedSeed {
                title: "Notion AI Tutorial for Beginners",
                platform: Platform::YouTube,
                url: "https://www.youtube.com/watch?v=hmpz6oLWLyU",
                rating: 4.4,
                duration: "24 mins",
            },
            CuratedSeed {
                title: "Notion Complete Course",
                platform: Platform::Udemy,
                url: "https://www.udemy.com/course/notion/",
                rating: 4.6,
                duration: "3 hours",
            },
            CuratedSeed {
                title: "Productivity with Notion AI",
                platform: Platform::Skillshare,
                url: "https://www.skillshare.com/classes/Productivity-with-Notion-AI/1827394814",
                rating: 4.5,
                duration: "2 hours",
            },
        ],
    ),
    (
        "Stable Diffusion",
        &[
            CuratedSeed {
                title: "Stable Diffusion Complete Tutorial",
                platform: Platform::YouTube,
                url: "https://www.youtube.com/watch?v=1ImUCGM_BWg",
                rating: 4.5,
                duration: "45 mins",
            },
            CuratedSeed {
                title: "AI Image Generation Mastery",
                platform: Platform::Udemy,
                url: "https://www.udemy.com/course/stable-diffusion-course/",
                rating: 4.7,
                duration: "5 hours",
            },
            CuratedSeed {
                title: "Creative AI Art with Stable Diffusion",
                platform: Platform::Skillshare,
                url: "https://www.skillshare.com/classes/Creative-AI-Art/1827394815",
                rating: 4.4,
                duration: "3 hours",
            },
        ],
    ),
    (
        "Copy AI",
        &[
            CuratedSeed {
                title: "Copy.ai Complete Tutorial",
                platform: Platform::YouTube,
                url: "https://www.youtube.com/watch?v=K8iMI0l1WNs",
                rating: 4.2,
                duration: "20 mins",
            },
            CuratedSeed {
                title: "AI Copywriting Masterclass",
                platform: Platform::Udemy,
                url: "https://www.udemy.com/course/ai-copywriting-masterclass/",
                rating: 4.4,
                duration: "3 hours",
            },
            CuratedSeed {
                title: "Marketing Copy with AI",
                platform: Platform::LinkedInLearning,
                url: "https://www.linkedin.com/learning/marketing-copy-with-ai",
                rating: 4.3,
                duration: "1.5 hours",
            },
        ],
    ),
    (
        "Jasper AI",
        &[
            CuratedSeed {
                title: "Jasper AI Complete Guide",
                platform: Platform::YouTube,
                url: "https://www.youtube.com/watch?v=TLbWvYrF0lQ",
                rating: 4.3,
                duration: "35 mins",
            },
            CuratedSeed {
                title: "Content Marketing with Jasper AI",
                platform: Platform::Udemy,
                url: "https://www.udemy.com/course/jasper-ai-content-marketing/",
                rating: 4.5,
                duration: "4 hours",
            },
            CuratedSeed {
                title: "AI Content Creation Workshop",
                platform: Platform::Skillshare,
                url: "https://www.skillshare.com/classes/AI-Content-Creation/1827394816",
                rating: 4.2,
                duration: "2.5 hours",
            },
        ],
    ),
    (
        "Loom AI",
        &[
            CuratedSeed {
                title: "Loom AI Features Tutorial",
                platform: Platform::YouTube,
                url: "https://www.youtube.com/watch?v=9YzDaIe5QMw",
                rating: 4.1,
                duration: "15 mins",
            },
            CuratedSeed {
                title: "Video Communication with AI",
                platform: Platform::LinkedInLearning,
                url: "https://www.linkedin.com/learning/video-communication-ai",
                rating: 4.3,
                duration: "1 hour",
            },
            CuratedSeed {
                title: "Screen Recording Mastery",
                platform: Platform::Skillshare,
                url: "https://www.skillshare.com/classes/Screen-Recording-Mastery/1827394817",
                rating: 4.2,
                duration: "1.5 hours",
            },
        ],
    ),
];

impl CuratedSeed {
    fn to_course(self) -> Course {
        Course {
            title: self.title.to_owned(),
            platform: self.platform,
            url: self.url.to_owned(),
            rating: self.rating,
            duration: self.duration.to_owned(),
        }
    }
}

/// Ordered tool-name to course-list table. Iteration order is declaration
/// order, which makes the substring match rule deterministic.
#[derive(Debug, Clone)]
pub struct CuratedCourses {
    entries: Vec<(String, Vec<Course>)>,
}

impl CuratedCourses {
    pub fn builtin() -> Self {
        Self {
            entries: TOOL_SEEDS
                .iter()
                .map(|(name, seeds)| {
                    ((*name).to_owned(), seeds.iter().map(|seed| seed.to_course()).collect())
                })
                .collect(),
        }
    }

    pub fn tool_count(&self) -> usize {
        self.entries.len()
    }

    /// Look up curated courses for a tool name.
    ///
    /// Match rules, applied in order: exact; case-insensitive exact;
    /// case-insensitive substring in either direction. The first entry that
    /// matches wins. A miss returns an empty vec, which callers treat as
    /// "ask the language model instead".
    pub fn courses_for_tool(&self, tool_name: &str) -> Vec<Course> {
        if let Some((_, courses)) =
            self.entries.iter().find(|(name, _)| name == tool_name)
        {
            return courses.clone();
        }

        if let Some((_, courses)) =
            self.entries.iter().find(|(name, _)| name.eq_ignore_ascii_case(tool_name))
        {
            return courses.clone();
        }

        let tool_lower = tool_name.to_lowercase();
        if let Some((_, courses)) = self.entries.iter().find(|(name, _)| {
            let name_lower = name.to_lowercase();
            name_lower.contains(&tool_lower) || tool_lower.contains(&name_lower)
        }) {
            return courses.clone();
        }

        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_returns_tool_courses() {
        let curated = CuratedCourses::builtin();
        let courses = curated.courses_for_tool("ChatGPT");
        assert_eq!(courses.len(), 4);
        assert_eq!(courses[0].title, "ChatGPT Complete Guide - Zero to Hero");
    }

    #[test]
    fn lookup_falls_back_to_case_insensitive_match() {
        let curated = CuratedCourses::builtin();
        let courses = curated.courses_for_tool("github copilot");
        assert_eq!(courses.len(), 3);
        assert_eq!(courses[0].platform, Platform::YouTube);
    }

    #[test]
    fn substring_match_works_in_both_directions() {
        let curated = CuratedCourses::builtin();

        // Query contained in a catalog key.
        let by_fragment = curated.courses_for_tool("Midjour");
        assert_eq!(by_fragment.len(), 3);

        // Catalog key contained in the query.
        let by_superstring = curated.courses_for_tool("Notion AI workspace assistant");
        assert!(!by_superstring.is_empty());
        assert_eq!(by_superstring[0].title, "Notion AI Tutorial for Beginners");
    }

    #[test]
    fn substring_match_takes_first_entry_in_table_order() {
        let curated = CuratedCourses::builtin();
        // "AI" is a fragment of several keys; "Claude AI" is declared first.
        let courses = curated.courses_for_tool("AI");
        assert_eq!(courses[0].title, "Claude AI Complete Tutorial");
    }

    #[test]
    fn unknown_tool_returns_empty_list() {
        let curated = CuratedCourses::builtin();
        assert!(curated.courses_for_tool("Totally Unknown Tool 9000").is_empty());
    }

    #[test]
    fn every_curated_rating_is_within_bounds() {
        let curated = CuratedCourses::builtin();
        for (name, _) in TOOL_SEEDS {
            for course in curated.courses_for_tool(name) {
                assert!((0.0..=5.0).contains(&course.rating), "tool `{name}`");
            }
        }
    }
}
