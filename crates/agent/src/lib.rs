//! LLM collaborator - generated recommendations for tools outside the catalog
//!
//! This crate is the non-deterministic edge of pathwise. When the curated
//! table has no entry for a tool, the server asks this crate to produce
//! search-link courses for it:
//! - `LlmClient` - pluggable completion trait (OpenAI/Anthropic/Ollama)
//! - `CourseGenerator` - prompt construction, strict JSON parsing, validation
//!
//! # Safety Principle
//!
//! The LLM never invents direct course URLs. Every generated course points at
//! a platform search page built from a fixed URL template, so the link works
//! regardless of what the model hallucinates. If the model fails, times out,
//! or returns malformed output, the generator degrades to a deterministic
//! two-course fallback instead of surfacing an error.

pub mod generator;
pub mod llm;

pub use generator::{CourseGenerator, GenerationRequest};
pub use llm::{HttpLlmClient, LlmClient};
