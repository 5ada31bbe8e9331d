//! Course API routes.
//!
//! Endpoints:
//! - `GET  /api/courses/search` — catalog search, or popular courses when
//!   `popular=true`
//! - `POST /api/courses/search` — same contract via JSON body
//! - `POST /api/courses`        — curated courses for an AI tool, with
//!   model-generated search links as fallback (rate limited per client IP)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use pathwise_agent::{CourseGenerator, GenerationRequest};
use pathwise_core::config::RateLimitConfig;
use pathwise_core::courses::{
    Course, CourseEngine, CourseQuery, CuratedCourses, Platform, DEFAULT_MAX_RESULTS,
    DEFAULT_MIN_RATING, DEFAULT_POPULAR_LIMIT, MAX_RESULTS_CAP,
};

const MAX_POPULAR_LIMIT: usize = 20;

#[derive(Clone)]
pub struct CoursesState {
    engine: Arc<CourseEngine>,
    curated: Arc<CuratedCourses>,
    generator: Arc<CourseGenerator>,
    rate_limiter: Arc<RateLimiter>,
}

pub fn router(
    engine: Arc<CourseEngine>,
    curated: Arc<CuratedCourses>,
    generator: Arc<CourseGenerator>,
    rate_limit: &RateLimitConfig,
) -> Router {
    let rate_limiter = Arc::new(RateLimiter::new(
        rate_limit.requests_per_minute,
        Duration::from_secs(rate_limit.window_secs),
    ));

    Router::new()
        .route("/api/courses/search", axum::routing::get(search_get).post(search_post))
        .route("/api/courses", post(tool_courses))
        .with_state(CoursesState { engine, curated, generator, rate_limiter })
}

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParams {
    pub topic: Option<String>,
    pub role: Option<String>,
    pub platform: Option<String>,
    pub max_results: Option<usize>,
    pub min_rating: Option<f64>,
    pub popular: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchBody {
    pub topic: Option<String>,
    pub role: Option<String>,
    pub platform: Option<String>,
    pub max_results: Option<usize>,
    pub min_rating: Option<f64>,
    pub popular: Option<bool>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SearchEnvelope {
    pub success: bool,
    pub data: Vec<Course>,
    pub total: usize,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub query: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct SearchError {
    pub success: bool,
    pub error: String,
    pub details: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCoursesRequest {
    pub tool_name: Option<String>,
    pub persona: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ToolCoursesResponse {
    pub courses: Vec<Course>,
}

#[derive(Debug, Serialize)]
pub struct ToolCoursesError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Search handlers
// ---------------------------------------------------------------------------

/// Either a validated search query or a validated popular-courses request.
enum SearchRequest {
    Search(CourseQuery),
    Popular { role: String, limit: usize },
}

pub async fn search_get(
    State(state): State<CoursesState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchEnvelope>, (StatusCode, Json<SearchError>)> {
    let request = if params.popular.as_deref() == Some("true") {
        validate_popular(params.role.as_deref(), params.limit)
    } else {
        validate_search(&params.topic, &params.role, &params.platform, params.max_results, params.min_rating)
    }
    .map_err(|details| bad_request("Invalid query parameters", details))?;

    run_search(&state, request).map_err(|details| bad_request("Invalid query parameters", details))
}

pub async fn search_post(
    State(state): State<CoursesState>,
    Json(body): Json<SearchBody>,
) -> Result<Json<SearchEnvelope>, (StatusCode, Json<SearchError>)> {
    let request = if body.popular == Some(true) {
        validate_popular(body.role.as_deref(), body.limit)
    } else {
        validate_search(&body.topic, &body.role, &body.platform, body.max_results, body.min_rating)
    }
    .map_err(|details| bad_request("Invalid request body", details))?;

    run_search(&state, request).map_err(|details| bad_request("Invalid request body", details))
}

fn run_search(state: &CoursesState, request: SearchRequest) -> Result<Json<SearchEnvelope>, Vec<String>> {
    match request {
        SearchRequest::Search(query) => {
            let courses =
                state.engine.get_courses(&query).map_err(|error| vec![error.to_string()])?;
            info!(
                event_name = "courses.search",
                topic = %query.topic,
                role = %query.role,
                total = courses.len(),
                "course search handled"
            );

            let echo = serde_json::to_value(&query).unwrap_or_default();
            Ok(Json(SearchEnvelope {
                success: true,
                total: courses.len(),
                data: courses,
                kind: "search",
                query: echo,
            }))
        }
        SearchRequest::Popular { role, limit } => {
            let courses =
                state.engine.popular_courses(&role, limit).map_err(|error| vec![error.to_string()])?;
            info!(
                event_name = "courses.popular",
                role = %role,
                total = courses.len(),
                "popular course lookup handled"
            );

            Ok(Json(SearchEnvelope {
                success: true,
                total: courses.len(),
                data: courses,
                kind: "popular",
                query: serde_json::json!({ "role": role, "limit": limit }),
            }))
        }
    }
}

fn validate_search(
    topic: &Option<String>,
    role: &Option<String>,
    platform: &Option<String>,
    max_results: Option<usize>,
    min_rating: Option<f64>,
) -> Result<SearchRequest, Vec<String>> {
    let mut details = Vec::new();

    let topic = non_empty(topic);
    if topic.is_none() {
        details.push("topic: must be a non-empty string".to_string());
    }
    let role = non_empty(role);
    if role.is_none() {
        details.push("role: must be a non-empty string".to_string());
    }

    let platform = match non_empty(platform) {
        None => None,
        Some(raw) => match raw.parse::<Platform>() {
            Ok(platform) => Some(platform),
            Err(error) => {
                details.push(format!("platform: {error}"));
                None
            }
        },
    };

    let max_results = max_results.unwrap_or(DEFAULT_MAX_RESULTS);
    if !(1..=MAX_RESULTS_CAP).contains(&max_results) {
        details.push(format!("maxResults: must be between 1 and {MAX_RESULTS_CAP}"));
    }

    let min_rating = min_rating.unwrap_or(DEFAULT_MIN_RATING);
    if !(0.0..=5.0).contains(&min_rating) {
        details.push("minRating: must be between 0 and 5".to_string());
    }

    if !details.is_empty() {
        return Err(details);
    }

    let (topic, role) = (topic.unwrap_or_default(), role.unwrap_or_default());
    let mut query =
        CourseQuery::new(topic, role).with_max_results(max_results).with_min_rating(min_rating);
    if let Some(platform) = platform {
        query = query.with_platform(platform);
    }
    Ok(SearchRequest::Search(query))
}

fn validate_popular(
    role: Option<&str>,
    limit: Option<usize>,
) -> Result<SearchRequest, Vec<String>> {
    let mut details = Vec::new();

    let role = role.map(str::trim).filter(|value| !value.is_empty());
    if role.is_none() {
        details.push("role: must be a non-empty string".to_string());
    }

    let limit = limit.unwrap_or(DEFAULT_POPULAR_LIMIT);
    if !(1..=MAX_POPULAR_LIMIT).contains(&limit) {
        details.push(format!("limit: must be between 1 and {MAX_POPULAR_LIMIT}"));
    }

    if !details.is_empty() {
        return Err(details);
    }

    Ok(SearchRequest::Popular { role: role.unwrap_or_default().to_string(), limit })
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty()).map(str::to_string)
}

fn bad_request(error: &str, details: Vec<String>) -> (StatusCode, Json<SearchError>) {
    (
        StatusCode::BAD_REQUEST,
        Json(SearchError { success: false, error: error.to_string(), details }),
    )
}

// ---------------------------------------------------------------------------
// Per-tool courses handler
// ---------------------------------------------------------------------------

pub async fn tool_courses(
    State(state): State<CoursesState>,
    ConnectInfo(client_addr): ConnectInfo<SocketAddr>,
    Json(body): Json<ToolCoursesRequest>,
) -> Result<Json<ToolCoursesResponse>, (StatusCode, Json<ToolCoursesError>)> {
    if !state.rate_limiter.check(client_addr.ip()) {
        warn!(
            event_name = "courses.tool.rate_limited",
            client_ip = %client_addr.ip(),
            "per-tool course request rejected by rate limiter"
        );
        return Err((
            StatusCode::TOO_MANY_REQUESTS,
            Json(ToolCoursesError { error: "Rate limit exceeded".to_string(), details: None }),
        ));
    }

    let tool_name = match body.tool_name.as_deref().map(str::trim) {
        Some(tool_name) if !tool_name.is_empty() => tool_name.to_string(),
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ToolCoursesError {
                    error: "Invalid request data".to_string(),
                    details: Some(vec!["toolName: must be a non-empty string".to_string()]),
                }),
            ));
        }
    };

    let request_id = Uuid::new_v4().simple().to_string();

    let curated = state.curated.courses_for_tool(&tool_name);
    if !curated.is_empty() {
        info!(
            event_name = "courses.tool.curated_hit",
            request_id = %request_id,
            tool_name = %tool_name,
            total = curated.len(),
            "curated courses returned"
        );
        return Ok(Json(ToolCoursesResponse { courses: curated }));
    }

    let mut generation = GenerationRequest::new(&tool_name);
    if let Some(persona) = body.persona.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        generation = generation.with_persona(persona);
    }
    if let Some(role) = body.role.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        generation = generation.with_role(role);
    }

    let courses = state.generator.generate(&generation).await;
    info!(
        event_name = "courses.tool.generated",
        request_id = %request_id,
        tool_name = %tool_name,
        total = courses.len(),
        "generated courses returned"
    );

    Ok(Json(ToolCoursesResponse { courses }))
}

// ---------------------------------------------------------------------------
// Rate limiting
// ---------------------------------------------------------------------------

struct Window {
    count: u32,
    reset_at: Instant,
}

/// Fixed-window request counter keyed by client IP.
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    windows: Mutex<HashMap<IpAddr, Window>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self { max_requests, window, windows: Mutex::new(HashMap::new()) }
    }

    /// Returns false when the caller has exhausted the current window.
    pub fn check(&self, ip: IpAddr) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.lock().unwrap_or_else(PoisonError::into_inner);

        let window = windows
            .entry(ip)
            .or_insert_with(|| Window { count: 0, reset_at: now + self.window });
        if now >= window.reset_at {
            window.count = 0;
            window.reset_at = now + self.window;
        }

        if window.count >= self.max_requests {
            return false;
        }
        window.count += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use axum::{
        extract::{ConnectInfo, Query, State},
        http::StatusCode,
        Json,
    };
    use pathwise_agent::{CourseGenerator, LlmClient};
    use pathwise_core::courses::Platform;
    use pathwise_core::{CourseEngine, CuratedCourses};

    use super::{
        search_get, search_post, tool_courses, CoursesState, RateLimiter, SearchBody,
        SearchParams, ToolCoursesRequest,
    };

    struct UnreachableModel;

    #[async_trait]
    impl LlmClient for UnreachableModel {
        async fn complete(&self, _system_prompt: &str, _user_prompt: &str) -> Result<String> {
            Err(anyhow!("model endpoint unreachable"))
        }
    }

    struct CannedModel(String);

    #[async_trait]
    impl LlmClient for CannedModel {
        async fn complete(&self, _system_prompt: &str, _user_prompt: &str) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    fn state_with(llm: Arc<dyn LlmClient>, requests_per_minute: u32) -> State<CoursesState> {
        State(CoursesState {
            engine: Arc::new(CourseEngine::builtin()),
            curated: Arc::new(CuratedCourses::builtin()),
            generator: Arc::new(CourseGenerator::new(llm)),
            rate_limiter: Arc::new(RateLimiter::new(
                requests_per_minute,
                Duration::from_secs(60),
            )),
        })
    }

    fn state() -> State<CoursesState> {
        state_with(Arc::new(UnreachableModel), 10)
    }

    fn client(last_octet: u8) -> ConnectInfo<SocketAddr> {
        ConnectInfo(SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, last_octet)), 4000))
    }

    #[tokio::test]
    async fn search_get_returns_envelope_with_query_echo() {
        let params = SearchParams {
            topic: Some("ChatGPT".to_string()),
            role: Some("Accountant".to_string()),
            min_rating: Some(0.0),
            ..SearchParams::default()
        };

        let Json(envelope) = search_get(state(), Query(params)).await.expect("should succeed");

        assert!(envelope.success);
        assert_eq!(envelope.kind, "search");
        assert_eq!(envelope.total, envelope.data.len());
        assert_eq!(envelope.data[0].title, "Generative AI for Accountants: Complete Guide");
        assert_eq!(envelope.query["topic"], "ChatGPT");
        assert_eq!(envelope.query["maxResults"], 10);
    }

    #[tokio::test]
    async fn search_get_popular_switch_selects_popular_operation() {
        let params = SearchParams {
            popular: Some("true".to_string()),
            role: Some("Marketer".to_string()),
            ..SearchParams::default()
        };

        let Json(envelope) = search_get(state(), Query(params)).await.expect("should succeed");

        assert_eq!(envelope.kind, "popular");
        assert_eq!(envelope.total, 5);
        assert_eq!(envelope.query["limit"], 5);
    }

    #[tokio::test]
    async fn search_get_rejects_missing_topic_with_details() {
        let params = SearchParams { role: Some("Accountant".to_string()), ..SearchParams::default() };

        let (status, Json(error)) =
            search_get(state(), Query(params)).await.expect_err("should fail");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!error.success);
        assert_eq!(error.error, "Invalid query parameters");
        assert!(error.details.iter().any(|detail| detail.starts_with("topic:")));
    }

    #[tokio::test]
    async fn search_get_rejects_unknown_platform() {
        let params = SearchParams {
            topic: Some("ChatGPT".to_string()),
            role: Some("Accountant".to_string()),
            platform: Some("MySpace Learning".to_string()),
            ..SearchParams::default()
        };

        let (status, Json(error)) =
            search_get(state(), Query(params)).await.expect_err("should fail");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error.details.iter().any(|detail| detail.starts_with("platform:")));
    }

    #[tokio::test]
    async fn search_get_rejects_out_of_range_bounds() {
        let params = SearchParams {
            topic: Some("ChatGPT".to_string()),
            role: Some("Accountant".to_string()),
            max_results: Some(51),
            min_rating: Some(5.5),
            ..SearchParams::default()
        };

        let (_, Json(error)) = search_get(state(), Query(params)).await.expect_err("should fail");

        assert_eq!(error.details.len(), 2);
    }

    #[tokio::test]
    async fn search_get_rejects_popular_limit_above_cap() {
        let params = SearchParams {
            popular: Some("true".to_string()),
            role: Some("Marketer".to_string()),
            limit: Some(25),
            ..SearchParams::default()
        };

        let (status, Json(error)) =
            search_get(state(), Query(params)).await.expect_err("should fail");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error.details.iter().any(|detail| detail.starts_with("limit:")));
    }

    #[tokio::test]
    async fn search_post_accepts_body_with_platform_filter() {
        let body = SearchBody {
            topic: Some("ChatGPT".to_string()),
            role: Some("Marketer".to_string()),
            platform: Some("YouTube".to_string()),
            min_rating: Some(0.0),
            ..SearchBody::default()
        };

        let Json(envelope) = search_post(state(), Json(body)).await.expect("should succeed");

        assert!(envelope.data.iter().all(|course| course.platform == Platform::YouTube));
        assert_eq!(envelope.query["platform"], "YouTube");
    }

    #[tokio::test]
    async fn search_post_popular_uses_boolean_switch() {
        let body = SearchBody {
            popular: Some(true),
            role: Some("Developer".to_string()),
            limit: Some(3),
            ..SearchBody::default()
        };

        let Json(envelope) = search_post(state(), Json(body)).await.expect("should succeed");

        assert_eq!(envelope.kind, "popular");
        assert_eq!(envelope.total, 3);
    }

    #[tokio::test]
    async fn tool_courses_returns_curated_entries_first() {
        let body = ToolCoursesRequest {
            tool_name: Some("ChatGPT".to_string()),
            persona: None,
            role: None,
        };

        let Json(response) =
            tool_courses(state(), client(1), Json(body)).await.expect("should succeed");

        assert_eq!(response.courses.len(), 4);
        assert_eq!(response.courses[0].title, "ChatGPT Complete Guide - Zero to Hero");
    }

    #[tokio::test]
    async fn tool_courses_uses_generator_for_unknown_tools() {
        let payload = r#"{
            "courses": [
                {
                    "title": "Zapier AI Masterclass",
                    "platform": "Udemy",
                    "url": "https://www.udemy.com/courses/search/?q=Zapier+AI",
                    "rating": 4.5,
                    "duration": "2 hours"
                }
            ]
        }"#;
        let body = ToolCoursesRequest {
            tool_name: Some("Some Obscure Tool".to_string()),
            persona: Some("Freelancer".to_string()),
            role: Some("Consultant".to_string()),
        };

        let Json(response) =
            tool_courses(state_with(Arc::new(CannedModel(payload.to_string())), 10), client(2), Json(body))
                .await
                .expect("should succeed");

        assert_eq!(response.courses.len(), 1);
        assert_eq!(response.courses[0].title, "Zapier AI Masterclass");
    }

    #[tokio::test]
    async fn tool_courses_falls_back_when_model_is_unreachable() {
        let body = ToolCoursesRequest {
            tool_name: Some("Some Obscure Tool".to_string()),
            persona: None,
            role: None,
        };

        let Json(response) =
            tool_courses(state(), client(3), Json(body)).await.expect("should succeed");

        assert_eq!(response.courses.len(), 2);
        assert_eq!(response.courses[0].platform, Platform::YouTube);
        assert_eq!(response.courses[1].platform, Platform::Udemy);
    }

    #[tokio::test]
    async fn tool_courses_rejects_missing_tool_name() {
        let body = ToolCoursesRequest { tool_name: None, persona: None, role: None };

        let (status, Json(error)) =
            tool_courses(state(), client(4), Json(body)).await.expect_err("should fail");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error, "Invalid request data");
    }

    #[tokio::test]
    async fn tool_courses_returns_429_once_window_is_exhausted() {
        let State(shared) = state_with(Arc::new(UnreachableModel), 2);

        for _ in 0..2 {
            let body = ToolCoursesRequest {
                tool_name: Some("ChatGPT".to_string()),
                persona: None,
                role: None,
            };
            tool_courses(State(shared.clone()), client(5), Json(body))
                .await
                .expect("within the window");
        }

        let body =
            ToolCoursesRequest { tool_name: Some("ChatGPT".to_string()), persona: None, role: None };
        let (status, Json(error)) = tool_courses(State(shared.clone()), client(5), Json(body))
            .await
            .expect_err("should be limited");

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(error.error, "Rate limit exceeded");

        // A different client IP still has its own window
        let body =
            ToolCoursesRequest { tool_name: Some("ChatGPT".to_string()), persona: None, role: None };
        tool_courses(State(shared), client(6), Json(body)).await.expect("separate window");
    }

    #[tokio::test]
    async fn router_serves_search_over_http() {
        use axum::body::{to_bytes, Body};
        use axum::http::Request;
        use pathwise_core::config::RateLimitConfig;
        use tower::ServiceExt;

        let router = super::router(
            Arc::new(CourseEngine::builtin()),
            Arc::new(CuratedCourses::builtin()),
            Arc::new(CourseGenerator::new(Arc::new(UnreachableModel))),
            &RateLimitConfig { requests_per_minute: 10, window_secs: 60 },
        );

        let request = Request::builder()
            .uri("/api/courses/search?topic=ChatGPT&role=Accountant&minRating=0")
            .body(Body::empty())
            .expect("request should build");
        let response = router.oneshot(request).await.expect("router should respond");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let payload: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(payload["success"], true);
        assert_eq!(payload["type"], "search");
        assert_eq!(payload["data"][0]["rating"], 4.7);
    }

    #[test]
    fn rate_limiter_resets_after_the_window_elapses() {
        let limiter = RateLimiter::new(1, Duration::from_millis(0));
        let ip = IpAddr::V4(Ipv4Addr::LOCALHOST);

        assert!(limiter.check(ip));
        // Zero-length window expires immediately, so the next call starts fresh
        assert!(limiter.check(ip));
    }
}
