use std::sync::Arc;

use pathwise_agent::{CourseGenerator, HttpLlmClient};
use pathwise_core::config::{AppConfig, ConfigError, LoadOptions};
use pathwise_core::{CourseEngine, CuratedCourses};
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub engine: Arc<CourseEngine>,
    pub curated: Arc<CuratedCourses>,
    pub generator: Arc<CourseGenerator>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("llm client initialization failed: {0}")]
    LlmClient(#[source] anyhow::Error),
}

pub async fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config).await
}

pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(event_name = "system.bootstrap.start", "starting application bootstrap");

    let engine = Arc::new(CourseEngine::builtin());
    let curated = Arc::new(CuratedCourses::builtin());
    info!(
        event_name = "system.bootstrap.catalog_loaded",
        buckets = engine.catalog().bucket_count(),
        records = engine.catalog().record_count(),
        curated_tools = curated.tool_count(),
        "static course data loaded"
    );

    let llm_client = HttpLlmClient::from_config(&config.llm).map_err(BootstrapError::LlmClient)?;
    let generator = Arc::new(CourseGenerator::new(Arc::new(llm_client)));
    info!(
        event_name = "system.bootstrap.generator_ready",
        provider = ?config.llm.provider,
        model = %config.llm.model,
        "course generator initialized"
    );

    Ok(Application { config, engine, curated, generator })
}
