use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{FileGuideRepository, GuideRepository},
    services::{
        GenerationClient, GuideService, OpenAiGenerationClient, QuestionService, SourceExtractor,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub source_extractor: SourceExtractor,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;

        let repository = Arc::new(FileGuideRepository::new(&config.guide_dir));
        let client = Arc::new(OpenAiGenerationClient::new(&config));

        Ok(Self::with_parts(config, repository, client))
    }

    /// Wires the pipeline around caller-supplied criteria and generation
    /// backends.
    pub fn with_parts(
        config: Config,
        repository: Arc<dyn GuideRepository>,
        client: Arc<dyn GenerationClient>,
    ) -> Self {
        let guide_service = Arc::new(GuideService::new(repository));
        let question_service = Arc::new(QuestionService::new(
            guide_service,
            client,
            config.parser_variant,
            config.source_text_limit,
        ));

        Self {
            question_service,
            source_extractor: SourceExtractor::new(),
            config: Arc::new(config),
        }
    }
}
