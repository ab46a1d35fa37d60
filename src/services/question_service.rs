use std::sync::Arc;

use crate::{
    constants::prompts::BATCH_SYSTEM_PROMPT,
    errors::AppResult,
    models::domain::{
        Difficulty, ExamDomain, GenerationBatch, GenerationRequest, StructuredQuestion,
    },
    services::{
        guide_service::{CriteriaBlock, GuideService},
        model_service::GenerationClient,
        parser::{structured_json, ParserOptions, ParserVariant, ResponseParser},
        prompt_service::PromptBuilder,
    },
};

/// Runs the generation pipeline: criteria, prompt, completion, parse.
pub struct QuestionService {
    guides: Arc<GuideService>,
    client: Arc<dyn GenerationClient>,
    prompts: PromptBuilder,
    batch_variant: ParserVariant,
    source_text_limit: usize,
}

impl QuestionService {
    pub fn new(
        guides: Arc<GuideService>,
        client: Arc<dyn GenerationClient>,
        variant: ParserVariant,
        source_text_limit: usize,
    ) -> Self {
        let prompts = PromptBuilder::new(variant);
        if prompts.variant() != variant {
            log::warn!(
                "Parser variant {} only handles single questions; batches use {}",
                variant,
                prompts.variant()
            );
        }

        Self {
            guides,
            client,
            batch_variant: prompts.variant(),
            prompts,
            source_text_limit,
        }
    }

    pub fn domains(&self) -> Vec<&'static str> {
        ExamDomain::labels()
    }

    pub async fn generate_batch(&self, request: &GenerationRequest) -> AppResult<GenerationBatch> {
        let criteria = self.guides.criteria_block(request.domain()).await?;
        self.run_batch(request, &criteria).await
    }

    /// Same as [`generate_batch`](Self::generate_batch) with extracted document
    /// text standing in for the criteria table.
    pub async fn generate_batch_from_source(
        &self,
        request: &GenerationRequest,
        source_text: &str,
    ) -> AppResult<GenerationBatch> {
        let criteria = CriteriaBlock::from_source_text(source_text, self.source_text_limit);
        self.run_batch(request, &criteria).await
    }

    pub async fn generate_single(
        &self,
        domain: ExamDomain,
        difficulty: Difficulty,
    ) -> AppResult<StructuredQuestion> {
        let criteria = self.guides.criteria_list_block(domain).await?;
        let (system, user) = self.prompts.build_single(domain, difficulty, &criteria)?;

        log::info!("Generating single {} question ({})", domain, difficulty.grade());
        let raw = self.client.complete(&user, Some(&system)).await?;

        structured_json::parse_structured_question(&raw)
    }

    async fn run_batch(
        &self,
        request: &GenerationRequest,
        criteria: &CriteriaBlock,
    ) -> AppResult<GenerationBatch> {
        let prompt = self.prompts.build(request, criteria)?;

        log::info!(
            "Generating {} {} question(s) for {} ({})",
            request.count(),
            request.question_type(),
            request.domain(),
            request.difficulty()
        );
        let raw = self
            .client
            .complete(prompt.as_str(), Some(BATCH_SYSTEM_PROMPT))
            .await?;

        let parser = ResponseParser::new(
            self.batch_variant,
            ParserOptions {
                require_explanation: request.include_explanation(),
                ..ParserOptions::default()
            },
        );
        let outcome = parser.parse(&raw)?;

        let batch = GenerationBatch::new(request.count(), outcome.records, outcome.warnings);
        if batch.is_short() {
            log::warn!(
                "Requested {} question(s) but produced {} ({} dropped)",
                batch.requested,
                batch.produced,
                batch.dropped
            );
        } else {
            log::info!("Produced {} question(s)", batch.produced);
        }

        Ok(batch)
    }
}
