use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{
    constants::question_types::question_type_description,
    errors::{AppError, AppResult},
    models::domain::{Difficulty, ExamDomain, GenerationRequest, OutputFormat},
};

fn default_difficulty() -> String {
    Difficulty::Medium.grade().to_string()
}

fn default_count() -> u8 {
    5
}

fn default_include_explanation() -> bool {
    true
}

fn default_output_format() -> String {
    "text".to_string()
}

fn validate_question_type(value: &str) -> Result<(), ValidationError> {
    if question_type_description(value).is_none() {
        return Err(ValidationError::new("unknown_question_type"));
    }
    Ok(())
}

/// Body of `POST /generate`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuestionRequest {
    #[validate(length(min = 1, max = 50))]
    pub domain: String,

    #[serde(default = "default_difficulty")]
    #[validate(length(min = 1, max = 10))]
    pub difficulty: String,
}

impl GenerateQuestionRequest {
    pub fn parse(&self) -> AppResult<(ExamDomain, Difficulty)> {
        self.validate()?;
        let domain = self.domain.parse::<ExamDomain>()?;
        let difficulty = self.difficulty.parse::<Difficulty>()?;
        Ok((domain, difficulty))
    }
}

/// Batch generation settings, accepted as a JSON body or as query parameters.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerationRequestDto {
    #[validate(length(min = 1, max = 50))]
    pub domain: String,

    #[validate(custom(function = "validate_question_type"))]
    pub question_type: String,

    #[serde(default = "default_difficulty")]
    pub difficulty: String,

    #[serde(default = "default_count")]
    #[validate(range(min = 1, max = 10))]
    pub count: u8,

    #[serde(default = "default_include_explanation")]
    pub include_explanation: bool,

    #[serde(default = "default_output_format")]
    pub output_format: String,
}

impl TryFrom<GenerationRequestDto> for GenerationRequest {
    type Error = AppError;

    fn try_from(dto: GenerationRequestDto) -> Result<Self, Self::Error> {
        dto.validate()?;

        GenerationRequest::new(
            dto.domain.parse::<ExamDomain>()?,
            dto.question_type,
            dto.difficulty.parse::<Difficulty>()?,
            dto.count,
            dto.include_explanation,
            dto.output_format.parse::<OutputFormat>()?,
        )
    }
}
