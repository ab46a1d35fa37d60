use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{AppError, AppResult},
    models::domain::ExamDomain,
};

pub const MIN_QUESTION_COUNT: u8 = 1;
pub const MAX_QUESTION_COUNT: u8 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Low => "쉬움",
            Difficulty::Medium => "보통",
            Difficulty::High => "어려움",
        }
    }

    /// One-character grade used by the single-question endpoint (`하`/`중`/`상`).
    pub fn grade(&self) -> &'static str {
        match self {
            Difficulty::Low => "하",
            Difficulty::Medium => "중",
            Difficulty::High => "상",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "low" | "하" | "쉬움" => Ok(Difficulty::Low),
            "medium" | "중" | "보통" => Ok(Difficulty::Medium),
            "high" | "상" | "어려움" => Ok(Difficulty::High),
            other => Err(AppError::ValidationError(format!(
                "난이도는 '상', '중', '하' 중 하나여야 합니다. (입력값: '{}')",
                other
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Csv,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("텍스트"),
            OutputFormat::Csv => f.write_str("CSV"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "text" | "plain text" | "텍스트" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(AppError::ValidationError(format!(
                "Unsupported output format '{}'",
                other
            ))),
        }
    }
}

/// User-selected generation settings. Fields are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    domain: ExamDomain,
    question_type: String,
    difficulty: Difficulty,
    count: u8,
    include_explanation: bool,
    output_format: OutputFormat,
}

impl GenerationRequest {
    pub fn new(
        domain: ExamDomain,
        question_type: impl Into<String>,
        difficulty: Difficulty,
        count: u8,
        include_explanation: bool,
        output_format: OutputFormat,
    ) -> AppResult<Self> {
        if !(MIN_QUESTION_COUNT..=MAX_QUESTION_COUNT).contains(&count) {
            return Err(AppError::ValidationError(format!(
                "Question count must be between {} and {}, got {}",
                MIN_QUESTION_COUNT, MAX_QUESTION_COUNT, count
            )));
        }

        Ok(Self {
            domain,
            question_type: question_type.into().trim().to_string(),
            difficulty,
            count,
            include_explanation,
            output_format,
        })
    }

    pub fn domain(&self) -> ExamDomain {
        self.domain
    }

    pub fn question_type(&self) -> &str {
        &self.question_type
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn include_explanation(&self) -> bool {
        self.include_explanation
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_accepts_all_spellings() {
        for raw in ["low", "하", "쉬움"] {
            assert_eq!(raw.parse::<Difficulty>().unwrap(), Difficulty::Low);
        }
        for raw in ["Medium", "중", "보통"] {
            assert_eq!(raw.parse::<Difficulty>().unwrap(), Difficulty::Medium);
        }
        for raw in ["HIGH", "상", "어려움"] {
            assert_eq!(raw.parse::<Difficulty>().unwrap(), Difficulty::High);
        }
    }

    #[test]
    fn difficulty_rejects_unknown_value() {
        let err = "최상".parse::<Difficulty>().unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn output_format_parses_korean_label() {
        assert_eq!("텍스트".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xlsx".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn request_rejects_count_out_of_range() {
        for count in [0u8, 11] {
            let result = GenerationRequest::new(
                ExamDomain::It,
                "빈칸 채우기",
                Difficulty::Medium,
                count,
                true,
                OutputFormat::Text,
            );
            assert!(matches!(result, Err(AppError::ValidationError(_))));
        }
    }

    #[test]
    fn request_trims_question_type() {
        let request = GenerationRequest::new(
            ExamDomain::Law,
            "  비교/구분 ",
            Difficulty::High,
            10,
            false,
            OutputFormat::Csv,
        )
        .unwrap();

        assert_eq!(request.question_type(), "비교/구분");
        assert_eq!(request.count(), 10);
        assert!(!request.include_explanation());
    }
}
