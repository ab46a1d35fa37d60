use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One parsed question. `options` is empty for answer-section output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub index: usize,
    pub criterion_label: String,
    pub question_body: String,
    pub options: Vec<String>,
    pub answer_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuestionRecord {
    /// Options rendered one per line as `1) text`.
    pub fn numbered_options(&self) -> String {
        self.options
            .iter()
            .enumerate()
            .map(|(i, option)| format!("{}) {}", i + 1, option))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Strict single-question payload returned by the JSON generation path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StructuredQuestion {
    /// 문제 내용
    pub question: String,
    /// 보기 4개
    pub choices: Vec<String>,
    /// 정답 번호 (1-4)
    pub answer: u8,
    /// 해설
    pub explanation: String,
}

impl StructuredQuestion {
    pub fn into_record(self, index: usize, criterion_label: impl Into<String>) -> QuestionRecord {
        QuestionRecord {
            index,
            criterion_label: criterion_label.into(),
            question_body: self.question,
            options: self.choices,
            answer_label: self.answer.to_string(),
            explanation: Some(self.explanation),
        }
    }
}

/// A segment the parser could not turn into a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParseWarning {
    pub segment: usize,
    pub reason: String,
}

/// Result of one batch generation, including what was dropped.
#[derive(Clone, Debug, Serialize)]
pub struct GenerationBatch {
    pub records: Vec<QuestionRecord>,
    pub warnings: Vec<ParseWarning>,
    pub requested: u8,
    pub produced: usize,
    pub dropped: usize,
    pub generated_at: DateTime<Utc>,
}

impl GenerationBatch {
    pub fn new(requested: u8, records: Vec<QuestionRecord>, warnings: Vec<ParseWarning>) -> Self {
        Self {
            produced: records.len(),
            dropped: warnings.len(),
            records,
            warnings,
            requested,
            generated_at: Utc::now(),
        }
    }

    pub fn is_short(&self) -> bool {
        self.produced < self.requested as usize
    }
}
