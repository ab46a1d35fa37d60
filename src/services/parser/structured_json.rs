use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::{
    errors::{AppError, AppResult},
    models::domain::StructuredQuestion,
};

const REQUIRED_FIELDS: [&str; 4] = ["question", "choices", "answer", "explanation"];
const CHOICE_COUNT: usize = 4;

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```[A-Za-z]*\s*(.*?)\s*(?:```|\z)")
        .expect("CODE_FENCE is a valid regex pattern")
});

/// Removes a surrounding code fence, with or without a language tag.
pub fn strip_code_fence(raw: &str) -> &str {
    CODE_FENCE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map_or(raw, |body| body.as_str())
        .trim()
}

/// Parses a single question object. Any deviation fails the whole response.
pub fn parse_structured_question(raw: &str) -> AppResult<StructuredQuestion> {
    let body = strip_code_fence(raw);

    let value: Value = serde_json::from_str(body)
        .map_err(|e| AppError::ResponseFormat(format!("응답 파싱 중 오류 발생: {}", e)))?;

    let object = value
        .as_object()
        .ok_or_else(|| AppError::ResponseFormat("expected a JSON object".to_string()))?;

    for field in REQUIRED_FIELDS {
        if !object.contains_key(field) {
            return Err(AppError::MissingField(field.to_string()));
        }
    }

    Ok(StructuredQuestion {
        question: string_field(object, "question")?,
        choices: choices_field(object)?,
        answer: answer_field(object)?,
        explanation: string_field(object, "explanation")?,
    })
}

fn string_field(object: &Map<String, Value>, name: &str) -> AppResult<String> {
    object[name]
        .as_str()
        .map(|s| s.trim().to_string())
        .ok_or_else(|| AppError::ResponseFormat(format!("'{}' must be a string", name)))
}

fn choices_field(object: &Map<String, Value>) -> AppResult<Vec<String>> {
    let choices = object["choices"]
        .as_array()
        .ok_or_else(|| AppError::ResponseFormat("'choices' must be an array".to_string()))?;

    if choices.len() != CHOICE_COUNT {
        return Err(AppError::ResponseFormat(format!(
            "'choices' must contain exactly {} entries, found {}",
            CHOICE_COUNT,
            choices.len()
        )));
    }

    choices
        .iter()
        .map(|choice| {
            choice.as_str().map(str::to_string).ok_or_else(|| {
                AppError::ResponseFormat("'choices' entries must be strings".to_string())
            })
        })
        .collect()
}

fn answer_field(object: &Map<String, Value>) -> AppResult<u8> {
    object["answer"]
        .as_u64()
        .filter(|answer| (1..=CHOICE_COUNT as u64).contains(answer))
        .map(|answer| answer as u8)
        .ok_or_else(|| {
            AppError::ResponseFormat(format!(
                "'answer' must be an integer between 1 and {}",
                CHOICE_COUNT
            ))
        })
}
