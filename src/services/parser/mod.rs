//! Turns raw generation output into question records.
//!
//! Three grammars are supported and selected by configuration:
//!
//! - [`ParserVariant::DelimitedBlock`]: `=== 문제 N ===` segments with
//!   `문제:`/`보기:`/`정답:`/`해설:` fields and five numbered options.
//! - [`ParserVariant::AnswerSection`]: `---` separated segments, each split into
//!   question and answer at a `[해답]` marker.
//! - [`ParserVariant::StructuredJson`]: a single JSON object, optionally inside a
//!   code fence.
//!
//! The block grammars tolerate bad segments: each one is dropped with a
//! [`ParseWarning`] and the rest of the batch survives. The JSON grammar fails
//! the whole call.

pub mod answer_section;
pub mod delimited_block;
pub mod structured_json;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{ParseWarning, QuestionRecord},
};

pub const DEFAULT_OPTION_COUNT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParserVariant {
    DelimitedBlock,
    AnswerSection,
    StructuredJson,
}

impl ParserVariant {
    pub fn is_batch(&self) -> bool {
        !matches!(self, ParserVariant::StructuredJson)
    }
}

impl fmt::Display for ParserVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserVariant::DelimitedBlock => f.write_str("delimited_block"),
            ParserVariant::AnswerSection => f.write_str("answer_section"),
            ParserVariant::StructuredJson => f.write_str("structured_json"),
        }
    }
}

impl FromStr for ParserVariant {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "delimited" | "delimited_block" | "block" | "a" => Ok(ParserVariant::DelimitedBlock),
            "answer_section" | "answer" | "b" => Ok(ParserVariant::AnswerSection),
            "json" | "structured_json" | "c" => Ok(ParserVariant::StructuredJson),
            other => Err(AppError::ValidationError(format!(
                "Unknown parser variant '{}'",
                other
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserOptions {
    pub expected_options: usize,
    pub require_explanation: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            expected_options: DEFAULT_OPTION_COUNT,
            require_explanation: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub records: Vec<QuestionRecord>,
    pub warnings: Vec<ParseWarning>,
}

impl ParseOutcome {
    pub fn dropped(&self) -> usize {
        self.warnings.len()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ResponseParser {
    variant: ParserVariant,
    options: ParserOptions,
}

impl ResponseParser {
    pub fn new(variant: ParserVariant, options: ParserOptions) -> Self {
        Self { variant, options }
    }

    pub fn variant(&self) -> ParserVariant {
        self.variant
    }

    pub fn parse(&self, raw: &str) -> AppResult<ParseOutcome> {
        let outcome = match self.variant {
            ParserVariant::DelimitedBlock => delimited_block::parse(raw, &self.options),
            ParserVariant::AnswerSection => answer_section::parse(raw),
            ParserVariant::StructuredJson => {
                let question = structured_json::parse_structured_question(raw)?;
                ParseOutcome {
                    records: vec![question.into_record(1, String::new())],
                    warnings: Vec::new(),
                }
            }
        };

        for warning in &outcome.warnings {
            log::warn!(
                "Dropped segment {} ({}): {}",
                warning.segment,
                self.variant,
                warning.reason
            );
        }

        Ok(outcome)
    }
}
