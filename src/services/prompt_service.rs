use crate::{
    constants::{
        prompts::{
            ANSWER_SECTION_EXPLANATION_LINE, ANSWER_SECTION_FORMAT, ANSWER_SECTION_SEPARATORS,
            BATCH_CLOSING_RULES, DELIMITED_BLOCK_EXPLANATION_LINE, DELIMITED_BLOCK_FORMAT,
            FILL_IN_THE_BLANK_INSTRUCTION, SINGLE_QUESTION_JSON_EXAMPLE,
            SINGLE_QUESTION_REQUIREMENTS,
        },
        question_types::{question_type_description, FILL_IN_THE_BLANK},
    },
    errors::{AppError, AppResult},
    models::domain::{Difficulty, ExamDomain, GenerationRequest, StructuredQuestion},
    services::{guide_service::CriteriaBlock, parser::ParserVariant},
};

/// A fully assembled user prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptText(String);

impl PromptText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PromptBuilder {
    variant: ParserVariant,
}

impl PromptBuilder {
    /// `variant` selects the output grammar the prompt asks for. The JSON
    /// grammar has no batch form, so it asks for delimited blocks.
    pub fn new(variant: ParserVariant) -> Self {
        let variant = if variant.is_batch() {
            variant
        } else {
            ParserVariant::DelimitedBlock
        };
        Self { variant }
    }

    pub fn variant(&self) -> ParserVariant {
        self.variant
    }

    pub fn build(
        &self,
        request: &GenerationRequest,
        criteria: &CriteriaBlock,
    ) -> AppResult<PromptText> {
        let question_type = request.question_type();
        let description = question_type_description(question_type)
            .ok_or_else(|| AppError::UnknownQuestionType(question_type.to_string()))?;
        let domain = request.domain().label();

        let mut prompt = format!(
            "\n다음 조건에 맞는 금융보안 문제를 생성해주세요:\n\n\
             1. 문제 유형: {question_type}\n   - 유형 설명: {description}\n\
             2. 도메인: {domain}\n\
             3. 난이도: {difficulty}\n\
             4. 문제 수: {count}개\n\
             5. 출력 형식: {output_format}\n\n\
             선택한 도메인({domain})의 출제기준은 다음과 같습니다. \
             아래 내용을 참고하여 문제를 생성해주세요:\n{criteria}\n\n",
            difficulty = request.difficulty().label(),
            count = request.count(),
            output_format = request.output_format(),
            criteria = criteria.as_str(),
        );

        if question_type == FILL_IN_THE_BLANK {
            prompt.push_str(FILL_IN_THE_BLANK_INSTRUCTION);
            prompt.push('\n');
        }

        match self.variant {
            ParserVariant::AnswerSection => {
                prompt.push_str(ANSWER_SECTION_FORMAT);
                prompt.push('\n');
                if request.include_explanation() {
                    prompt.push_str(ANSWER_SECTION_EXPLANATION_LINE);
                    prompt.push('\n');
                }
                prompt.push('\n');
                prompt.push_str(ANSWER_SECTION_SEPARATORS);
                prompt.push('\n');
            }
            ParserVariant::DelimitedBlock | ParserVariant::StructuredJson => {
                prompt.push_str(DELIMITED_BLOCK_FORMAT);
                prompt.push('\n');
                if request.include_explanation() {
                    prompt.push_str(DELIMITED_BLOCK_EXPLANATION_LINE);
                    prompt.push('\n');
                }
                prompt.push('\n');
            }
        }

        prompt.push_str(BATCH_CLOSING_RULES);
        prompt.push('\n');

        Ok(PromptText(prompt))
    }

    /// Builds the `(system, user)` pair for a single strict-JSON question.
    pub fn build_single(
        &self,
        domain: ExamDomain,
        difficulty: Difficulty,
        criteria: &CriteriaBlock,
    ) -> AppResult<(String, String)> {
        let schema = serde_json::to_string_pretty(&schemars::schema_for!(StructuredQuestion))
            .map_err(|e| AppError::InternalError(format!("Failed to render schema: {}", e)))?;

        let system = format!(
            "당신은 {} 분야의 전문가입니다.\n\
             주어진 출제기준과 난이도에 맞춰 객관식 문제를 생성해주세요.\n\
             답변은 다음 JSON 형식으로 작성해주세요:\n{}\n\n\
             응답은 아래 JSON Schema를 만족해야 합니다:\n{}",
            domain.expert_description(),
            SINGLE_QUESTION_JSON_EXAMPLE,
            schema
        );

        let user = format!(
            "다음 출제기준에 따라 {}난이도의 객관식 문제를 1개 생성해주세요:\n\n\
             출제기준:\n{}\n\n{}",
            difficulty.grade(),
            criteria.as_str(),
            SINGLE_QUESTION_REQUIREMENTS
        );

        Ok((system, user))
    }
}
