use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    models::domain::{ParseWarning, QuestionRecord},
    services::parser::{ParseOutcome, ParserOptions},
};

static SEGMENT_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^=+\s*문제\s*\d+\s*=+$").expect("SEGMENT_HEADER is a valid regex pattern")
});

static NUMBERED_OPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[1-5]\)\s*(.*)$").expect("NUMBERED_OPTION is a valid regex pattern")
});

const QUESTION_MARKER: &str = "문제:";
const OPTIONS_MARKER: &str = "보기:";
const ANSWER_MARKER: &str = "정답:";
const EXPLANATION_MARKER: &str = "해설:";
const CRITERION_MARKERS: [&str; 2] = ["출제 기준:", "출제기준:"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    None,
    Question,
    Options,
    Answer,
    Explanation,
}

#[derive(Debug, Default)]
struct SegmentFields {
    criterion: Option<String>,
    question: String,
    options: Vec<String>,
    answer: String,
    explanation: String,
    saw_marker: bool,
}

impl SegmentFields {
    fn scan<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut fields = SegmentFields::default();
        let mut section = Section::None;

        for raw_line in lines {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(rest) = CRITERION_MARKERS.iter().find_map(|m| line.strip_prefix(*m)) {
                fields.criterion = Some(rest.trim().to_string());
                fields.saw_marker = true;
                section = Section::None;
            } else if let Some(rest) = line.strip_prefix(QUESTION_MARKER) {
                section = Section::Question;
                fields.saw_marker = true;
                append(&mut fields.question, rest);
            } else if let Some(rest) = line.strip_prefix(OPTIONS_MARKER) {
                section = Section::Options;
                fields.saw_marker = true;
                if let Some(option) = numbered_option(rest.trim()) {
                    fields.options.push(option);
                }
            } else if let Some(rest) = line.strip_prefix(ANSWER_MARKER) {
                section = Section::Answer;
                fields.saw_marker = true;
                append(&mut fields.answer, rest);
            } else if let Some(rest) = line.strip_prefix(EXPLANATION_MARKER) {
                section = Section::Explanation;
                fields.saw_marker = true;
                append(&mut fields.explanation, rest);
            } else {
                match section {
                    Section::Question => append(&mut fields.question, line),
                    Section::Explanation => append(&mut fields.explanation, line),
                    Section::Options => {
                        if let Some(option) = numbered_option(line) {
                            fields.options.push(option);
                        }
                    }
                    Section::Answer | Section::None => {}
                }
            }
        }

        fields
    }

    fn problems(&self, options: &ParserOptions) -> Vec<String> {
        let mut problems = Vec::new();
        if self.question.is_empty() {
            problems.push("question body is empty".to_string());
        }
        if self.options.len() != options.expected_options {
            problems.push(format!(
                "expected {} options, found {}",
                options.expected_options,
                self.options.len()
            ));
        }
        if self.answer.is_empty() {
            problems.push("answer is empty".to_string());
        }
        if options.require_explanation && self.explanation.is_empty() {
            problems.push("explanation is empty".to_string());
        }
        problems
    }

    fn into_record(self, index: usize) -> QuestionRecord {
        QuestionRecord {
            index,
            criterion_label: self.criterion.unwrap_or_default(),
            question_body: self.question,
            options: self.options,
            answer_label: self.answer,
            explanation: (!self.explanation.is_empty()).then_some(self.explanation),
        }
    }
}

fn append(field: &mut String, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    if !field.is_empty() {
        field.push(' ');
    }
    field.push_str(text);
}

fn numbered_option(line: &str) -> Option<String> {
    NUMBERED_OPTION
        .captures(line)
        .map(|caps| caps[1].trim().to_string())
}

/// Splits on `=== 문제 N ===` header lines. Without any header the output is
/// split on blank lines instead.
fn segments(raw: &str) -> Vec<Vec<&str>> {
    let lines: Vec<&str> = raw.lines().collect();

    if lines.iter().any(|line| SEGMENT_HEADER.is_match(line.trim())) {
        let mut segments = Vec::new();
        let mut current: Option<Vec<&str>> = None;

        for line in lines {
            if SEGMENT_HEADER.is_match(line.trim()) {
                if let Some(segment) = current.take() {
                    segments.push(segment);
                }
                current = Some(Vec::new());
            } else if let Some(segment) = current.as_mut() {
                segment.push(line);
            }
        }
        if let Some(segment) = current {
            segments.push(segment);
        }
        return segments;
    }

    let mut segments = Vec::new();
    let mut current = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

pub fn parse(raw: &str, options: &ParserOptions) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for (position, lines) in segments(raw).into_iter().enumerate() {
        let fields = SegmentFields::scan(lines);
        if !fields.saw_marker {
            continue;
        }

        let problems = fields.problems(options);
        if problems.is_empty() {
            let index = outcome.records.len() + 1;
            outcome.records.push(fields.into_record(index));
        } else {
            outcome.warnings.push(ParseWarning {
                segment: position + 1,
                reason: problems.join("; "),
            });
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE: &str =
        "=== 문제 1 ===\n문제: X\n보기:\n1) a\n2) b\n3) c\n4) d\n5) e\n정답: 1\n해설: because";

    fn options() -> ParserOptions {
        ParserOptions::default()
    }

    #[test]
    fn parses_single_well_formed_segment() {
        let outcome = parse(SINGLE, &options());

        assert_eq!(outcome.records.len(), 1);
        assert!(outcome.warnings.is_empty());
        let record = &outcome.records[0];
        assert_eq!(record.index, 1);
        assert_eq!(record.question_body, "X");
        assert_eq!(record.options, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(record.answer_label, "1");
        assert_eq!(record.explanation.as_deref(), Some("because"));
    }

    #[test]
    fn field_order_does_not_matter() {
        let shuffled = "=== 문제 1 ===\n해설: because\n정답: 1\n보기:\n1) a\n2) b\n3) c\n4) d\n5) e\n문제: X";

        let expected = parse(SINGLE, &options());
        let actual = parse(shuffled, &options());

        assert_eq!(actual.records, expected.records);
    }

    #[test]
    fn fewer_than_five_options_drops_segment() {
        let raw = "=== 문제 1 ===\n문제: X\n보기:\n1) a\n2) b\n3) c\n4) d\n정답: 1\n해설: because";
        let outcome = parse(raw, &options());

        assert!(outcome.records.is_empty());
        assert_eq!(outcome.dropped(), 1);
        assert!(outcome.warnings[0].reason.contains("expected 5 options, found 4"));
    }

    #[test]
    fn one_bad_segment_does_not_abort_batch() {
        let raw = format!(
            "{}\n\n=== 문제 2 ===\n문제: Y\n보기:\n1) a\n정답: 2\n해설: n/a\n\n{}",
            SINGLE,
            SINGLE.replace("문제 1", "문제 3").replace("문제: X", "문제: Z")
        );

        let outcome = parse(&raw, &options());

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[1].question_body, "Z");
        assert_eq!(outcome.records[1].index, 2);
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].segment, 2);
    }

    #[test]
    fn multiline_question_and_explanation_are_joined() {
        let raw = "=== 문제 1 ===\n출제 기준: 시스템보안 > 접근제어 > 권한관리\n문제: 다음 중\n옳은 것은?\n보기: 1) a\n2) b\n3) c\n4) d\n5) e\n무시되는 줄\n정답: 3\n해설: 첫 줄\n둘째 줄";

        let outcome = parse(raw, &options());
        let record = &outcome.records[0];

        assert_eq!(record.criterion_label, "시스템보안 > 접근제어 > 권한관리");
        assert_eq!(record.question_body, "다음 중 옳은 것은?");
        assert_eq!(record.options.len(), 5);
        assert_eq!(record.explanation.as_deref(), Some("첫 줄 둘째 줄"));
    }

    #[test]
    fn explanation_optional_when_not_required() {
        let raw = "=== 문제 1 ===\n문제: X\n보기:\n1) a\n2) b\n3) c\n4) d\n5) e\n정답: 1";

        assert!(parse(raw, &options()).records.is_empty());

        let relaxed = ParserOptions {
            require_explanation: false,
            ..ParserOptions::default()
        };
        let outcome = parse(raw, &relaxed);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].explanation, None);
    }

    #[test]
    fn preamble_before_first_header_is_ignored() {
        let raw = format!("다음은 생성된 문제입니다.\n문제: 가짜\n\n{}", SINGLE);
        let outcome = parse(&raw, &options());

        assert_eq!(outcome.records.len(), 1);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn blank_line_blocks_without_headers() {
        let raw = "문제: X 보기: 없음\n보기:\n1) a\n2) b\n3) c\n4) d\n5) e\n정답: 1\n해설: because\n\n그 외 안내 문구";
        let outcome = parse(raw, &options());

        assert_eq!(outcome.records.len(), 1);
        assert!(outcome.warnings.is_empty());
    }
}
