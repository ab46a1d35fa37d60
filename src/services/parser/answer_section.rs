use crate::{
    models::domain::{ParseWarning, QuestionRecord},
    services::parser::ParseOutcome,
};

const QUESTION_SEPARATOR: &str = "\n\n---\n\n";
const ANSWER_SEPARATOR: &str = "\n\n[해답]\n";
const CRITERION_PREFIX: &str = "출제 기준:";

/// Splits `---` separated segments into question and answer halves. No
/// structural checks beyond the two-part split.
pub fn parse(raw: &str) -> ParseOutcome {
    let normalized = raw.replace("\r\n", "\n");
    let mut outcome = ParseOutcome::default();

    let segments = normalized
        .split(QUESTION_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty());

    for (position, segment) in segments.enumerate() {
        let parts: Vec<&str> = segment.split(ANSWER_SEPARATOR).collect();
        if parts.len() != 2 {
            outcome.warnings.push(ParseWarning {
                segment: position + 1,
                reason: format!(
                    "expected question and answer separated by [해답], found {} part(s)",
                    parts.len()
                ),
            });
            continue;
        }

        let (criterion_label, question_body) = split_criterion(parts[0].trim());
        outcome.records.push(QuestionRecord {
            index: outcome.records.len() + 1,
            criterion_label,
            question_body,
            options: Vec::new(),
            answer_label: parts[1].trim().to_string(),
            explanation: None,
        });
    }

    outcome
}

fn split_criterion(question: &str) -> (String, String) {
    let (first_line, rest) = question.split_once('\n').unwrap_or((question, ""));

    match first_line.trim().strip_prefix(CRITERION_PREFIX) {
        Some(label) => (label.trim().to_string(), rest.trim().to_string()),
        None => (String::new(), question.to_string()),
    }
}
