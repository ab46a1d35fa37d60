use crate::{
    errors::{AppError, AppResult},
    models::domain::{ExamDomain, QuestionRecord},
};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const HEADER: [&str; 6] = ["번호", "출제기준", "문제", "보기", "정답", "해설"];

pub struct ExportService;

impl ExportService {
    /// Spreadsheet-friendly CSV: UTF-8 with BOM, one row per record.
    pub fn to_csv(records: &[QuestionRecord]) -> AppResult<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());
        writer.write_record(HEADER)?;

        for record in records {
            writer.write_record([
                record.index.to_string().as_str(),
                record.criterion_label.as_str(),
                record.question_body.as_str(),
                record.numbered_options().as_str(),
                record.answer_label.as_str(),
                record.explanation.as_deref().unwrap_or_default(),
            ])?;
        }

        writer
            .into_inner()
            .map_err(|e| AppError::InternalError(format!("CSV export error: {}", e)))
    }

    pub fn file_name(domain: ExamDomain) -> String {
        format!("{}_문제.csv", domain.label())
    }
}
