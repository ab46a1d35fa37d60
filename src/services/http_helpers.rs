use actix_web::{
    http::header::{Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue},
    HttpResponse,
};

use crate::{
    errors::AppResult,
    models::domain::{ExamDomain, GenerationBatch, OutputFormat},
    services::ExportService,
};

const FALLBACK_FILE_NAME: &str = "questions.csv";

/// Creates a CSV download response. The UTF-8 file name travels as
/// `filename*` with an ASCII `filename` fallback.
pub fn csv_attachment(file_name: String, body: Vec<u8>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![
                DispositionParam::Filename(FALLBACK_FILE_NAME.to_string()),
                DispositionParam::FilenameExt(ExtendedValue {
                    charset: Charset::Ext("UTF-8".to_string()),
                    language_tag: None,
                    value: file_name.into_bytes(),
                }),
            ],
        })
        .body(body)
}

/// Renders a batch in the format the caller asked for
pub fn batch_response(
    batch: &GenerationBatch,
    domain: ExamDomain,
    format: OutputFormat,
) -> AppResult<HttpResponse> {
    match format {
        OutputFormat::Text => Ok(HttpResponse::Ok().json(batch)),
        OutputFormat::Csv => {
            let body = ExportService::to_csv(&batch.records)?;
            Ok(csv_attachment(ExportService::file_name(domain), body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};

    use crate::models::domain::QuestionRecord;

    fn batch() -> GenerationBatch {
        GenerationBatch::new(
            1,
            vec![QuestionRecord {
                index: 1,
                criterion_label: String::new(),
                question_body: "X".to_string(),
                options: vec!["a".to_string()],
                answer_label: "1".to_string(),
                explanation: None,
            }],
            Vec::new(),
        )
    }

    #[test]
    fn test_text_format_is_json() {
        let response = batch_response(&batch(), ExamDomain::It, OutputFormat::Text).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_csv_format_is_attachment() {
        let response = batch_response(&batch(), ExamDomain::It, OutputFormat::Csv).unwrap();

        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment"));
        assert!(disposition.contains("filename*=UTF-8''IT_"));
        assert!(response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/csv"));
    }
}
