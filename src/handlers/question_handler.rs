use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::GenerationRequest,
        dto::{
            request::{GenerateQuestionRequest, GenerationRequestDto},
            response::DomainsResponse,
        },
    },
    services::http_helpers::batch_response,
};

#[get("/domains")]
async fn list_domains() -> HttpResponse {
    HttpResponse::Ok().json(DomainsResponse::all())
}

#[post("/generate")]
async fn generate_question(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let (domain, difficulty) = request.parse()?;

    let question = state
        .question_service
        .generate_single(domain, difficulty)
        .await?;
    Ok(HttpResponse::Ok().json(question))
}

#[post("/api/questions")]
async fn create_questions(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerationRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = GenerationRequest::try_from(request.into_inner())?;

    let batch = state.question_service.generate_batch(&request).await?;
    batch_response(&batch, request.domain(), request.output_format())
}

/// Settings arrive as query parameters, the PDF as the raw body.
#[post("/api/questions/pdf")]
async fn create_questions_from_pdf(
    state: web::Data<Arc<AppState>>,
    query: web::Query<GenerationRequestDto>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request = GenerationRequest::try_from(query.into_inner())?;

    let extractor = state.source_extractor;
    let source_text = web::block(move || extractor.extract(&body))
        .await
        .map_err(|e| AppError::InternalError(format!("Extraction task failed: {}", e)))??;

    let batch = state
        .question_service
        .generate_batch_from_source(&request, &source_text)
        .await?;
    batch_response(&batch, request.domain(), request.output_format())
}
