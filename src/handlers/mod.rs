pub mod health_handler;
pub mod question_handler;

use actix_web::web;

pub use health_handler::health_check;
pub use question_handler::{
    create_questions, create_questions_from_pdf, generate_question, list_domains,
};

/// Largest accepted request body, sized for syllabus PDFs.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_UPLOAD_BYTES))
        .service(health_check)
        .service(list_domains)
        .service(generate_question)
        .service(create_questions)
        .service(create_questions_from_pdf);
}
