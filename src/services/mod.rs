pub mod export_service;
pub mod guide_service;
pub mod http_helpers;
pub mod model_service;
pub mod parser;
pub mod prompt_service;
pub mod question_service;
pub mod source_extractor;

pub use export_service::ExportService;
pub use guide_service::{CriteriaBlock, GuideService};
pub use model_service::{GenerationClient, OpenAiGenerationClient};
pub use parser::{ParserVariant, ResponseParser};
pub use prompt_service::{PromptBuilder, PromptText};
pub use question_service::QuestionService;
pub use source_extractor::SourceExtractor;
