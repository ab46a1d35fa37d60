pub mod exam_domain;
pub mod generation_request;
pub mod guide_criterion;
pub mod question_record;
pub use exam_domain::ExamDomain;
pub use generation_request::{Difficulty, GenerationRequest, OutputFormat};
pub use guide_criterion::GuideCriterion;
pub use question_record::{GenerationBatch, ParseWarning, QuestionRecord, StructuredQuestion};
