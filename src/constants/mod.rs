pub mod prompts;
pub mod question_types;
