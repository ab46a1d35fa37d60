use std::{env, time::Duration};

use secrecy::{ExposeSecret, SecretString};

use crate::{
    errors::{AppError, AppResult},
    services::parser::ParserVariant,
};

/// Models the generation client is allowed to call.
pub const SUPPORTED_MODELS: &[&str] = &["gpt-4o-mini", "gpt-4o", "gpt-4-turbo-preview", "gpt-4.1-mini"];

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_api_base: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub llm_max_tokens: u32,
    pub llm_timeout_secs: u64,
    pub guide_dir: String,
    pub parser_variant: ParserVariant,
    pub source_text_limit: usize,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY").unwrap_or_default()),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            llm_temperature: env::var("LLM_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.7),
            llm_max_tokens: env::var("LLM_MAX_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(2000),
            llm_timeout_secs: env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(60),
            guide_dir: env::var("GUIDE_DIR").unwrap_or_else(|_| "guides".to_string()),
            parser_variant: parser_variant_or_default(env::var("PARSER_VARIANT").ok()),
            source_text_limit: env::var("SOURCE_TEXT_LIMIT")
                .ok()
                .and_then(|l| l.parse().ok())
                .unwrap_or(5000),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Checks the settings the generation client depends on.
    pub fn validate(&self) -> AppResult<()> {
        if self.openai_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::ValidationError(
                "OPENAI_API_KEY is not set. Check your .env file.".to_string(),
            ));
        }

        if !SUPPORTED_MODELS.contains(&self.llm_model.as_str()) {
            return Err(AppError::ValidationError(format!(
                "Model '{}' is not supported. Supported models: {}",
                self.llm_model,
                SUPPORTED_MODELS.join(", ")
            )));
        }

        if !(0.0..=2.0).contains(&self.llm_temperature) {
            return Err(AppError::ValidationError(format!(
                "Temperature {} is outside 0.0..=2.0",
                self.llm_temperature
            )));
        }

        Ok(())
    }

    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }

    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("sk-test".to_string()),
            openai_api_base: "http://127.0.0.1:9/v1".to_string(),
            llm_model: "gpt-4o-mini".to_string(),
            llm_temperature: 0.7,
            llm_max_tokens: 2000,
            llm_timeout_secs: 5,
            guide_dir: "guides".to_string(),
            parser_variant: ParserVariant::DelimitedBlock,
            source_text_limit: 5000,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}

/// Unset or unrecognised values fall back to the delimited block grammar. The
/// unrecognised case is logged.
fn parser_variant_or_default(raw: Option<String>) -> ParserVariant {
    let Some(raw) = raw else {
        return ParserVariant::DelimitedBlock;
    };

    raw.parse().unwrap_or_else(|e| {
        log::warn!(
            "{}; PARSER_VARIANT falls back to {}",
            e,
            ParserVariant::DelimitedBlock
        );
        ParserVariant::DelimitedBlock
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.openai_api_base.is_empty());
        assert!(!config.guide_dir.is_empty());
        assert!(config.source_text_limit > 0);
    }

    #[test]
    fn test_test_config_is_valid() {
        let config = Config::test_config();

        assert!(config.validate().is_ok());
        assert_eq!(config.llm_temperature, 0.7);
        assert_eq!(config.llm_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_validate_rejects_missing_api_key() {
        let mut config = Config::test_config();
        config.openai_api_key = SecretString::from(String::new());

        assert!(matches!(config.validate(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_validate_rejects_unbounded_model() {
        let mut config = Config::test_config();
        config.llm_model = "some-local-model".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("some-local-model"));
    }

    #[test]
    fn test_parser_variant_setting() {
        assert_eq!(parser_variant_or_default(None), ParserVariant::DelimitedBlock);
        assert_eq!(
            parser_variant_or_default(Some("answer_section".to_string())),
            ParserVariant::AnswerSection
        );
        assert_eq!(
            parser_variant_or_default(Some("jsno".to_string())),
            ParserVariant::DelimitedBlock
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {
        let mut config = Config::test_config();
        config.llm_temperature = 3.5;

        assert!(config.validate().is_err());
    }
}
