use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Question domain. Each domain is backed by its own criteria table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamDomain {
    #[serde(rename = "금융보안 일반 지식")]
    General,
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "법률")]
    Law,
    #[serde(rename = "동향")]
    Trend,
}

impl ExamDomain {
    pub const ALL: [ExamDomain; 4] = [
        ExamDomain::General,
        ExamDomain::It,
        ExamDomain::Law,
        ExamDomain::Trend,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExamDomain::General => "금융보안 일반 지식",
            ExamDomain::It => "IT",
            ExamDomain::Law => "법률",
            ExamDomain::Trend => "동향",
        }
    }

    pub fn guide_file(&self) -> &'static str {
        match self {
            ExamDomain::General => "guide_general.md",
            ExamDomain::It => "guide_it.md",
            ExamDomain::Law => "guide_law.md",
            ExamDomain::Trend => "guide_trend.md",
        }
    }

    /// Field of expertise named in the single-question system prompt.
    pub fn expert_description(&self) -> &'static str {
        match self {
            ExamDomain::General => "금융보안 일반지식",
            ExamDomain::It => "IT 정보보안",
            ExamDomain::Law => "금융보안 관련 법령 및 고시, 가이드라인",
            ExamDomain::Trend => "금융보안 동향",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|d| d.label()).collect()
    }
}

impl fmt::Display for ExamDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExamDomain {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if let Some(domain) = Self::ALL.iter().find(|d| d.label() == trimmed) {
            return Ok(*domain);
        }

        match trimmed.to_lowercase().as_str() {
            "general" => Ok(ExamDomain::General),
            "it" => Ok(ExamDomain::It),
            "law" => Ok(ExamDomain::Law),
            "trend" => Ok(ExamDomain::Trend),
            _ => Err(AppError::GuideNotFound(format!(
                "유효하지 않은 도메인입니다: '{}'. 가능한 도메인: {:?}",
                trimmed,
                Self::labels()
            ))),
        }
    }
}
