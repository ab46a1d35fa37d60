use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::{
    errors::AppResult,
    models::domain::{ExamDomain, GuideCriterion},
    repositories::GuideRepository,
};

/// Criteria text a prompt is grounded in. Only produced by a successful
/// criteria load or from extracted syllabus text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CriteriaBlock(String);

impl CriteriaBlock {
    /// Wraps extracted document text, keeping at most `limit` characters.
    pub fn from_source_text(text: &str, limit: usize) -> Self {
        Self(text.trim().chars().take(limit).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub struct GuideService {
    repository: Arc<dyn GuideRepository>,
    cache: RwLock<HashMap<ExamDomain, Arc<Vec<GuideCriterion>>>>,
}

impl GuideService {
    pub fn new(repository: Arc<dyn GuideRepository>) -> Self {
        Self {
            repository,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Loads a domain's criteria once; later calls are served from memory.
    pub async fn criteria(&self, domain: ExamDomain) -> AppResult<Arc<Vec<GuideCriterion>>> {
        if let Some(rows) = self.cache.read().await.get(&domain) {
            return Ok(Arc::clone(rows));
        }

        let rows = Arc::new(self.repository.load(domain).await?);
        let mut cache = self.cache.write().await;
        let entry = cache.entry(domain).or_insert_with(|| Arc::clone(&rows));
        Ok(Arc::clone(entry))
    }

    pub async fn criteria_block(&self, domain: ExamDomain) -> AppResult<CriteriaBlock> {
        let rows = self.criteria(domain).await?;
        Ok(CriteriaBlock(format_criteria(&rows)))
    }

    pub async fn criteria_list_block(&self, domain: ExamDomain) -> AppResult<CriteriaBlock> {
        let rows = self.criteria(domain).await?;
        Ok(CriteriaBlock(format_criteria_list(&rows)))
    }
}

/// Groups rows under `[main]` headers. A header is emitted whenever the main
/// category differs from the previous row, so a category that reappears later
/// is announced again.
pub fn format_criteria(rows: &[GuideCriterion]) -> String {
    let mut lines = Vec::with_capacity(rows.len() * 2);
    let mut current_main: Option<&str> = None;

    for row in rows {
        if current_main != Some(row.main_category.as_str()) {
            lines.push(format!("\n[{}]", row.main_category));
            current_main = Some(row.main_category.as_str());
        }
        lines.push(format!("  {}", row.label()));
    }

    lines.join("\n")
}

pub fn format_criteria_list(rows: &[GuideCriterion]) -> String {
    rows.iter()
        .map(|row| format!("- {}", row.label()))
        .collect::<Vec<_>>()
        .join("\n")
}
