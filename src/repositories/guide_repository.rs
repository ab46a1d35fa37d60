use std::path::PathBuf;

use async_trait::async_trait;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{ExamDomain, GuideCriterion},
};

/// Column count of a criteria row: `| main | sub | detail |` splits into a
/// blank cell, three values and a trailing blank cell.
const TABLE_COLUMNS: usize = 5;

#[async_trait]
pub trait GuideRepository: Send + Sync {
    async fn load(&self, domain: ExamDomain) -> AppResult<Vec<GuideCriterion>>;
}

/// Reads one pipe-delimited criteria table per domain from a directory.
pub struct FileGuideRepository {
    guide_dir: PathBuf,
}

impl FileGuideRepository {
    pub fn new(guide_dir: impl Into<PathBuf>) -> Self {
        Self {
            guide_dir: guide_dir.into(),
        }
    }

    pub fn path_for(&self, domain: ExamDomain) -> PathBuf {
        self.guide_dir.join(domain.guide_file())
    }
}

#[async_trait]
impl GuideRepository for FileGuideRepository {
    async fn load(&self, domain: ExamDomain) -> AppResult<Vec<GuideCriterion>> {
        let path = self.path_for(domain);
        log::info!("Loading criteria for '{}' from {}", domain, path.display());

        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            AppError::GuideParse(format!(
                "{} 도메인의 가이드 파일을 읽을 수 없습니다 ({}): {}",
                domain,
                path.display(),
                e
            ))
        })?;

        let criteria = parse_guide_table(&content)
            .map_err(|e| AppError::GuideParse(format!("{}: {}", path.display(), e)))?;

        log::info!("Loaded {} criteria rows for '{}'", criteria.len(), domain);
        Ok(criteria)
    }
}

/// Parses a markdown table into criteria rows. The first row is the header.
pub fn parse_guide_table(content: &str) -> Result<Vec<GuideCriterion>, String> {
    let mut criteria = Vec::new();
    let mut header_skipped = false;

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if !header_skipped {
            header_skipped = true;
            continue;
        }

        let cells: Vec<&str> = line.split('|').map(str::trim).collect();
        if cells.len() != TABLE_COLUMNS {
            return Err(format!(
                "line {}: expected {} columns, found {}",
                line_no + 1,
                TABLE_COLUMNS,
                cells.len()
            ));
        }

        if is_alignment_row(&cells) {
            continue;
        }

        criteria.push(GuideCriterion::new(cells[1], cells[2], cells[3]));
    }

    if criteria.is_empty() {
        return Err("table has no criteria rows".to_string());
    }

    Ok(criteria)
}

fn is_alignment_row(cells: &[&str]) -> bool {
    cells[1..cells.len() - 1]
        .iter()
        .all(|cell| !cell.is_empty() && cell.chars().all(|c| c == '-' || c == ':'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
| 주요항목 | 세부항목 | 세세항목 |
|---|:---:|---|
| 시스템보안 | 접근제어 |  권한관리 |
| 시스템보안 | 접근제어 | 계정관리 |

| 네트워크보안 | 방화벽 | 정책설정 |
";

    #[test]
    fn parses_rows_and_skips_header() {
        let rows = parse_guide_table(TABLE).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], GuideCriterion::new("시스템보안", "접근제어", "권한관리"));
        assert_eq!(rows[2].main_category, "네트워크보안");
    }

    #[test]
    fn rejects_row_with_wrong_column_count() {
        let table = "| a | b | c |\n| x | y |\n";
        let err = parse_guide_table(table).unwrap_err();
        assert!(err.contains("line 2"));
    }

    #[test]
    fn rejects_table_without_rows() {
        assert!(parse_guide_table("| a | b | c |\n|---|---|---|\n").is_err());
        assert!(parse_guide_table("").is_err());
    }

    #[test]
    fn keeps_duplicate_rows() {
        let table = "| h | h | h |\n| a | b | c |\n| a | b | c |\n";
        assert_eq!(parse_guide_table(table).unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn missing_file_is_parse_error() {
        let repository = FileGuideRepository::new("/nonexistent/guide/dir");
        let err = repository.load(ExamDomain::It).await.unwrap_err();
        assert!(matches!(err, AppError::GuideParse(_)));
    }
}
