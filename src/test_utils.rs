#[cfg(test)]
pub mod fixtures {
    use std::{collections::HashMap, sync::Arc};

    use async_trait::async_trait;

    use crate::{
        app_state::AppState,
        config::Config,
        errors::{AppError, AppResult},
        models::domain::{ExamDomain, GuideCriterion},
        repositories::GuideRepository,
        services::GenerationClient,
    };

    /// A well-formed two-question delimited block response
    pub const BLOCK_OUTPUT: &str = "=== 문제 1 ===\n출제 기준: 시스템보안 > 접근제어 > 권한관리\n문제: 접근권한 부여 시 적용해야 할 원칙은?\n보기:\n1) 최소 권한\n2) 최대 권한\n3) 공유 계정\n4) 기본 비밀번호\n5) 무제한 세션\n정답: 1\n해설: 필요한 권한만 부여한다.\n\n=== 문제 2 ===\n출제 기준: 시스템보안 > 접근제어 > 권한관리\n문제: 권한 검토 주기로 적절한 것은?\n보기:\n1) 검토하지 않음\n2) 정기적으로\n3) 퇴사 후 1년\n4) 사고 발생 시에만\n5) 감사 직전\n정답: 2\n해설: 정기 검토가 필요하다.";

    pub const JSON_OUTPUT: &str = "```json\n{\"question\":\"다음 중 접근통제 모델이 아닌 것은?\",\"choices\":[\"DAC\",\"MAC\",\"RBAC\",\"TCP\"],\"answer\":4,\"explanation\":\"TCP는 전송 프로토콜이다.\"}\n```";

    /// Creates the criteria row used across tests
    pub fn access_control_criterion() -> GuideCriterion {
        GuideCriterion::new("시스템보안", "접근제어", "권한관리")
    }

    pub struct InMemoryGuideRepository {
        tables: HashMap<ExamDomain, Vec<GuideCriterion>>,
    }

    impl InMemoryGuideRepository {
        /// Every domain gets the same single criterion
        pub fn uniform() -> Self {
            Self {
                tables: ExamDomain::ALL
                    .iter()
                    .map(|domain| (*domain, vec![access_control_criterion()]))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl GuideRepository for InMemoryGuideRepository {
        async fn load(&self, domain: ExamDomain) -> AppResult<Vec<GuideCriterion>> {
            self.tables
                .get(&domain)
                .cloned()
                .ok_or_else(|| AppError::GuideParse(format!("{} has no table", domain)))
        }
    }

    /// Answers every prompt with the same text, or the same error
    pub struct CannedGenerationClient(pub AppResult<String>);

    #[async_trait]
    impl GenerationClient for CannedGenerationClient {
        async fn complete<'a>(&self, _prompt: &str, _system: Option<&'a str>) -> AppResult<String> {
            self.0.clone()
        }
    }

    pub fn test_state(reply: AppResult<String>) -> Arc<AppState> {
        Arc::new(AppState::with_parts(
            Config::test_config(),
            Arc::new(InMemoryGuideRepository::uniform()),
            Arc::new(CannedGenerationClient(reply)),
        ))
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::{models::domain::ExamDomain, repositories::GuideRepository};

    #[actix_web::test]
    async fn test_in_memory_repository_serves_every_domain() {
        let repository = InMemoryGuideRepository::uniform();

        for domain in ExamDomain::ALL {
            let rows = repository.load(domain).await.unwrap();
            assert_eq!(rows, vec![access_control_criterion()]);
        }
    }
}
