use serde::{Deserialize, Serialize};

use crate::models::domain::ExamDomain;

#[derive(Debug, Serialize, Deserialize)]
pub struct DomainsResponse {
    pub domains: Vec<String>,
}

impl DomainsResponse {
    pub fn all() -> Self {
        Self {
            domains: ExamDomain::labels().into_iter().map(String::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domains_response_lists_every_domain() {
        let response = DomainsResponse::all();
        assert_eq!(response.domains.len(), ExamDomain::ALL.len());
        assert!(response.domains.iter().any(|d| d == "IT"));
    }
}
