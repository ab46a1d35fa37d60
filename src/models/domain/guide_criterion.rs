use serde::{Deserialize, Serialize};

/// One row of a domain's criteria table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuideCriterion {
    pub main_category: String,
    pub sub_category: String,
    pub detail_category: String,
}

impl GuideCriterion {
    pub fn new(
        main_category: impl Into<String>,
        sub_category: impl Into<String>,
        detail_category: impl Into<String>,
    ) -> Self {
        Self {
            main_category: main_category.into(),
            sub_category: sub_category.into(),
            detail_category: detail_category.into(),
        }
    }

    /// `main > sub > detail`
    pub fn label(&self) -> String {
        format!(
            "{} > {} > {}",
            self.main_category, self.sub_category, self.detail_category
        )
    }
}
