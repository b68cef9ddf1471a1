use serde::Deserialize;
use validator::Validate;

use crate::domain::condition::MemberSearchCondition;
use crate::pagination::PageRequest;

fn default_optimized_count() -> bool {
    true
}

/// Member search parameters as received in a query string.
#[derive(Debug, Deserialize, Validate)]
pub struct MemberSearchForm {
    pub username: Option<String>,
    pub team_name: Option<String>,
    #[validate(range(min = 0))]
    pub age_goe: Option<i32>,
    #[validate(range(min = 0))]
    pub age_loe: Option<i32>,
    /// Zero-based page index.
    #[serde(default)]
    pub page: usize,
    #[validate(range(min = 1, max = 2000))]
    pub size: Option<usize>,
    /// Skip the count query when the page alone determines the total.
    #[serde(default = "default_optimized_count")]
    pub optimized_count: bool,
}

impl Default for MemberSearchForm {
    fn default() -> Self {
        Self {
            username: None,
            team_name: None,
            age_goe: None,
            age_loe: None,
            page: 0,
            size: None,
            optimized_count: default_optimized_count(),
        }
    }
}

impl MemberSearchForm {
    pub fn to_condition(&self) -> MemberSearchCondition {
        MemberSearchCondition {
            username: self.username.clone(),
            team_name: self.team_name.clone(),
            age_goe: self.age_goe,
            age_loe: self.age_loe,
        }
    }

    pub fn to_page_request(&self, default_size: usize) -> PageRequest {
        PageRequest::of(self.page, self.size.unwrap_or(default_size))
    }
}
