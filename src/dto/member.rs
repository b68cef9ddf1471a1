//! Response payloads produced by [`crate::services::member`].

use serde::Serialize;

use crate::domain::projection::MemberTeamDto;
use crate::pagination::Page;

/// One page of member search results with navigation metadata.
#[derive(Debug, Serialize)]
pub struct MemberPageResponse {
    pub members: Vec<MemberTeamDto>,
    /// Total number of members matching the filter.
    pub total: usize,
    pub page: usize,
    pub size: Option<usize>,
    pub total_pages: usize,
    pub has_next: bool,
}

impl From<Page<MemberTeamDto>> for MemberPageResponse {
    fn from(page: Page<MemberTeamDto>) -> Self {
        let total_pages = page.total_pages();
        let has_next = page.has_next();
        Self {
            total: page.total,
            page: page.request.page_number(),
            size: page.request.size(),
            total_pages,
            has_next,
            members: page.content,
        }
    }
}
