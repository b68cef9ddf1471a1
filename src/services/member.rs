use validator::Validate;

use crate::domain::projection::MemberTeamDto;
use crate::dto::member::MemberPageResponse;
use crate::forms::member_search::MemberSearchForm;
use crate::repository::MemberReader;
use crate::services::{ServiceError, ServiceResult};

/// Parses an `application/x-www-form-urlencoded` query into a search form.
pub fn parse_search_form(query: &str) -> ServiceResult<MemberSearchForm> {
    serde_html_form::from_str(query.trim_start_matches('?')).map_err(|err| {
        log::error!("Failed to parse search query: {err}");
        ServiceError::Form(format!("Malformed search query: {err}"))
    })
}

fn validate_form(form: &MemberSearchForm) -> ServiceResult<()> {
    form.validate().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::Form(err.to_string())
    })
}

/// Loads one page of members matching the form.
///
/// `form.optimized_count` selects the repository call that may skip the
/// count query; both report the same total.
pub fn search_members_page<R>(
    repo: &R,
    form: MemberSearchForm,
    default_page_size: usize,
) -> ServiceResult<MemberPageResponse>
where
    R: MemberReader + ?Sized,
{
    validate_form(&form)?;

    let condition = form.to_condition();
    let request = form.to_page_request(default_page_size);

    let page = if form.optimized_count {
        repo.search_members_page_optimized(&condition, request)
    } else {
        repo.search_members_page_simple(&condition, request)
    }
    .map_err(|err| {
        log::error!("Failed to search members: {err}");
        ServiceError::from(err)
    })?;

    Ok(page.into())
}

/// Loads every member matching the form, ignoring its paging fields.
pub fn search_members<R>(repo: &R, form: MemberSearchForm) -> ServiceResult<Vec<MemberTeamDto>>
where
    R: MemberReader + ?Sized,
{
    validate_form(&form)?;

    repo.search_members(&form.to_condition()).map_err(|err| {
        log::error!("Failed to search members: {err}");
        ServiceError::from(err)
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::condition::MemberSearchCondition;
    use crate::domain::types::{MemberId, TeamId};
    use crate::pagination::{Page, PageRequest};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn row(id: i32, age: i32) -> MemberTeamDto {
        MemberTeamDto {
            member_id: MemberId::new(id).expect("valid member id"),
            username: format!("member{id}"),
            age,
            team_id: Some(TeamId::new(1).expect("valid team id")),
            team_name: Some("teamA".to_string()),
        }
    }

    #[test]
    fn optimized_search_is_the_default() {
        let mut repo = MockRepository::new();
        let expected = MemberSearchCondition::new().age_goe(20).age_loe(30);
        repo.expect_search_members_page_simple().times(0);
        repo.expect_search_members_page_optimized()
            .with(eq(expected), eq(PageRequest::of(0, 10)))
            .times(1)
            .returning(|_, request| Ok(Page::new(vec![row(2, 20), row(3, 30)], request, 2)));

        let form = parse_search_form("age_goe=20&age_loe=30&size=10").unwrap();
        let response = search_members_page(&repo, form, 20).unwrap();

        assert_eq!(response.total, 2);
        assert_eq!(response.members.len(), 2);
        assert_eq!(response.total_pages, 1);
        assert!(!response.has_next);
    }

    #[test]
    fn simple_search_when_optimization_is_disabled() {
        let mut repo = MockRepository::new();
        repo.expect_search_members_page_optimized().times(0);
        repo.expect_search_members_page_simple()
            .times(1)
            .returning(|_, request| Ok(Page::new(vec![row(4, 40)], request, 4)));

        let form = parse_search_form("?page=3&size=1&optimized_count=false").unwrap();
        let response = search_members_page(&repo, form, 20).unwrap();

        assert_eq!(response.total, 4);
        assert_eq!(response.page, 3);
        assert_eq!(response.total_pages, 4);
        assert!(!response.has_next);
    }

    #[test]
    fn page_index_at_the_numeric_limit_is_an_empty_page() {
        let mut repo = MockRepository::new();
        repo.expect_search_members_page_optimized()
            .times(1)
            .returning(|_, request| Ok(Page::new(Vec::new(), request, 4)));

        let form = parse_search_form(&format!("page={}&size=10", usize::MAX)).unwrap();
        let response = search_members_page(&repo, form, 20).unwrap();

        assert!(response.members.is_empty());
        assert_eq!(response.total, 4);
        assert!(!response.has_next);
    }

    #[test]
    fn invalid_form_never_reaches_the_repository() {
        let mut repo = MockRepository::new();
        repo.expect_search_members_page_optimized().times(0);
        repo.expect_search_members_page_simple().times(0);

        let form = parse_search_form("size=0").unwrap();
        let result = search_members_page(&repo, form, 20);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn malformed_query_is_a_form_error() {
        assert!(matches!(
            parse_search_form("age_goe=old"),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn repository_errors_are_passed_through() {
        let mut repo = MockRepository::new();
        repo.expect_search_members()
            .times(1)
            .returning(|_| Err(RepositoryError::ConnectionError("pool exhausted".into())));

        let result = search_members(&repo, MemberSearchForm::default());

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::ConnectionError(_)))
        ));
    }
}
