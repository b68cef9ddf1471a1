//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::condition::MemberSearchCondition;
use crate::domain::member::{Member, NewMember};
use crate::domain::projection::{MemberDto, MemberTeamDto, UserDto};
use crate::domain::team::{NewTeam, Team};
use crate::domain::types::{MemberId, TeamId};
use crate::pagination::{Page, PageRequest};
use crate::repository::errors::RepositoryResult;
use crate::repository::{MemberReader, MemberWriter, TeamReader, TeamWriter};

mock! {
    pub Repository {}

    impl MemberReader for Repository {
        fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>>;
        fn search_members(
            &self,
            condition: &MemberSearchCondition,
        ) -> RepositoryResult<Vec<MemberTeamDto>>;
        fn search_members_page_simple(
            &self,
            condition: &MemberSearchCondition,
            request: PageRequest,
        ) -> RepositoryResult<Page<MemberTeamDto>>;
        fn search_members_page_optimized(
            &self,
            condition: &MemberSearchCondition,
            request: PageRequest,
        ) -> RepositoryResult<Page<MemberTeamDto>>;
        fn list_usernames(&self) -> RepositoryResult<Vec<String>>;
        fn list_username_ages(&self) -> RepositoryResult<Vec<(String, i32)>>;
        fn list_member_dtos(&self) -> RepositoryResult<Vec<MemberDto>>;
        fn list_user_dtos(&self) -> RepositoryResult<Vec<UserDto>>;
        fn list_usernames_replaced(&self, from: &str, to: &str) -> RepositoryResult<Vec<String>>;
        fn list_lowercase_usernames(&self) -> RepositoryResult<Vec<String>>;
    }

    impl MemberWriter for Repository {
        fn create_members(&self, new_members: &[NewMember]) -> RepositoryResult<usize>;
        fn rename_members_younger_than(&self, age: i32, username: &str) -> RepositoryResult<usize>;
        fn add_to_member_ages(&self, delta: i32) -> RepositoryResult<usize>;
        fn delete_members_older_than(&self, age: i32) -> RepositoryResult<usize>;
    }

    impl TeamReader for Repository {
        fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>>;
        fn list_teams(&self) -> RepositoryResult<Vec<Team>>;
    }

    impl TeamWriter for Repository {
        fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
    }
}
