//! Storage seam: reader/writer traits and their Diesel implementation.
//!
//! Services depend on the traits only, so tests can swap in
//! [`mock::MockRepository`] for the SQLite-backed [`DieselRepository`].

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::condition::MemberSearchCondition;
use crate::domain::member::{Member, NewMember};
use crate::domain::projection::{MemberDto, MemberTeamDto, UserDto};
use crate::domain::team::{NewTeam, Team};
use crate::domain::types::{MemberId, TeamId};
use crate::pagination::{Page, PageRequest};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod member;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod predicate;
pub mod team;

/// Diesel-backed repository holding a shared SQLite connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait MemberReader {
    fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>>;
    /// All members joined with their team that satisfy `condition`, ordered by member id.
    fn search_members(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepositoryResult<Vec<MemberTeamDto>>;
    /// One page of [`Self::search_members`]; always runs the count query.
    fn search_members_page_simple(
        &self,
        condition: &MemberSearchCondition,
        request: PageRequest,
    ) -> RepositoryResult<Page<MemberTeamDto>>;
    /// One page of [`Self::search_members`]; skips the count query when the
    /// total follows from the page itself.
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

pub trait MemberWriter {
    fn create_members(&self, new_members: &[NewMember]) -> RepositoryResult<usize>;
    /// Sets `username` on every member strictly younger than `age`.
    fn rename_members_younger_than(&self, age: i32, username: &str) -> RepositoryResult<usize>;
    fn add_to_member_ages(&self, delta: i32) -> RepositoryResult<usize>;
    /// Removes every member strictly older than `age`.
    fn delete_members_older_than(&self, age: i32) -> RepositoryResult<usize>;
}

pub trait TeamReader {
    fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>>;
    fn list_teams(&self) -> RepositoryResult<Vec<Team>>;
}

pub trait TeamWriter {
    fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
}
