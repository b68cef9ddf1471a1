//! Read-only row shapes produced by projecting query results.
//!
//! None of these carry identity beyond the query that produced them.

use serde::Serialize;

use crate::domain::types::{MemberId, TeamId};

/// A member row joined with its (optional) team.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct MemberTeamDto {
    pub member_id: MemberId,
    pub username: String,
    pub age: i32,
    pub team_id: Option<TeamId>,
    pub team_name: Option<String>,
}

/// Username and age of a single member.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct MemberDto {
    pub username: String,
    pub age: i32,
}

/// Member username exposed as `name`, paired with an age computed by the query.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct UserDto {
    pub name: String,
    pub age: Option<i32>,
}
