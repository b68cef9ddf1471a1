//! Row shapes loaded from projected (`select(...)`) queries.

use diesel::prelude::*;

use crate::domain::projection::{MemberDto as DomainMemberDto, MemberTeamDto, UserDto};
use crate::domain::types::{MemberId, TeamId, TypeConstraintError};

/// One row of `members LEFT JOIN teams`; team columns are null for members
/// without a team.
#[derive(Debug, Clone, Queryable)]
pub struct MemberTeam {
    pub member_id: i32,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, Queryable)]
pub struct MemberDto {
    pub username: String,
    pub age: i32,
}

#[derive(Debug, Clone, Queryable)]
pub struct UserRow {
    pub name: String,
    pub age: Option<i32>,
}

impl TryFrom<MemberTeam> for MemberTeamDto {
    type Error = TypeConstraintError;

    fn try_from(row: MemberTeam) -> Result<Self, Self::Error> {
        Ok(Self {
            member_id: MemberId::try_from(row.member_id)?,
            username: row.username,
            age: row.age,
            team_id: row.team_id.map(TeamId::try_from).transpose()?,
            team_name: row.team_name,
        })
    }
}

impl From<MemberDto> for DomainMemberDto {
    fn from(row: MemberDto) -> Self {
        Self {
            username: row.username,
            age: row.age,
        }
    }
}

impl From<UserRow> for UserDto {
    fn from(row: UserRow) -> Self {
        Self {
            name: row.name,
            age: row.age,
        }
    }
}
