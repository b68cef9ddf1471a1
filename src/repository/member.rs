//! Repository implementation for members and their team projections.

use diesel::dsl::{IntoBoxed, LeftJoin, sql};
use diesel::prelude::*;
use diesel::sql_types::{Integer, Nullable, Text};
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::{
    domain::{
        condition::MemberSearchCondition,
        member::{Member, NewMember},
        projection::{MemberDto, MemberTeamDto, UserDto},
        types::MemberId,
    },
    models::{
        member::{Member as DbMember, NewMember as DbNewMember},
        projection::{MemberDto as DbMemberDto, MemberTeam as DbMemberTeam, UserRow as DbUserRow},
    },
    pagination::{Page, PageRequest},
    repository::{
        DieselRepository, MemberReader, MemberWriter,
        errors::{RepositoryError, RepositoryResult},
        predicate::member_search_filter,
    },
    schema::{members, teams},
};

diesel::define_sql_function!(fn replace(text: Text, from: Text, to: Text) -> Text);
diesel::define_sql_function!(fn lower(text: Text) -> Text);

type MemberTeamQuery = IntoBoxed<'static, LeftJoin<members::table, teams::table>, Sqlite>;

/// `members LEFT JOIN teams` restricted by the present parts of `condition`.
fn filtered_member_teams(condition: &MemberSearchCondition) -> MemberTeamQuery {
    let query = members::table.left_join(teams::table).into_boxed();
    match member_search_filter(condition) {
        Some(filter) => query.filter(filter),
        None => query,
    }
}

fn load_member_teams(
    conn: &mut SqliteConnection,
    condition: &MemberSearchCondition,
    request: PageRequest,
) -> RepositoryResult<Vec<MemberTeamDto>> {
    let mut query = filtered_member_teams(condition)
        .select((
            members::id,
            members::username,
            members::age,
            teams::id.nullable(),
            teams::name.nullable(),
        ))
        .order(members::id.asc());

    if let Some((offset, limit)) = request.bounds() {
        query = query.offset(offset).limit(limit);
    }

    query
        .load::<DbMemberTeam>(conn)?
        .into_iter()
        .map(|row| MemberTeamDto::try_from(row).map_err(RepositoryError::from))
        .collect()
}

/// Counts the rows of the filtered join; no ordering, offset or limit.
fn count_member_teams(
    conn: &mut SqliteConnection,
    condition: &MemberSearchCondition,
) -> RepositoryResult<usize> {
    let total = filtered_member_teams(condition)
        .count()
        .get_result::<i64>(conn)?;
    usize::try_from(total)
        .map_err(|e| RepositoryError::Unexpected(format!("Invalid row count {total}: {e}")))
}

impl MemberReader for DieselRepository {
    fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>> {
        let mut conn = self.conn()?;
        let db_member = members::table
            .find(id.get())
            .first::<DbMember>(&mut conn)
            .optional()?;

        db_member
            .map(|m| Member::try_from(m).map_err(RepositoryError::from))
            .transpose()
    }

    fn search_members(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepositoryResult<Vec<MemberTeamDto>> {
        let mut conn = self.conn()?;
        load_member_teams(&mut conn, condition, PageRequest::unpaged())
    }

    fn search_members_page_simple(
        &self,
        condition: &MemberSearchCondition,
        request: PageRequest,
    ) -> RepositoryResult<Page<MemberTeamDto>> {
        let mut conn = self.conn()?;
        let content = load_member_teams(&mut conn, condition, request)?;
        let total = count_member_teams(&mut conn, condition)?;
        Ok(Page::new(content, request, total))
    }

    fn search_members_page_optimized(
        &self,
        condition: &MemberSearchCondition,
        request: PageRequest,
    ) -> RepositoryResult<Page<MemberTeamDto>> {
        let mut conn = self.conn()?;
        let content = load_member_teams(&mut conn, condition, request)?;
        Page::assemble(content, request, || count_member_teams(&mut conn, condition))
    }

    fn list_usernames(&self) -> RepositoryResult<Vec<String>> {
        let mut conn = self.conn()?;
        let usernames = members::table
            .select(members::username)
            .order(members::id.asc())
            .load::<String>(&mut conn)?;
        Ok(usernames)
    }

    fn list_username_ages(&self) -> RepositoryResult<Vec<(String, i32)>> {
        let mut conn = self.conn()?;
        let rows = members::table
            .select((members::username, members::age))
            .order(members::id.asc())
            .load::<(String, i32)>(&mut conn)?;
        Ok(rows)
    }

    fn list_member_dtos(&self) -> RepositoryResult<Vec<MemberDto>> {
        let mut conn = self.conn()?;
        let rows = members::table
            .select((members::username, members::age))
            .order(members::id.asc())
            .load::<DbMemberDto>(&mut conn)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn list_user_dtos(&self) -> RepositoryResult<Vec<UserDto>> {
        let mut conn = self.conn()?;
        let oldest = sql::<Nullable<Integer>>("(SELECT MAX(member_sub.age) FROM members AS member_sub)");
        let rows = members::table
            .select((members::username, oldest))
            .order(members::id.asc())
            .load::<DbUserRow>(&mut conn)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn list_usernames_replaced(&self, from: &str, to: &str) -> RepositoryResult<Vec<String>> {
        let mut conn = self.conn()?;
        let usernames = members::table
            .select(replace(members::username, from, to))
            .order(members::id.asc())
            .load::<String>(&mut conn)?;
        Ok(usernames)
    }

    fn list_lowercase_usernames(&self) -> RepositoryResult<Vec<String>> {
        let mut conn = self.conn()?;
        let usernames = members::table
            .filter(members::username.eq(lower(members::username)))
            .select(members::username)
            .order(members::id.asc())
            .load::<String>(&mut conn)?;
        Ok(usernames)
    }
}

impl MemberWriter for DieselRepository {
    fn create_members(&self, new_members: &[NewMember]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let insertables: Vec<DbNewMember> = new_members.iter().map(Into::into).collect();
        let affected = diesel::insert_into(members::table)
            .values(&insertables)
            .execute(&mut conn)?;
        Ok(affected)
    }

    fn rename_members_younger_than(&self, age: i32, username: &str) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let affected = diesel::update(members::table.filter(members::age.lt(age)))
            .set(members::username.eq(username))
            .execute(&mut conn)?;
        log::info!("Renamed {affected} members younger than {age}");
        Ok(affected)
    }

    fn add_to_member_ages(&self, delta: i32) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        // Rows that would drop below zero are left as they are.
        let shifted = members::table.filter(members::age.ge(delta.saturating_neg()));
        let affected = diesel::update(shifted)
            .set(members::age.eq(members::age + delta))
            .execute(&mut conn)?;
        log::info!("Shifted the age of {affected} members by {delta}");
        Ok(affected)
    }

    fn delete_members_older_than(&self, age: i32) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let affected = diesel::delete(members::table.filter(members::age.gt(age)))
            .execute(&mut conn)?;
        log::info!("Deleted {affected} members older than {age}");
        Ok(affected)
    }
}
