//! Optional filter predicates over `members LEFT JOIN teams`.
//!
//! Each builder maps one optional input to an optional predicate;
//! [`member_search_filter`] folds the present ones together with `AND`.

use diesel::dsl::LeftJoinQuerySource;
use diesel::expression::BoxableExpression;
use diesel::prelude::*;
use diesel::sql_types::Bool;
use diesel::sqlite::Sqlite;

use crate::domain::condition::MemberSearchCondition;
use crate::schema::{members, teams};

/// Query source shared by the content and count queries.
pub type MemberTeamSource = LeftJoinQuerySource<members::table, teams::table>;

/// A boxed boolean expression valid on [`MemberTeamSource`].
pub type MemberPredicate = Box<dyn BoxableExpression<MemberTeamSource, Sqlite, SqlType = Bool>>;

pub fn username_eq(username: Option<&str>) -> Option<MemberPredicate> {
    username.map(|u| Box::new(members::username.eq(u.to_owned())) as MemberPredicate)
}

/// `teams.name` is nullable on the left join; a member without a team never matches.
pub fn team_name_eq(team_name: Option<&str>) -> Option<MemberPredicate> {
    team_name.map(|t| {
        Box::new(teams::name.nullable().eq(t.to_owned()).assume_not_null()) as MemberPredicate
    })
}

pub fn age_goe(age: Option<i32>) -> Option<MemberPredicate> {
    age.map(|a| Box::new(members::age.ge(a)) as MemberPredicate)
}

pub fn age_loe(age: Option<i32>) -> Option<MemberPredicate> {
    age.map(|a| Box::new(members::age.le(a)) as MemberPredicate)
}

/// Predicates for every present field, in a fixed order.
pub fn member_search_predicates(condition: &MemberSearchCondition) -> Vec<MemberPredicate> {
    [
        username_eq(condition.username_filter()),
        team_name_eq(condition.team_name_filter()),
        age_goe(condition.age_goe),
        age_loe(condition.age_loe),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Conjunction of the present predicates; `None` matches every row.
pub fn member_search_filter(condition: &MemberSearchCondition) -> Option<MemberPredicate> {
    member_search_predicates(condition)
        .into_iter()
        .reduce(|acc, next| Box::new(acc.and(next)))
}

#[cfg(test)]
mod tests {
    use diesel::debug_query;

    use super::*;

    fn where_sql(condition: &MemberSearchCondition) -> String {
        let query = members::table.left_join(teams::table).into_boxed::<Sqlite>();
        let query = match member_search_filter(condition) {
            Some(filter) => query.filter(filter),
            None => query,
        };
        debug_query::<Sqlite, _>(&query.select(members::id)).to_string()
    }

    #[test]
    fn empty_condition_has_no_predicates() {
        let condition = MemberSearchCondition::new();
        assert!(member_search_predicates(&condition).is_empty());
        assert!(member_search_filter(&condition).is_none());
        assert!(!where_sql(&condition).contains("WHERE"));
    }

    #[test]
    fn blank_text_is_skipped() {
        let condition = MemberSearchCondition::new().username(" ").team_name("");
        assert!(member_search_predicates(&condition).is_empty());
    }

    #[test]
    fn present_fields_produce_one_predicate_each() {
        let condition = MemberSearchCondition::new()
            .username("member1")
            .age_goe(10)
            .age_loe(40);
        assert_eq!(member_search_predicates(&condition).len(), 3);
    }

    #[test]
    fn team_name_compares_the_joined_column() {
        let sql = where_sql(&MemberSearchCondition::new().team_name("teamA"));
        assert!(sql.contains("LEFT OUTER JOIN `teams`"));
        assert!(sql.contains("WHERE"));
        assert!(sql.contains("`teams`.`name` = ?"));
        assert!(sql.contains("\"teamA\""));
    }

    #[test]
    fn predicates_are_combined_in_field_order() {
        let condition = MemberSearchCondition::new()
            .age_loe(30)
            .team_name("teamB")
            .username("member3")
            .age_goe(20);
        let sql = where_sql(&condition);

        let username = sql.find("`members`.`username` =").expect("username predicate");
        let team = sql.find("`teams`.`name` =").expect("team predicate");
        let goe = sql.find("`members`.`age` >=").expect("lower bound");
        let loe = sql.find("`members`.`age` <=").expect("upper bound");
        assert!(username < team && team < goe && goe < loe);
        assert_eq!(sql.matches(" AND ").count(), 3);
    }
}
