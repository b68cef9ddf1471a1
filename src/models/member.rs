use diesel::prelude::*;

use crate::domain::member::{Member as DomainMember, NewMember as DomainNewMember};
use crate::domain::types::{Age, MemberId, TeamId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::members)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::member::Member`].
pub struct Member {
    pub id: i32,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::members)]
#[diesel(treat_none_as_default_value = false)]
/// Insertable form of [`Member`]; a missing team is written as `NULL`.
pub struct NewMember<'a> {
    pub username: &'a str,
    pub age: i32,
    pub team_id: Option<i32>,
}

impl TryFrom<Member> for DomainMember {
    type Error = TypeConstraintError;

    fn try_from(member: Member) -> Result<Self, Self::Error> {
        Ok(Self {
            id: MemberId::try_from(member.id)?,
            username: member.username,
            age: Age::try_from(member.age)?,
            team_id: member.team_id.map(TeamId::try_from).transpose()?,
        })
    }
}

impl<'a> From<&'a DomainNewMember> for NewMember<'a> {
    fn from(member: &'a DomainNewMember) -> Self {
        Self {
            username: member.username.as_str(),
            age: member.age.get(),
            team_id: member.team_id.map(TeamId::get),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_domain_new_member() {
        let team_id = TeamId::new(3).expect("valid team id");
        let domain = DomainNewMember::new("member1", Age::new(10).expect("valid age"), Some(team_id));
        let new: NewMember = (&domain).into();
        assert_eq!(new.username, "member1");
        assert_eq!(new.age, 10);
        assert_eq!(new.team_id, Some(3));
    }

    #[test]
    fn member_without_team_into_domain() {
        let db = Member {
            id: 1,
            username: "member1".into(),
            age: 10,
            team_id: None,
        };
        let domain = DomainMember::try_from(db).expect("valid member");
        assert_eq!(domain.id.get(), 1);
        assert_eq!(domain.age.get(), 10);
        assert!(domain.team_id.is_none());
    }

    #[test]
    fn member_with_invalid_team_reference_is_rejected() {
        let db = Member {
            id: 1,
            username: "member1".into(),
            age: 10,
            team_id: Some(0),
        };
        assert_eq!(
            DomainMember::try_from(db),
            Err(TypeConstraintError::NonPositiveId)
        );
    }
}
