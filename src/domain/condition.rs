//! Optional filter inputs for member searches.

use serde::{Deserialize, Serialize};

/// Returns `true` when the value contains at least one non-whitespace character.
pub fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

/// Filter inputs for member searches; every field is optional.
///
/// An absent field leaves the result unconstrained. Blank `username` and
/// `team_name` values are treated exactly like absent ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    /// Inclusive lower age bound.
    pub age_goe: Option<i32>,
    /// Inclusive upper age bound.
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    pub fn age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }

    /// Username to filter on, or `None` when absent or blank.
    pub fn username_filter(&self) -> Option<&str> {
        self.username.as_deref().filter(|s| has_text(Some(s)))
    }

    /// Team name to filter on, or `None` when absent or blank.
    pub fn team_name_filter(&self) -> Option<&str> {
        self.team_name.as_deref().filter(|s| has_text(Some(s)))
    }

    /// `true` when no sub-condition would be applied.
    pub fn is_unconstrained(&self) -> bool {
        self.username_filter().is_none()
            && self.team_name_filter().is_none()
            && self.age_goe.is_none()
            && self.age_loe.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_text_rejects_blank_values() {
        assert!(!has_text(None));
        assert!(!has_text(Some("")));
        assert!(!has_text(Some(" \t\n")));
        assert!(has_text(Some(" member1 ")));
    }

    #[test]
    fn blank_text_filters_are_absent() {
        let condition = MemberSearchCondition::new().username("  ").team_name("");
        assert_eq!(condition.username_filter(), None);
        assert_eq!(condition.team_name_filter(), None);
        assert!(condition.is_unconstrained());
    }

    #[test]
    fn non_blank_text_is_kept_verbatim() {
        let condition = MemberSearchCondition::new().username(" member1");
        assert_eq!(condition.username_filter(), Some(" member1"));
        assert!(!condition.is_unconstrained());
    }

    #[test]
    fn age_bounds_alone_constrain() {
        assert!(!MemberSearchCondition::new().age_loe(30).is_unconstrained());
    }
}
