use serde::{Deserialize, Serialize};

use crate::domain::types::{Age, MemberId, TeamId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id: MemberId,
    pub username: String,
    pub age: Age,
    /// Team the member belongs to, if any.
    pub team_id: Option<TeamId>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewMember {
    pub username: String,
    pub age: Age,
    pub team_id: Option<TeamId>,
}

impl NewMember {
    #[must_use]
    pub fn new(username: impl Into<String>, age: Age, team_id: Option<TeamId>) -> Self {
        Self {
            username: username.into(),
            age,
            team_id,
        }
    }
}
