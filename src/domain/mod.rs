//! Domain values exchanged between the repository and service layers.

pub mod condition;
pub mod member;
pub mod projection;
pub mod team;
pub mod types;
