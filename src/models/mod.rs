//! Diesel models mirroring the `members` and `teams` tables.

pub mod config;
pub mod member;
pub mod projection;
pub mod team;
