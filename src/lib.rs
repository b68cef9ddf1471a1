//! Typed member/team search over Diesel: optional filter conditions,
//! count-skipping pagination, DTO projections and bulk statements.

pub mod db;
pub mod domain;
pub mod dto;
mod error_conversions;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod schema;
pub mod services;

/// Page size used when a request does not name one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

