//! DTO modules that bridge services with their callers.

pub mod member;
