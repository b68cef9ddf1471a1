//! Deserialisable, validated user input.

pub mod member_search;
