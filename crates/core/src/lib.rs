//! Shared domain types for the Holonet favorites catalog.

pub mod error;
pub mod favorites;
pub mod types;
