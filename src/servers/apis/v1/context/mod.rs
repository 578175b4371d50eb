//! The API resource contexts.
pub mod task;
