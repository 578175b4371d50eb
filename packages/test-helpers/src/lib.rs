//! Helpers for the tor-rest integration and unit tests.
pub mod configuration;
