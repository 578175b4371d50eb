//! Setup for the main application process.
//!
//! The [`app::setup`](crate::bootstrap::app::setup) function builds the
//! configuration and the domain layer (the task store), and initializes the
//! logging. The [`jobs`] submodule contains the starters for the application
//! services.
pub mod app;
pub mod jobs;
pub mod logging;
