//! Shared types for the HR toolkit
//!
//! Holds the data model that crosses module boundaries (participants,
//! winners, groups, activity records), the shared error types and the
//! logging utilities every component uses.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use logging::Component;
pub use types::*;
