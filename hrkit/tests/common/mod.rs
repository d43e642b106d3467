//! Common test utilities and infrastructure
//!
//! Shared fixtures and builders used by the unit and integration suites.

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
#[allow(unused_imports)]
pub use helpers::{TestHelpers, ToolkitBuilder};
