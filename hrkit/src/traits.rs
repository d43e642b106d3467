//! Trait definitions for dependency injection
//!
//! The log store talks to persistence only through [`StorageBackend`] and the
//! session reaches the text-generation service only through [`CreativeText`],
//! so both can be replaced by mockall mocks or in-memory fakes in tests.

use async_trait::async_trait;

use crate::error::ToolkitResult;

/// Named-slot persistence used by the activity log store
///
/// Every call is synchronous and each `write` replaces the whole slot value
/// in one step.
#[mockall::automock]
pub trait StorageBackend: Send + Sync {
    /// Read the value stored in `key`, `None` when the slot does not exist
    fn read(&self, key: &str) -> ToolkitResult<Option<String>>;

    /// Replace the value stored in `key`
    fn write(&self, key: &str, value: &str) -> ToolkitResult<()>;

    /// Remove the slot entirely
    fn remove(&self, key: &str) -> ToolkitResult<()>;
}

/// Best-effort creative text generation
///
/// Implementations must never fail: any error is replaced by a deterministic
/// fallback string before it leaves the implementation.
#[mockall::automock]
#[async_trait]
pub trait CreativeText: Send + Sync {
    /// Suggest a short team name for a group with these members
    async fn suggest_group_name(&self, member_names: &[String]) -> String;

    /// Write a one-sentence congratulation for a winner
    async fn suggest_congratulation(&self, winner_name: &str, prize_name: &str) -> String;
}
