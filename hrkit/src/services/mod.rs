//! Service implementations
//!
//! I/O-backed implementations of the toolkit traits plus the activity log
//! store and the background enrichment runner built on top of them.

pub mod creative_text;
pub mod enrichment;
pub mod history_store;
pub mod storage;

#[cfg(test)]
pub mod tests;

pub use creative_text::{CreativeTextConfig, GeminiCreativeText, OfflineCreativeText, creative_text_from_config};
pub use enrichment::{EnrichmentService, EnrichmentUpdate};
pub use history_store::{DEFAULT_HISTORY_KEY, HistoryStore};
pub use storage::{FileStorage, MemoryStorage};
