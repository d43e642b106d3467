//! Persistent activity log
//!
//! The store is the only writer of its slot. The slot holds a JSON array of
//! activity records, newest first. Every mutation rewrites the whole array in
//! one backend write. Read failures degrade to an empty log and write failures
//! are logged and dropped; neither reaches the caller.

use chrono::Utc;
use shared::{ActivityId, ActivityLog, Component, NewActivity, component_error, component_info, component_warn};

use crate::error::ToolkitResult;
use crate::traits::StorageBackend;

/// Slot name used when none is configured
pub const DEFAULT_HISTORY_KEY: &str = "hr_toolkit_history";

/// Append-only activity log over an injected storage backend
pub struct HistoryStore<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> HistoryStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_HISTORY_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Every stored record, newest first; empty when the slot is missing or unreadable
    pub fn read_all(&self) -> Vec<ActivityLog> {
        match self.try_read_all() {
            Ok(logs) => logs,
            Err(e) => {
                component_warn!(Component::History, "⚠️ Failed to load history, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    fn try_read_all(&self) -> ToolkitResult<Vec<ActivityLog>> {
        match self.backend.read(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&self, logs: &[ActivityLog]) -> ToolkitResult<()> {
        let serialized = serde_json::to_string(logs)?;
        self.backend.write(&self.key, &serialized)
    }

    /// Stamp a new record and put it in front of the log
    ///
    /// The stamped record is returned even if the write was dropped.
    pub fn append(&self, activity: NewActivity) -> ActivityLog {
        let record = ActivityLog {
            id: ActivityId::new(),
            timestamp: Utc::now(),
            title: activity.title,
            details: activity.details,
            payload: activity.payload,
        };

        let current = self.read_all();
        let mut updated = Vec::with_capacity(current.len() + 1);
        updated.push(record.clone());
        updated.extend(current);

        match self.persist(&updated) {
            Ok(()) => {
                component_info!(Component::History, "📝 Logged {} activity: {}", record.kind(), record.title);
            }
            Err(e) => {
                component_error!(Component::History, "❌ Failed to save activity {}: {}", record.id, e);
            }
        }

        record
    }

    /// Remove one record and return the collection as it now stands
    pub fn delete(&self, id: &ActivityId) -> Vec<ActivityLog> {
        let current = self.read_all();
        let updated: Vec<ActivityLog> = current.iter().filter(|log| &log.id != id).cloned().collect();

        if updated.len() == current.len() {
            return current;
        }

        match self.persist(&updated) {
            Ok(()) => {
                component_info!(Component::History, "🗑️ Deleted activity {}", id);
                updated
            }
            Err(e) => {
                component_warn!(Component::History, "⚠️ Failed to delete activity {}: {}", id, e);
                current
            }
        }
    }

    /// Drop the whole log
    pub fn clear(&self) {
        match self.backend.remove(&self.key) {
            Ok(()) => {
                component_info!(Component::History, "🧹 Cleared activity history");
            }
            Err(e) => {
                component_warn!(Component::History, "⚠️ Failed to clear history: {}", e);
            }
        }
    }

    pub fn find(&self, id: &ActivityId) -> Option<ActivityLog> {
        self.read_all().into_iter().find(|log| &log.id == id)
    }

    /// Records whose title or details contain `term`, ignoring case
    pub fn search(&self, term: &str) -> Vec<ActivityLog> {
        let needle = term.trim().to_lowercase();
        let logs = self.read_all();
        if needle.is_empty() {
            return logs;
        }

        logs.into_iter()
            .filter(|log| {
                log.title.to_lowercase().contains(&needle) || log.details.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
