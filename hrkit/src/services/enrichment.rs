//! Background creative-text enrichment
//!
//! Team-name and congratulation requests run as spawned tasks and publish
//! their result on a channel keyed by the target they belong to. Nothing here
//! blocks a draw or a grouping run. A new request for a target aborts the
//! in-flight one for the same target.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use shared::{Component, Group, GroupId, component_debug};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::{ToolkitError, ToolkitResult};
use crate::traits::CreativeText;

const PENDING_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Result of one background request
#[derive(Debug, Clone, PartialEq)]
pub enum EnrichmentUpdate {
    /// Suggested name for a group of the given grouping generation
    GroupName {
        generation: u64,
        group_id: GroupId,
        name: String,
    },
    /// Advisory message for the draw with the given sequence number
    Congratulation { draw_sequence: u64, message: String },
}

/// Spawns creative-text requests and collects their results
pub struct EnrichmentService<C: CreativeText + ?Sized + 'static> {
    creative: Arc<C>,
    tx: mpsc::UnboundedSender<EnrichmentUpdate>,
    rx: mpsc::UnboundedReceiver<EnrichmentUpdate>,
    pending_names: HashMap<GroupId, JoinHandle<()>>,
    pending_congratulation: Option<JoinHandle<()>>,
}

impl<C: CreativeText + ?Sized + 'static> EnrichmentService<C> {
    pub fn new(creative: Arc<C>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            creative,
            tx,
            rx,
            pending_names: HashMap::new(),
            pending_congratulation: None,
        }
    }

    fn runtime() -> ToolkitResult<tokio::runtime::Handle> {
        tokio::runtime::Handle::try_current().map_err(|_| ToolkitError::RuntimeUnavailable)
    }

    /// Ask for a new name for `group`, replacing any request still running for it
    pub fn request_group_name(&mut self, generation: u64, group: &Group) -> ToolkitResult<()> {
        let runtime = Self::runtime()?;

        if let Some(previous) = self.pending_names.remove(&group.id) {
            previous.abort();
        }

        let creative = Arc::clone(&self.creative);
        let tx = self.tx.clone();
        let group_id = group.id.clone();
        let member_names = group.member_names();

        let task = runtime.spawn(async move {
            let name = creative.suggest_group_name(&member_names).await;
            let _ = tx.send(EnrichmentUpdate::GroupName {
                generation,
                group_id,
                name,
            });
        });

        component_debug!(Component::Creative, "✨ Requested name for {}", group.id);
        self.pending_names.insert(group.id.clone(), task);
        Ok(())
    }

    /// Ask for a congratulation, replacing any request still running
    pub fn request_congratulation(&mut self, draw_sequence: u64, winner_name: &str, prize: &str) -> ToolkitResult<()> {
        let runtime = Self::runtime()?;

        if let Some(previous) = self.pending_congratulation.take() {
            previous.abort();
        }

        let creative = Arc::clone(&self.creative);
        let tx = self.tx.clone();
        let winner_name = winner_name.to_string();
        let prize = prize.to_string();

        self.pending_congratulation = Some(runtime.spawn(async move {
            let message = creative.suggest_congratulation(&winner_name, &prize).await;
            let _ = tx.send(EnrichmentUpdate::Congratulation { draw_sequence, message });
        }));

        Ok(())
    }

    /// Abort every outstanding team-name request
    pub fn cancel_group_names(&mut self) {
        for (_, task) in self.pending_names.drain() {
            task.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        self.cancel_group_names();
        if let Some(task) = self.pending_congratulation.take() {
            task.abort();
        }
    }

    fn prune_finished(&mut self) {
        self.pending_names.retain(|_, task| !task.is_finished());
        if self.pending_congratulation.as_ref().is_some_and(|task| task.is_finished()) {
            self.pending_congratulation = None;
        }
    }

    /// Requests that have not completed yet
    pub fn pending_count(&mut self) -> usize {
        self.prune_finished();
        self.pending_names.len() + usize::from(self.pending_congratulation.is_some())
    }

    /// Next result already delivered, without waiting
    pub fn try_next(&mut self) -> Option<EnrichmentUpdate> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next result; `None` once nothing is delivered or pending
    pub async fn next(&mut self) -> Option<EnrichmentUpdate> {
        loop {
            if let Some(update) = self.try_next() {
                return Some(update);
            }
            if self.pending_count() == 0 {
                return self.try_next();
            }
            // A task stays pending until it exits, which can trail its send
            tokio::select! {
                update = self.rx.recv() => return update,
                _ = tokio::time::sleep(PENDING_POLL_INTERVAL) => {}
            }
        }
    }
}

impl<C: CreativeText + ?Sized + 'static> Drop for EnrichmentService<C> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
