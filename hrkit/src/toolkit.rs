//! Session facade with dependency injection
//!
//! Owns the working roster, this session's winners, the current groups and
//! the activity log. Every mutation replaces whole values; the core functions
//! only ever see snapshots.

use std::sync::Arc;

use chrono::Utc;
use shared::{
    ActivityId, ActivityLog, Component, Group, GroupId, Participant, ParticipantId, Winner,
    component_debug, component_info, component_warn,
};

use crate::core::draw::{self, DrawRequest};
use crate::core::export::{self, ExportRows, GroupExportRow, WinnerExportRow};
use crate::core::grouping;
use crate::core::roster::{self, DuplicateReport};
use crate::error::{ToolkitError, ToolkitResult};
use crate::services::enrichment::{EnrichmentService, EnrichmentUpdate};
use crate::services::history_store::HistoryStore;
use crate::traits::{CreativeText, StorageBackend};

/// Result of a completed draw
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOutcome {
    /// This batch only, in shuffle order
    pub winners: Vec<Winner>,
    pub activity: ActivityLog,
}

/// Result of a completed grouping run
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingOutcome {
    pub groups: Vec<Group>,
    pub activity: ActivityLog,
}

/// HR toolkit session
pub struct Toolkit<S, C>
where
    S: StorageBackend,
    C: CreativeText + ?Sized + 'static,
{
    roster: Vec<Participant>,
    winners: Vec<Winner>,
    groups: Vec<Group>,
    group_generation: u64,
    draw_sequence: u64,
    advisory: Option<String>,
    history: HistoryStore<S>,
    enrichment: EnrichmentService<C>,
}

impl<S, C> Toolkit<S, C>
where
    S: StorageBackend,
    C: CreativeText + ?Sized + 'static,
{
    /// Create a session logging to the default history slot of `storage`
    pub fn new(storage: S, creative: Arc<C>) -> Self {
        Self::with_history(HistoryStore::new(storage), creative)
    }

    pub fn with_history(history: HistoryStore<S>, creative: Arc<C>) -> Self {
        Self {
            roster: Vec::new(),
            winners: Vec::new(),
            groups: Vec::new(),
            group_generation: 0,
            draw_sequence: 0,
            advisory: None,
            history,
            enrichment: EnrichmentService::new(creative),
        }
    }

    pub fn roster(&self) -> &[Participant] {
        &self.roster
    }

    pub fn winners(&self) -> &[Winner] {
        &self.winners
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Latest congratulation for a single-winner draw, if one has arrived
    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    // Roster

    /// Parse pasted or imported text and append the names; returns how many were added
    pub fn import_text(&mut self, raw: &str) -> usize {
        let parsed = roster::parse_names(raw);
        let added = parsed.len();
        if added > 0 {
            self.roster = [self.roster.as_slice(), parsed.as_slice()].concat();
            component_info!(Component::Roster, "👥 Imported {} names, roster now {}", added, self.roster.len());
        }
        added
    }

    pub fn add_demo_participants(&mut self, count: usize) -> usize {
        let demo = roster::demo_participants(count);
        let added = demo.len();
        self.roster = [self.roster.as_slice(), demo.as_slice()].concat();
        added
    }

    pub fn duplicates(&self) -> DuplicateReport {
        DuplicateReport::from_roster(&self.roster)
    }

    /// Drop repeated names, keeping first occurrences; returns how many were removed
    pub fn dedupe_roster(&mut self) -> usize {
        let deduped = roster::dedupe(&self.roster);
        let removed = self.roster.len() - deduped.len();
        self.roster = deduped;
        if removed > 0 {
            component_info!(Component::Roster, "🧽 Removed {} duplicate names", removed);
        }
        removed
    }

    pub fn remove_participant(&mut self, id: &ParticipantId) -> bool {
        let remaining = roster::remove(&self.roster, id);
        let removed = remaining.len() != self.roster.len();
        self.roster = remaining;
        removed
    }

    /// Empty the roster in one step
    pub fn clear_roster(&mut self) {
        self.roster = Vec::new();
        component_info!(Component::Roster, "🧹 Roster cleared");
    }

    // Lucky draw

    /// Participants eligible for the next draw
    pub fn pool(&self, allow_repeat: bool) -> Vec<Participant> {
        draw::eligible_pool(&self.roster, &self.winners, allow_repeat)
    }

    /// Run one draw
    ///
    /// Refused with `EmptyPool` before any state changes when nobody is
    /// eligible. Asking for more winners than are eligible draws everyone left.
    pub fn draw(&mut self, request: &DrawRequest) -> ToolkitResult<DrawOutcome> {
        let pool = self.pool(request.allow_repeat);
        if pool.is_empty() {
            component_warn!(Component::Draw, "⚠️ Draw refused: pool is empty");
            return Err(ToolkitError::EmptyPool);
        }

        let batch = draw::resolve_draw(&pool, request.count, &request.prize, Utc::now())?;

        self.advisory = None;
        self.draw_sequence += 1;
        self.winners = draw::record_winners(&self.winners, &batch);

        let activity = self.history.append(draw::draw_activity(&request.prize, &batch));

        component_info!(
            Component::Draw,
            "🎉 Drew {} of {} requested for {} from a pool of {}",
            batch.len(),
            request.count,
            request.prize,
            pool.len()
        );

        if let [winner] = batch.as_slice() {
            if let Err(e) = self
                .enrichment
                .request_congratulation(self.draw_sequence, winner.name(), &request.prize)
            {
                component_debug!(Component::Draw, "Skipping congratulation: {}", e);
            }
        }

        Ok(DrawOutcome {
            winners: batch,
            activity,
        })
    }

    /// Forget this session's winners so everyone is eligible again
    pub fn reset_winners(&mut self) {
        self.winners = Vec::new();
        self.advisory = None;
    }

    // Grouping

    /// Shuffle the roster into groups of `group_size`
    ///
    /// An empty roster is a no-op returning `None`: no groups, no log entry.
    pub fn generate_groups(&mut self, group_size: usize) -> ToolkitResult<Option<GroupingOutcome>> {
        if self.roster.is_empty() {
            return Ok(None);
        }

        let groups = grouping::partition(&self.roster, group_size)?;

        self.enrichment.cancel_group_names();
        self.group_generation += 1;
        self.groups = groups.clone();

        let activity = self
            .history
            .append(grouping::grouping_activity(self.roster.len(), &groups, group_size));

        component_info!(
            Component::Grouping,
            "🧩 Split {} participants into {} groups of up to {}",
            self.roster.len(),
            groups.len(),
            group_size
        );

        Ok(Some(GroupingOutcome { groups, activity }))
    }

    pub fn rename_group(&mut self, id: &GroupId, name: &str) -> bool {
        if !self.groups.iter().any(|g| &g.id == id) {
            return false;
        }
        self.groups = grouping::rename(&self.groups, id, name);
        true
    }

    /// Request a creative name for one group in the background
    ///
    /// Returns `false` for an unknown group id.
    pub fn request_group_name(&mut self, id: &GroupId) -> ToolkitResult<bool> {
        let Some(group) = self.groups.iter().find(|g| &g.id == id) else {
            return Ok(false);
        };
        self.enrichment.request_group_name(self.group_generation, group)?;
        Ok(true)
    }

    /// Apply one background result; stale results are ignored
    pub fn apply_enrichment(&mut self, update: EnrichmentUpdate) -> bool {
        match update {
            EnrichmentUpdate::GroupName {
                generation,
                group_id,
                name,
            } => {
                if generation != self.group_generation {
                    component_debug!(Component::Grouping, "Ignoring name for stale grouping {}", generation);
                    return false;
                }
                self.rename_group(&group_id, &name)
            }
            EnrichmentUpdate::Congratulation { draw_sequence, message } => {
                if draw_sequence != self.draw_sequence {
                    return false;
                }
                self.advisory = Some(message);
                true
            }
        }
    }

    /// Apply every result already delivered; returns how many took effect
    pub fn drain_enrichments(&mut self) -> usize {
        let mut applied = 0;
        while let Some(update) = self.enrichment.try_next() {
            if self.apply_enrichment(update) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next background result and apply it
    pub async fn next_enrichment(&mut self) -> Option<EnrichmentUpdate> {
        let update = self.enrichment.next().await?;
        self.apply_enrichment(update.clone());
        Some(update)
    }

    pub fn pending_enrichments(&mut self) -> usize {
        self.enrichment.pending_count()
    }

    // History

    pub fn history_entries(&self) -> Vec<ActivityLog> {
        self.history.read_all()
    }

    pub fn search_history(&self, term: &str) -> Vec<ActivityLog> {
        self.history.search(term)
    }

    pub fn delete_activity(&self, id: &ActivityId) -> Vec<ActivityLog> {
        self.history.delete(id)
    }

    pub fn clear_history(&self) {
        self.history.clear();
    }

    // Export

    pub fn export_winners(&self) -> Vec<WinnerExportRow> {
        export::winner_rows(&self.winners)
    }

    pub fn export_groups(&self) -> Vec<GroupExportRow> {
        export::group_rows(&self.groups)
    }

    pub fn export_activity(&self, id: &ActivityId) -> Option<ExportRows> {
        self.history.find(id).map(|log| export::activity_rows(&log))
    }
}
