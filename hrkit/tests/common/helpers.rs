//! Test helpers and builder patterns for toolkit tests

use std::sync::Arc;

use hrkit::{CreativeText, MemoryStorage, MockCreativeText, MockStorageBackend, StorageBackend, Toolkit, ToolkitError};
use shared::ActivityLog;

use super::fixtures::TestFixtures;

/// Builder for test sessions with an in-memory log and a mocked creative service
pub struct ToolkitBuilder {
    storage: MemoryStorage,
    creative: MockCreativeText,
    roster_text: Option<String>,
}

#[allow(dead_code)]
impl ToolkitBuilder {
    /// Defaults: empty roster, fresh memory storage, creative mock answering fixed text
    pub fn new() -> Self {
        let mut creative = MockCreativeText::new();
        creative
            .expect_suggest_group_name()
            .returning(|_| TestFixtures::GENERATED_TEAM_NAME.to_string())
            .times(0..);
        creative
            .expect_suggest_congratulation()
            .returning(|_, _| TestFixtures::GENERATED_CONGRATULATION.to_string())
            .times(0..);

        Self {
            storage: MemoryStorage::new(),
            creative,
            roster_text: None,
        }
    }

    pub fn with_roster(mut self, text: &str) -> Self {
        self.roster_text = Some(text.to_string());
        self
    }

    /// Share an existing store, e.g. to simulate a restart
    pub fn with_storage(mut self, storage: MemoryStorage) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_creative(mut self, creative: MockCreativeText) -> Self {
        self.creative = creative;
        self
    }

    pub fn build(self) -> Toolkit<MemoryStorage, MockCreativeText> {
        let mut toolkit = Toolkit::new(self.storage, Arc::new(self.creative));
        if let Some(text) = self.roster_text {
            toolkit.import_text(&text);
        }
        toolkit
    }
}

/// Assertion and setup helpers
pub struct TestHelpers;

#[allow(dead_code)]
impl TestHelpers {
    /// Session over the three-person roster
    pub fn small_toolkit() -> Toolkit<MemoryStorage, MockCreativeText> {
        ToolkitBuilder::new().with_roster(TestFixtures::small_roster_text()).build()
    }

    /// Session whose log store fails every operation
    pub fn failing_storage_toolkit() -> Toolkit<MockStorageBackend, MockCreativeText> {
        let mut storage = MockStorageBackend::new();
        storage
            .expect_read()
            .returning(|key| Err(ToolkitError::storage("read", key, "unavailable")));
        storage
            .expect_write()
            .returning(|key, _| Err(ToolkitError::storage("write", key, "unavailable")));
        storage
            .expect_remove()
            .returning(|key| Err(ToolkitError::storage("remove", key, "unavailable")));

        let mut toolkit = Toolkit::new(storage, Arc::new(MockCreativeText::new()));
        toolkit.import_text(TestFixtures::small_roster_text());
        toolkit
    }

    pub fn roster_names<S: StorageBackend, C: CreativeText + ?Sized + 'static>(toolkit: &Toolkit<S, C>) -> Vec<String> {
        toolkit.roster().iter().map(|p| p.name.clone()).collect()
    }

    pub fn winner_names<S: StorageBackend, C: CreativeText + ?Sized + 'static>(toolkit: &Toolkit<S, C>) -> Vec<String> {
        toolkit.winners().iter().map(|w| w.name().to_string()).collect()
    }

    /// Group sizes in group order
    pub fn group_sizes<S: StorageBackend, C: CreativeText + ?Sized + 'static>(toolkit: &Toolkit<S, C>) -> Vec<usize> {
        toolkit.groups().iter().map(|g| g.members.len()).collect()
    }

    /// Every member name across all groups, sorted
    pub fn grouped_names_sorted<S: StorageBackend, C: CreativeText + ?Sized + 'static>(
        toolkit: &Toolkit<S, C>,
    ) -> Vec<String> {
        let mut names: Vec<String> = toolkit.groups().iter().flat_map(|g| g.member_names()).collect();
        names.sort();
        names
    }

    pub fn assert_no_duplicate_winners<S: StorageBackend, C: CreativeText + ?Sized + 'static>(toolkit: &Toolkit<S, C>) {
        let mut ids: Vec<&str> = toolkit.winners().iter().map(|w| w.id().as_str()).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total, "a participant won twice without repeats allowed");
    }

    pub fn titles(entries: &[ActivityLog]) -> Vec<String> {
        entries.iter().map(|e| e.title.clone()).collect()
    }
}
