//! Unit tests for individual toolkit operations
//!
//! Each test drives one session operation against in-memory storage and a
//! mocked creative service.

use assert_matches::assert_matches;
use hrkit::{DrawRequest, ToolkitError};
use shared::{ActivityKind, ActivityPayload, GroupId};

mod common;
use common::{TestFixtures, TestHelpers, ToolkitBuilder};

/// Test pasted text parsing through the session
#[test]
fn test_import_text_accepts_mixed_separators() {
    let mut toolkit = ToolkitBuilder::new().build();

    let added = toolkit.import_text(TestFixtures::messy_roster_text());

    assert_eq!(added, 5);
    assert_eq!(TestHelpers::roster_names(&toolkit), vec!["Alice", "Bob", "Carol", "Dave", "Erin"]);
}

/// Test that imports append and never replace
#[test]
fn test_import_text_appends() {
    let mut toolkit = TestHelpers::small_toolkit();

    toolkit.import_text("Dave, Erin");

    assert_eq!(toolkit.roster().len(), 5);
    assert_eq!(toolkit.import_text(" \n , "), 0);
    assert_eq!(toolkit.roster().len(), 5);
}

#[test]
fn test_duplicate_report_and_dedupe() {
    let mut toolkit = ToolkitBuilder::new()
        .with_roster(TestFixtures::duplicate_roster_text())
        .build();

    let report = toolkit.duplicates();
    assert!(report.has_duplicates());
    assert_eq!(report.count_of("Alice"), 3);
    assert_eq!(report.count_of("Bob"), 2);
    assert_eq!(report.count_of("Carol"), 1);
    for participant in toolkit.roster() {
        assert_eq!(report.is_duplicated(&participant.id), participant.name != "Carol");
    }

    let removed = toolkit.dedupe_roster();

    assert_eq!(removed, 3);
    assert_eq!(TestHelpers::roster_names(&toolkit), vec!["Alice", "Bob", "Carol"]);
    assert!(!toolkit.duplicates().has_duplicates());
}

#[test]
fn test_remove_and_clear_roster() {
    let mut toolkit = TestHelpers::small_toolkit();
    let bob = toolkit.roster()[1].id.clone();

    assert!(toolkit.remove_participant(&bob));
    assert!(!toolkit.remove_participant(&bob));
    assert_eq!(TestHelpers::roster_names(&toolkit), vec!["Alice", "Carol"]);

    toolkit.clear_roster();
    assert!(toolkit.roster().is_empty());
}

#[test]
fn test_demo_participants_are_distinct() {
    let mut toolkit = ToolkitBuilder::new().build();

    assert_eq!(toolkit.add_demo_participants(12), 12);
    assert!(!toolkit.duplicates().has_duplicates());

    // Asking for more than the built-in list yields every demo name once
    let mut toolkit = ToolkitBuilder::new().build();
    assert_eq!(toolkit.add_demo_participants(500), 40);
    assert!(!toolkit.duplicates().has_duplicates());
}

/// Test the lucky draw happy path
#[test]
fn test_draw_records_winners_and_log() {
    let mut toolkit = TestHelpers::small_toolkit();

    let outcome = toolkit.draw(&DrawRequest::new(2, TestFixtures::PRIZE)).unwrap();

    assert_eq!(outcome.winners.len(), 2);
    assert_ne!(outcome.winners[0].id(), outcome.winners[1].id());
    assert!(outcome.winners.iter().all(|w| w.prize == TestFixtures::PRIZE));
    assert_eq!(toolkit.winners(), outcome.winners.as_slice());

    assert_eq!(outcome.activity.kind(), ActivityKind::LuckyDraw);
    assert_eq!(outcome.activity.title, "Gold (x2)");
    assert_eq!(outcome.activity.payload.len(), 2);

    let entries = toolkit.history_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0], outcome.activity);
}

/// Test that an oversized request draws everyone left
#[test]
fn test_draw_count_clamped_to_pool() {
    let mut toolkit = TestHelpers::small_toolkit();

    let outcome = toolkit.draw(&DrawRequest::new(10, TestFixtures::PRIZE)).unwrap();

    assert_eq!(outcome.winners.len(), 3);
    assert_eq!(outcome.activity.title, "Gold (x3)");
}

#[test]
fn test_draw_on_empty_roster_fails_without_side_effects() {
    let mut toolkit = ToolkitBuilder::new().build();

    assert_matches!(toolkit.draw(&DrawRequest::new(1, TestFixtures::PRIZE)), Err(ToolkitError::EmptyPool));
    assert!(toolkit.winners().is_empty());
    assert!(toolkit.history_entries().is_empty());
}

#[test]
fn test_draw_zero_count_rejected() {
    let mut toolkit = TestHelpers::small_toolkit();

    assert_matches!(
        toolkit.draw(&DrawRequest::new(0, TestFixtures::PRIZE)),
        Err(ToolkitError::InvalidDrawCount { count: 0 })
    );
    assert!(toolkit.winners().is_empty());
    assert!(toolkit.history_entries().is_empty());
}

/// Test that without repeats, winners leave the pool
#[test]
fn test_pool_excludes_previous_winners() {
    let mut toolkit = TestHelpers::small_toolkit();

    toolkit.draw(&DrawRequest::new(1, TestFixtures::PRIZE)).unwrap();

    assert_eq!(toolkit.pool(false).len(), 2);
    assert_eq!(toolkit.pool(true).len(), 3);
}

/// Test that a name pasted twice is two separate entries in the pool
#[test]
fn test_same_name_entries_are_distinct_participants() {
    let mut toolkit = ToolkitBuilder::new().with_roster("Alice\nAlice").build();

    toolkit.draw(&DrawRequest::new(1, TestFixtures::PRIZE)).unwrap();

    assert_eq!(toolkit.pool(false).len(), 1);
    assert_eq!(toolkit.pool(false)[0].name, "Alice");
}

#[test]
fn test_reset_winners_restores_pool() {
    let mut toolkit = TestHelpers::small_toolkit();
    toolkit.draw(&DrawRequest::new(3, TestFixtures::PRIZE)).unwrap();
    assert!(toolkit.pool(false).is_empty());

    toolkit.reset_winners();

    assert!(toolkit.winners().is_empty());
    assert_eq!(toolkit.pool(false).len(), 3);
}

/// Test that the newest batch sits at the front of the winner list
#[test]
fn test_winner_list_newest_first() {
    let mut toolkit = TestHelpers::small_toolkit();

    toolkit.draw(&DrawRequest::new(1, TestFixtures::PRIZE)).unwrap();
    let second = toolkit.draw(&DrawRequest::new(1, TestFixtures::SECOND_PRIZE)).unwrap();

    assert_eq!(toolkit.winners().len(), 2);
    assert_eq!(toolkit.winners()[0], second.winners[0]);
    assert_eq!(toolkit.winners()[1].prize, TestFixtures::PRIZE);
}

/// Test grouping sizes with a remainder
#[test]
fn test_generate_groups_with_remainder() {
    let mut toolkit = ToolkitBuilder::new()
        .with_roster(&TestFixtures::numbered_roster_text(10))
        .build();

    let outcome = toolkit.generate_groups(4).unwrap().unwrap();

    assert_eq!(TestHelpers::group_sizes(&toolkit), vec![4, 4, 2]);
    assert_eq!(outcome.groups, toolkit.groups());
    let names: Vec<&str> = outcome.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Group 1", "Group 2", "Group 3"]);

    let mut expected: Vec<String> = TestHelpers::roster_names(&toolkit);
    expected.sort();
    assert_eq!(TestHelpers::grouped_names_sorted(&toolkit), expected);

    assert_eq!(outcome.activity.kind(), ActivityKind::Grouping);
    assert_eq!(outcome.activity.title, "Grouping complete: 10 participants");
    assert_eq!(outcome.activity.details, "3 groups (about 4 per group)");
}

#[test]
fn test_generate_groups_on_empty_roster_is_noop() {
    let mut toolkit = ToolkitBuilder::new().build();

    assert_eq!(toolkit.generate_groups(3).unwrap(), None);
    assert!(toolkit.groups().is_empty());
    assert!(toolkit.history_entries().is_empty());
}

#[test]
fn test_generate_groups_zero_size_rejected() {
    let mut toolkit = TestHelpers::small_toolkit();

    assert_matches!(toolkit.generate_groups(0), Err(ToolkitError::InvalidGroupSize { size: 0 }));
    assert!(toolkit.groups().is_empty());
    assert!(toolkit.history_entries().is_empty());
}

#[test]
fn test_group_size_larger_than_roster_gives_one_group() {
    let mut toolkit = TestHelpers::small_toolkit();

    toolkit.generate_groups(10).unwrap();

    assert_eq!(TestHelpers::group_sizes(&toolkit), vec![3]);
}

#[test]
fn test_rename_group() {
    let mut toolkit = TestHelpers::small_toolkit();
    toolkit.generate_groups(2).unwrap();
    let first = toolkit.groups()[0].id.clone();

    assert!(toolkit.rename_group(&first, "Blue Team"));
    assert!(!toolkit.rename_group(&GroupId::for_index(99), "Nobody"));

    assert_eq!(toolkit.groups()[0].name, "Blue Team");
    assert_eq!(toolkit.groups()[1].name, "Group 2");
}

#[test]
fn test_history_search_and_delete() {
    let mut toolkit = TestHelpers::small_toolkit();
    toolkit.draw(&DrawRequest::new(1, TestFixtures::PRIZE)).unwrap();
    toolkit.generate_groups(2).unwrap();
    let silver = toolkit.draw(&DrawRequest::new(1, TestFixtures::SECOND_PRIZE)).unwrap();

    assert_eq!(toolkit.search_history("gold").len(), 1);
    assert_eq!(toolkit.search_history("GROUPING").len(), 1);

    let remaining = toolkit.delete_activity(&silver.activity.id);

    assert_eq!(remaining.len(), 2);
    assert_eq!(
        TestHelpers::titles(&remaining),
        vec!["Grouping complete: 3 participants".to_string(), "Gold (x1)".to_string()]
    );
}

#[test]
fn test_clear_history_leaves_session_state() {
    let mut toolkit = TestHelpers::small_toolkit();
    toolkit.draw(&DrawRequest::new(1, TestFixtures::PRIZE)).unwrap();

    toolkit.clear_history();

    assert!(toolkit.history_entries().is_empty());
    assert_eq!(toolkit.winners().len(), 1);
}

#[test]
fn test_export_rows_for_winners_and_groups() {
    let mut toolkit = TestHelpers::small_toolkit();
    toolkit.draw(&DrawRequest::new(2, TestFixtures::PRIZE)).unwrap();
    toolkit.generate_groups(2).unwrap();

    let winner_rows = toolkit.export_winners();
    assert_eq!(winner_rows.len(), 2);
    assert_eq!(winner_rows[0].name, toolkit.winners()[0].name());
    assert_eq!(winner_rows[0].prize, TestFixtures::PRIZE);

    let group_rows = toolkit.export_groups();
    assert_eq!(group_rows.len(), 3);
    assert_eq!(group_rows[0].group_name, "Group 1");
    assert_eq!(group_rows[2].group_name, "Group 2");
}

#[test]
fn test_export_logged_activity() {
    let mut toolkit = TestHelpers::small_toolkit();
    let draw = toolkit.draw(&DrawRequest::new(3, TestFixtures::PRIZE)).unwrap();

    let rows = toolkit.export_activity(&draw.activity.id).unwrap();
    assert_eq!(rows.len(), 3);

    assert!(toolkit.export_activity(&shared::ActivityId::new()).is_none());
    assert_matches!(draw.activity.payload, ActivityPayload::LuckyDraw(ref winners) if winners.len() == 3);
}

/// Test that storage failures never reach the caller
#[test]
fn test_failing_storage_does_not_block_operations() {
    let mut toolkit = TestHelpers::failing_storage_toolkit();

    let outcome = toolkit.draw(&DrawRequest::new(1, TestFixtures::PRIZE)).unwrap();
    assert_eq!(outcome.winners.len(), 1);
    assert_eq!(toolkit.winners().len(), 1);

    assert!(toolkit.generate_groups(2).unwrap().is_some());
    assert!(toolkit.history_entries().is_empty());
    assert!(toolkit.delete_activity(&outcome.activity.id).is_empty());
    toolkit.clear_history();
}

/// Test that background requests outside a runtime are refused, not panicking
#[test]
fn test_group_name_request_needs_runtime() {
    let mut toolkit = TestHelpers::small_toolkit();
    toolkit.generate_groups(2).unwrap();
    let first = toolkit.groups()[0].id.clone();

    assert_matches!(toolkit.request_group_name(&first), Err(ToolkitError::RuntimeUnavailable));
    assert_matches!(toolkit.request_group_name(&GroupId::for_index(42)), Ok(false));
}
