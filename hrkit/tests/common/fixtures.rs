//! Test fixtures and data for toolkit tests

use shared::Participant;

/// Standard test data
pub struct TestFixtures;

#[allow(dead_code)]
impl TestFixtures {
    pub const PRIZE: &'static str = "Gold";
    pub const SECOND_PRIZE: &'static str = "Silver";
    pub const GENERATED_TEAM_NAME: &'static str = "The Test Pilots";
    pub const GENERATED_CONGRATULATION: &'static str = "Hooray for the winner!";

    /// Three-person roster as pasted text
    pub fn small_roster_text() -> &'static str {
        "Alice\nBob\nCarol"
    }

    /// Mixed separators, blanks and surrounding whitespace
    pub fn messy_roster_text() -> &'static str {
        " Alice ,Bob\r\n\r\nCarol，Dave\n,,  \nErin\n"
    }

    /// Roster text with repeated names
    pub fn duplicate_roster_text() -> &'static str {
        "Alice\nBob\nAlice\nCarol\nBob\nAlice"
    }

    /// `n` distinct names, one per line
    pub fn numbered_roster_text(n: usize) -> String {
        (1..=n).map(|i| format!("Person {i}")).collect::<Vec<_>>().join("\n")
    }

    pub fn participants(names: &[&str]) -> Vec<Participant> {
        names.iter().map(|name| Participant::new(*name)).collect()
    }
}
