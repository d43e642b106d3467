//! Roster parsing, duplicate detection and list maintenance
//!
//! All functions take the current roster by reference and hand back a new
//! list; nothing here mutates the caller's snapshot.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use shared::{Participant, ParticipantId};

use crate::core::shuffle::shuffled_with;

/// Characters accepted between names in pasted or imported text
const NAME_SEPARATORS: [char; 4] = ['\n', '\r', ',', '，'];

/// Built-in names used for quick demo rosters
pub const DEMO_NAMES: [&str; 40] = [
    "Alice Chen", "Ben Carter", "Chloe Wang", "Daniel Kim", "Emma Rossi",
    "Felix Braun", "Grace Liu", "Hugo Martin", "Isla Novak", "Jack Turner",
    "Kira Sato", "Liam Walsh", "Maya Singh", "Noah Fischer", "Olivia Park",
    "Paul Dubois", "Quinn Murphy", "Rosa Alvarez", "Sam Okafor", "Tara Lin",
    "Umar Haddad", "Vera Ivanova", "Will Foster", "Xin Zhao", "Yara Costa",
    "Zoe Becker", "Aaron Price", "Bella Moreno", "Caleb Ng", "Diana Popescu",
    "Ethan Gray", "Fiona Hart", "Gabe Silva", "Hana Yamada", "Ivan Petrov",
    "Jade Thompson", "Kai Jensen", "Lena Kowalski", "Marco Bianchi", "Nina Larsen",
];

/// Split raw text into fresh participants
///
/// Newlines and commas both separate names; tokens are trimmed and empty ones
/// dropped. Every returned participant gets a new id, so the caller appends
/// the result to its roster.
pub fn parse_names(raw: &str) -> Vec<Participant> {
    raw.split(|c: char| NAME_SEPARATORS.contains(&c))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(Participant::new)
        .collect()
}

/// Multiplicity of each display name across the roster
pub fn name_counts(roster: &[Participant]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for participant in roster {
        *counts.entry(participant.name.clone()).or_insert(0) += 1;
    }
    counts
}

/// Read-side view of duplicated names, recomputed from a roster snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DuplicateReport {
    counts: HashMap<String, usize>,
    duplicated_names: Vec<String>,
    duplicated_ids: HashSet<ParticipantId>,
}

impl DuplicateReport {
    pub fn from_roster(roster: &[Participant]) -> Self {
        let counts = name_counts(roster);

        let mut seen = HashSet::new();
        let mut duplicated_names = Vec::new();
        let mut duplicated_ids = HashSet::new();

        for participant in roster {
            if counts.get(&participant.name).copied().unwrap_or(0) > 1 {
                duplicated_ids.insert(participant.id.clone());
                if seen.insert(participant.name.clone()) {
                    duplicated_names.push(participant.name.clone());
                }
            }
        }

        Self {
            counts,
            duplicated_names,
            duplicated_ids,
        }
    }

    pub fn has_duplicates(&self) -> bool {
        !self.duplicated_names.is_empty()
    }

    /// How many roster entries carry `name`
    pub fn count_of(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Duplicated names in first-seen order
    pub fn duplicated_names(&self) -> &[String] {
        &self.duplicated_names
    }

    /// Whether the entry with this id shares its name with another entry
    pub fn is_duplicated(&self, id: &ParticipantId) -> bool {
        self.duplicated_ids.contains(id)
    }
}

/// Keep the first occurrence of every name, in roster order
pub fn dedupe(roster: &[Participant]) -> Vec<Participant> {
    let mut seen = HashSet::new();
    roster
        .iter()
        .filter(|participant| seen.insert(participant.name.as_str()))
        .cloned()
        .collect()
}

/// Roster without the entry identified by `id`
pub fn remove(roster: &[Participant], id: &ParticipantId) -> Vec<Participant> {
    roster.iter().filter(|p| &p.id != id).cloned().collect()
}

/// Pick up to `count` distinct demo names, each with a fresh id
pub fn demo_participants(count: usize) -> Vec<Participant> {
    demo_participants_with(count, &mut rand::thread_rng())
}

pub fn demo_participants_with<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Participant> {
    shuffled_with(&DEMO_NAMES, rng)
        .into_iter()
        .take(count)
        .map(Participant::new)
        .collect()
}
