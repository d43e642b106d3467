//! Core shared types and identifiers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::{SharedError, SharedResult};

/// Opaque identifier for a roster entry
///
/// Identity of a participant is its id, never its name: two entries may share
/// a display name and still be distinct.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn from_string(s: &str) -> SharedResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SharedError::InvalidId { input: s.to_string() });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a persisted activity record
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(String);

impl ActivityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn from_string(s: &str) -> SharedResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SharedError::InvalidId { input: s.to_string() });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ActivityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Group identifier, synthetic and derived from the group's position
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Stable id for the group at `index` (0-based)
    pub fn for_index(index: usize) -> Self {
        Self(format!("group-{index}"))
    }

    pub fn from_string(s: &str) -> SharedResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SharedError::InvalidId { input: s.to_string() });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single roster entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

impl Participant {
    /// Create a participant with a freshly generated id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new(),
            name: name.into(),
        }
    }

    pub fn with_id(id: ParticipantId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// A participant stamped with the prize and the moment it was drawn
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Winner {
    #[serde(flatten)]
    pub participant: Participant,
    pub won_at: DateTime<Utc>,
    pub prize: String,
}

impl Winner {
    pub fn new(participant: Participant, prize: impl Into<String>, won_at: DateTime<Utc>) -> Self {
        Self {
            participant,
            won_at,
            prize: prize.into(),
        }
    }

    pub fn id(&self) -> &ParticipantId {
        &self.participant.id
    }

    pub fn name(&self) -> &str {
        &self.participant.name
    }
}

/// A fixed-membership partition of the roster
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub members: Vec<Participant>,
}

impl Group {
    pub fn member_names(&self) -> Vec<String> {
        self.members.iter().map(|m| m.name.clone()).collect()
    }
}

/// Kind of a logged activity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    LuckyDraw,
    Grouping,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityKind::LuckyDraw => write!(f, "LUCKY_DRAW"),
            ActivityKind::Grouping => write!(f, "GROUPING"),
        }
    }
}

/// Payload carried by an activity record
///
/// Serialized next to the record's other fields as `"type"` + `"data"`, so the
/// kind tag and the payload can never disagree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ActivityPayload {
    #[serde(rename = "LUCKY_DRAW")]
    LuckyDraw(Vec<Winner>),
    #[serde(rename = "GROUPING")]
    Grouping(Vec<Group>),
}

impl ActivityPayload {
    pub fn kind(&self) -> ActivityKind {
        match self {
            ActivityPayload::LuckyDraw(_) => ActivityKind::LuckyDraw,
            ActivityPayload::Grouping(_) => ActivityKind::Grouping,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ActivityPayload::LuckyDraw(winners) => winners.len(),
            ActivityPayload::Grouping(groups) => groups.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A persisted record of one draw or grouping operation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: ActivityId,
    pub timestamp: DateTime<Utc>,
    pub title: String,
    pub details: String,
    #[serde(flatten)]
    pub payload: ActivityPayload,
}

impl ActivityLog {
    pub fn kind(&self) -> ActivityKind {
        self.payload.kind()
    }
}

/// Activity content before the log store assigns an id and timestamp
#[derive(Clone, Debug, PartialEq)]
pub struct NewActivity {
    pub title: String,
    pub details: String,
    pub payload: ActivityPayload,
}
