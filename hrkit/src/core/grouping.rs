//! Random group partitioning

use rand::Rng;
use shared::{ActivityPayload, Group, GroupId, NewActivity, Participant};

use crate::core::shuffle::shuffled_with;
use crate::error::{ToolkitError, ToolkitResult};

/// Default display name for the group at `index` (0-based)
pub fn default_group_name(index: usize) -> String {
    format!("Group {}", index + 1)
}

/// Shuffle the whole roster and split it into groups of `group_size`
///
/// Produces `ceil(n / group_size)` groups; only the last may be short. An
/// empty roster yields no groups.
pub fn partition(roster: &[Participant], group_size: usize) -> ToolkitResult<Vec<Group>> {
    partition_with(roster, group_size, &mut rand::thread_rng())
}

pub fn partition_with<R: Rng + ?Sized>(
    roster: &[Participant],
    group_size: usize,
    rng: &mut R,
) -> ToolkitResult<Vec<Group>> {
    if group_size == 0 {
        return Err(ToolkitError::InvalidGroupSize { size: group_size });
    }
    Ok(chunk_into_groups(&shuffled_with(roster, rng), group_size))
}

/// Split an already ordered sequence into contiguous named groups
pub fn chunk_into_groups(ordered: &[Participant], group_size: usize) -> Vec<Group> {
    if group_size == 0 {
        return Vec::new();
    }

    ordered
        .chunks(group_size)
        .enumerate()
        .map(|(index, members)| Group {
            id: GroupId::for_index(index),
            name: default_group_name(index),
            members: members.to_vec(),
        })
        .collect()
}

/// Groups with one group's display name replaced; membership untouched
pub fn rename(groups: &[Group], id: &GroupId, name: &str) -> Vec<Group> {
    groups
        .iter()
        .map(|group| {
            if &group.id == id {
                Group {
                    name: name.to_string(),
                    ..group.clone()
                }
            } else {
                group.clone()
            }
        })
        .collect()
}

/// Activity record summarising one grouping run
pub fn grouping_activity(participant_count: usize, groups: &[Group], group_size: usize) -> NewActivity {
    NewActivity {
        title: format!("Grouping complete: {participant_count} participants"),
        details: format!("{} groups (about {} per group)", groups.len(), group_size),
        payload: ActivityPayload::Grouping(groups.to_vec()),
    }
}
