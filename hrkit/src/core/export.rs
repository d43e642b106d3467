//! Flat row projections handed to an external CSV writer

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{ActivityLog, ActivityPayload, Group, Winner};

const EXPORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One exported winner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinnerExportRow {
    pub id: String,
    pub name: String,
    pub prize: String,
    pub time: String,
}

/// One exported group member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupExportRow {
    pub group_id: String,
    pub group_name: String,
    pub member_id: String,
    pub member_name: String,
}

/// Rows exported for a stored activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExportRows {
    Winners(Vec<WinnerExportRow>),
    Groups(Vec<GroupExportRow>),
}

impl ExportRows {
    pub fn len(&self) -> usize {
        match self {
            ExportRows::Winners(rows) => rows.len(),
            ExportRows::Groups(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn format_export_time(time: &DateTime<Utc>) -> String {
    time.format(EXPORT_TIME_FORMAT).to_string()
}

pub fn winner_rows(winners: &[Winner]) -> Vec<WinnerExportRow> {
    winners
        .iter()
        .map(|winner| WinnerExportRow {
            id: winner.id().to_string(),
            name: winner.name().to_string(),
            prize: winner.prize.clone(),
            time: format_export_time(&winner.won_at),
        })
        .collect()
}

/// One row per member, groups in order
pub fn group_rows(groups: &[Group]) -> Vec<GroupExportRow> {
    groups
        .iter()
        .flat_map(|group| {
            group.members.iter().map(move |member| GroupExportRow {
                group_id: group.id.to_string(),
                group_name: group.name.clone(),
                member_id: member.id.to_string(),
                member_name: member.name.clone(),
            })
        })
        .collect()
}

pub fn activity_rows(activity: &ActivityLog) -> ExportRows {
    match &activity.payload {
        ActivityPayload::LuckyDraw(winners) => ExportRows::Winners(winner_rows(winners)),
        ActivityPayload::Grouping(groups) => ExportRows::Groups(group_rows(groups)),
    }
}
