//! Draw pool computation and draw resolution
//!
//! A draw asking for more winners than the pool holds is clamped to the pool
//! size. Only an empty pool or a zero count is refused.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::Rng;
use shared::{ActivityPayload, NewActivity, Participant, ParticipantId, Winner};

use crate::core::shuffle::shuffled_with;
use crate::error::{ToolkitError, ToolkitResult};

/// Parameters of a single draw
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRequest {
    pub count: usize,
    pub prize: String,
    pub allow_repeat: bool,
}

impl DrawRequest {
    pub fn new(count: usize, prize: impl Into<String>) -> Self {
        Self {
            count,
            prize: prize.into(),
            allow_repeat: false,
        }
    }

    pub fn allow_repeat(mut self, allow_repeat: bool) -> Self {
        self.allow_repeat = allow_repeat;
        self
    }
}

/// Participants eligible for the next draw
///
/// With repeats allowed the whole roster is eligible. Otherwise anyone whose
/// id is already among the winners is excluded; names play no part.
pub fn eligible_pool(roster: &[Participant], winners: &[Winner], allow_repeat: bool) -> Vec<Participant> {
    if allow_repeat {
        return roster.to_vec();
    }

    let winner_ids: HashSet<&ParticipantId> = winners.iter().map(Winner::id).collect();
    roster
        .iter()
        .filter(|participant| !winner_ids.contains(&participant.id))
        .cloned()
        .collect()
}

/// Pick `min(count, pool.len())` winners from a shuffled pool
pub fn resolve_draw(
    pool: &[Participant],
    count: usize,
    prize: &str,
    won_at: DateTime<Utc>,
) -> ToolkitResult<Vec<Winner>> {
    resolve_draw_with(pool, count, prize, won_at, &mut rand::thread_rng())
}

pub fn resolve_draw_with<R: Rng + ?Sized>(
    pool: &[Participant],
    count: usize,
    prize: &str,
    won_at: DateTime<Utc>,
    rng: &mut R,
) -> ToolkitResult<Vec<Winner>> {
    if pool.is_empty() {
        return Err(ToolkitError::EmptyPool);
    }
    if count == 0 {
        return Err(ToolkitError::InvalidDrawCount { count });
    }

    let selected = shuffled_with(pool, rng)
        .into_iter()
        .take(count.min(pool.len()))
        .map(|participant| Winner::new(participant, prize, won_at))
        .collect();

    Ok(selected)
}

/// Session winner list with the newest batch in front
pub fn record_winners(existing: &[Winner], batch: &[Winner]) -> Vec<Winner> {
    let mut combined = Vec::with_capacity(existing.len() + batch.len());
    combined.extend_from_slice(batch);
    combined.extend_from_slice(existing);
    combined
}

/// Activity record summarising one resolved draw
pub fn draw_activity(prize: &str, batch: &[Winner]) -> NewActivity {
    let names: Vec<&str> = batch.iter().map(Winner::name).collect();
    NewActivity {
        title: format!("{} (x{})", prize, batch.len()),
        details: format!("Winners: {}", names.join(", ")),
        payload: ActivityPayload::LuckyDraw(batch.to_vec()),
    }
}
