//! Per-player statistics derived from the round history.

use alloc::string::String;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::result::RoundResult;

/// Round counts for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Rounds the player took part in.
    pub rounds_played: u32,
    /// Rounds with a positive delta.
    pub wins: u32,
    /// Rounds with a negative delta.
    pub losses: u32,
}

/// Computes statistics for every player from the full history.
///
/// Only rounds where a player was active count. Roster players who never
/// played report zeros.
#[must_use]
pub fn compute_stats(roster: &[String], history: &[RoundResult]) -> HashMap<String, PlayerStats> {
    let mut stats: HashMap<String, PlayerStats> = HashMap::new();

    for round in history {
        for player in &round.active_players {
            let entry = stats.entry(player.clone()).or_default();
            entry.rounds_played += 1;
            match round.delta_for(player) {
                Some(delta) if delta.is_positive() => entry.wins += 1,
                Some(delta) if delta.is_negative() => entry.losses += 1,
                _ => {}
            }
        }
    }

    for player in roster {
        stats.entry(player.clone()).or_default();
    }

    stats
}
