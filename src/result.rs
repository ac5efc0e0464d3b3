//! Settled round records.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The caller and companion won.
    Won,
    /// The caller and companion lost.
    Lost,
    /// One player went out of point and pays everyone else.
    Fuoripunto,
}

impl Outcome {
    /// Returns the label shown in the round history.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Won => "Won",
            Self::Lost => "Lost",
            Self::Fuoripunto => "Fuoripunto",
        }
    }
}

/// Money won or lost by one player in a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDelta {
    /// The player name.
    pub player: String,
    /// Signed amount (positive = won).
    pub delta: Amount,
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Position of the round in the history, starting at 1.
    pub sequence: u32,
    /// The caller.
    pub caller: String,
    /// The companion, or the fuoripunto player.
    pub partner: String,
    /// The dealer of the round.
    pub dealer: String,
    /// The bid score.
    pub bid_score: u8,
    /// Whether the stake was doubled.
    pub double: bool,
    /// Whether the "no points" doubling applied.
    pub no_points: bool,
    /// How the round ended.
    pub outcome: Outcome,
    /// Deltas for every roster player, in roster order.
    pub deltas: Vec<PlayerDelta>,
    /// Players who took part in the round, in roster order.
    pub active_players: Vec<String>,
}

impl RoundResult {
    /// Returns the delta for a player, or `None` if the player was not in the
    /// roster when the round was settled.
    #[must_use]
    pub fn delta_for(&self, player: &str) -> Option<Amount> {
        self.deltas
            .iter()
            .find(|entry| entry.player == player)
            .map(|entry| entry.delta)
    }

    /// Returns whether the player took part in the round.
    #[must_use]
    pub fn is_active(&self, player: &str) -> bool {
        self.active_players.iter().any(|active| active == player)
    }
}
