//! Money owed by each player for a round.

use alloc::string::String;
use alloc::vec::Vec;

use crate::amount::Amount;
use crate::options::GameOptions;
use crate::quota::QuotaTable;
use crate::result::{Outcome, PlayerDelta};
use crate::round::RoundInput;

/// Returns the stake of a normal round.
///
/// The quota for `bid_score` is doubled once for a doubled call and once more
/// for a hand without points.
#[must_use]
pub fn stake(table: &QuotaTable, bid_score: u8, double: bool, no_points: bool) -> Amount {
    let mut multiplier = 1;
    if double {
        multiplier *= 2;
    }
    if no_points {
        multiplier *= 2;
    }
    table.quota(i32::from(bid_score)) * multiplier
}

/// Computes the delta for every roster player.
///
/// Players outside `active` always get zero.
///
/// - [`Outcome::Won`]: the caller gets twice the stake, the companion the
///   stake, and every other active player pays the stake.
/// - [`Outcome::Lost`]: the same amounts with the signs flipped.
/// - [`Outcome::Fuoripunto`]: the bid is ignored; every other active player
///   gets the fuoripunto quota and the partner pays all of it.
#[must_use]
pub fn settle(
    round: &RoundInput,
    roster: &[String],
    active: &[String],
    options: &GameOptions,
) -> Vec<PlayerDelta> {
    let is_active = |player: &str| active.iter().any(|name| name == player);

    roster
        .iter()
        .map(|player| {
            let delta = if is_active(player) {
                active_delta(round, player, active.len(), options)
            } else {
                Amount::ZERO
            };
            PlayerDelta {
                player: player.clone(),
                delta,
            }
        })
        .collect()
}

fn active_delta(round: &RoundInput, player: &str, active: usize, options: &GameOptions) -> Amount {
    match round.outcome {
        Outcome::Fuoripunto => {
            let quota = options.fuoripunto_quota;
            if player == round.partner {
                #[expect(clippy::cast_possible_wrap, reason = "at most 7 players")]
                let others = active.saturating_sub(1) as i64;
                -(quota * others)
            } else {
                quota
            }
        }
        Outcome::Won | Outcome::Lost => {
            let amount = stake(
                &options.quota_table,
                round.bid_score,
                round.double,
                round.no_points,
            );
            let won = if player == round.caller {
                amount * 2
            } else if player == round.partner {
                amount
            } else {
                -amount
            };
            if round.outcome == Outcome::Won {
                won
            } else {
                -won
            }
        }
    }
}
