//! Checks run before a round may move forward.

use alloc::string::String;

use crate::active::active_players;
use crate::error::{CallError, SettleError, StartError};
use crate::quota::is_valid_bid;
use crate::result::Outcome;
use crate::roster::{MAX_PLAYERS, MIN_PLAYERS, Roster};
use crate::round::{CallFields, CompanionFields, PendingCall, RoundInput};

/// Checks that a table of `players` may start a game.
///
/// # Errors
///
/// Returns an error if there are fewer than 5 or more than 7 players.
pub const fn validate_roster_size(players: usize) -> Result<(), StartError> {
    if players < MIN_PLAYERS {
        return Err(StartError::RosterTooSmall);
    }
    if players > MAX_PLAYERS {
        return Err(StartError::RosterTooLarge);
    }
    Ok(())
}

/// Validates a call against the roster and the current dealer.
///
/// A dealer named in `fields` takes precedence over `current_dealer`.
///
/// # Errors
///
/// Returns an error if the caller is missing, the score is not within
/// 81..=118, no dealer is known, a named player is not in the roster, the
/// caller is the dealer, or the caller sits out this round.
pub fn validate_call(
    roster: &Roster,
    fields: &CallFields,
    current_dealer: Option<&str>,
) -> Result<PendingCall, CallError> {
    let caller = fields
        .caller
        .as_deref()
        .filter(|caller| !caller.is_empty())
        .ok_or(CallError::CallerMissing)?;

    let bid_score = fields
        .bid_score
        .filter(|&score| is_valid_bid(score))
        .and_then(|score| u8::try_from(score).ok())
        .ok_or(CallError::InvalidScore)?;

    let dealer = fields
        .dealer
        .as_deref()
        .or(current_dealer)
        .filter(|dealer| !dealer.is_empty())
        .ok_or(CallError::DealerMissing)?;

    if !roster.contains(caller) || !roster.contains(dealer) {
        return Err(CallError::UnknownPlayer);
    }
    if caller == dealer {
        return Err(CallError::DealerEqualsCaller);
    }

    let active = active_players(roster.players(), Some(dealer));
    if !active.iter().any(|player| player == caller) {
        return Err(CallError::CallerInactive);
    }

    Ok(PendingCall {
        caller: caller.into(),
        dealer: dealer.into(),
        bid_score,
        double: fields.double,
    })
}

/// Validates the companion or fuoripunto player for a pending call.
///
/// # Errors
///
/// Returns an error if the caller or dealer of the call left the roster, the
/// caller no longer plays, or the partner required by the outcome is missing,
/// not in the roster, sits out the round, or (for a companion) is the caller.
pub fn validate_settlement(
    call: &PendingCall,
    fields: &CompanionFields,
    roster: &Roster,
    active: &[String],
) -> Result<RoundInput, SettleError> {
    let is_active = |name: &str| active.iter().any(|player| player == name);

    if !roster.contains(&call.caller) || !roster.contains(&call.dealer) {
        return Err(SettleError::UnknownPlayer);
    }
    if !is_active(&call.caller) {
        return Err(SettleError::CallerInactive);
    }

    let partner = fields.partner.as_deref().filter(|name| !name.is_empty());

    let partner = match fields.outcome {
        Outcome::Fuoripunto => {
            let target = partner.ok_or(SettleError::FuoripuntoTargetMissing)?;
            if !roster.contains(target) {
                return Err(SettleError::UnknownPlayer);
            }
            if !is_active(target) {
                return Err(SettleError::FuoripuntoTargetInactive);
            }
            target
        }
        Outcome::Won | Outcome::Lost => {
            let companion = partner.ok_or(SettleError::CompanionMissing)?;
            if companion == call.caller {
                return Err(SettleError::CompanionEqualsCaller);
            }
            if !roster.contains(companion) {
                return Err(SettleError::UnknownPlayer);
            }
            if !is_active(companion) {
                return Err(SettleError::CompanionInactive);
            }
            companion
        }
    };

    Ok(RoundInput {
        caller: call.caller.clone(),
        partner: partner.into(),
        bid_score: call.bid_score,
        double: call.double,
        no_points: fields.no_points,
        outcome: fields.outcome,
    })
}
