use alloc::string::String;

use tracing::{debug, info};

use crate::active::active_players;
use crate::amount::Amount;
use crate::error::SettleError;
use crate::result::RoundResult;
use crate::roster::MIN_PLAYERS;
use crate::round::CompanionFields;
use crate::settlement::settle;
use crate::validate::validate_settlement;

use super::{Game, GameState};

impl Game {
    /// Moves from playing the hand to choosing the companion.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress.
    pub fn proceed(&mut self) -> Result<(), SettleError> {
        if self.state != GameState::InProgress {
            return Err(SettleError::InvalidState);
        }
        self.transition(GameState::CompanionSelection);
        Ok(())
    }

    /// Settles the round.
    ///
    /// This function:
    /// 1. Validates the companion or fuoripunto player
    /// 2. Computes the delta for every roster player
    /// 3. Appends the round to the history
    /// 4. Adds the deltas to the running totals
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in companion selection or the
    /// partner is invalid. Nothing is recorded on error.
    pub fn submit_companion(
        &mut self,
        fields: &CompanionFields,
    ) -> Result<RoundResult, SettleError> {
        if self.state != GameState::CompanionSelection {
            return Err(SettleError::InvalidState);
        }
        let call = self.pending.as_ref().ok_or(SettleError::InvalidState)?;

        let active = active_players(self.roster.players(), Some(&call.dealer));
        let round = validate_settlement(call, fields, &self.roster, &active)?;
        let deltas = settle(&round, self.roster.players(), &active, &self.options);

        for entry in &deltas {
            *self
                .totals
                .entry(entry.player.clone())
                .or_insert(Amount::ZERO) += entry.delta;
        }

        let sequence = u32::try_from(self.history.len() + 1).unwrap_or(u32::MAX);
        let result = RoundResult {
            sequence,
            caller: round.caller,
            partner: round.partner,
            dealer: call.dealer.clone(),
            bid_score: round.bid_score,
            double: round.double,
            no_points: round.no_points,
            outcome: round.outcome,
            deltas,
            active_players: active,
        };
        info!(
            sequence,
            outcome = result.outcome.label(),
            caller = %result.caller,
            partner = %result.partner,
            "round settled"
        );

        self.history.push(result.clone());
        self.transition(GameState::Results);
        Ok(result)
    }

    /// Starts a new round after the results.
    ///
    /// Clears the pending call and passes the deal to the next player in
    /// roster order. Outside the results state this does nothing.
    pub fn new_round(&mut self) {
        if self.state != GameState::Results {
            debug!(state = ?self.state, "new round ignored outside results");
            return;
        }

        self.pending = None;

        if self.roster.len() >= MIN_PLAYERS {
            if let Some(dealer) = self.dealer.as_deref() {
                let next = self
                    .roster
                    .next_after(dealer)
                    .or_else(|| self.roster.players().first().map(String::as_str))
                    .map(String::from);
                debug!(from = dealer, to = ?next, "dealer rotated");
                self.dealer = next;
            }
        }

        self.transition(GameState::Calling);
    }
}
