use alloc::string::ToString;

use tracing::debug;

use crate::amount::Amount;
use crate::error::{CallError, StartError};
use crate::round::CallFields;
use crate::validate::{validate_call, validate_roster_size};

use super::{Game, GameState};

impl Game {
    /// Leaves roster editing and starts (or resumes) the game.
    ///
    /// Every roster player without a balance starts at zero; existing
    /// balances are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in roster editing or the roster
    /// has fewer than 5 or more than 7 players.
    pub fn start_game(&mut self) -> Result<(), StartError> {
        if self.state != GameState::RosterEditing {
            return Err(StartError::InvalidState);
        }
        validate_roster_size(self.roster.len())?;

        for player in self.roster.players() {
            self.totals.entry(player.clone()).or_insert(Amount::ZERO);
        }

        self.transition(GameState::Calling);
        Ok(())
    }

    /// Chooses the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in roster editing or calling, or the
    /// player is not in the roster.
    pub fn set_dealer(&mut self, dealer: &str) -> Result<(), CallError> {
        if !matches!(self.state, GameState::RosterEditing | GameState::Calling) {
            return Err(CallError::InvalidState);
        }
        if !self.roster.contains(dealer) {
            return Err(CallError::UnknownPlayer);
        }

        debug!(dealer, "dealer chosen");
        self.dealer = Some(dealer.to_string());
        Ok(())
    }

    /// Submits the call and starts playing the hand.
    ///
    /// A dealer named in `fields` replaces the current one.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in calling state or the call is
    /// invalid. The state is left untouched on error.
    pub fn submit_call(&mut self, fields: &CallFields) -> Result<(), CallError> {
        if self.state != GameState::Calling {
            return Err(CallError::InvalidState);
        }

        let call = validate_call(&self.roster, fields, self.dealer.as_deref())?;
        debug!(
            caller = %call.caller,
            dealer = %call.dealer,
            bid_score = call.bid_score,
            double = call.double,
            "call accepted"
        );

        self.dealer = Some(call.dealer.clone());
        self.pending = Some(call);
        self.transition(GameState::InProgress);
        Ok(())
    }
}
