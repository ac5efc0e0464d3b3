//! Game engine and state management.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::active::active_players;
use crate::amount::Amount;
use crate::error::{RosterError, StoreError};
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::roster::Roster;
use crate::round::PendingCall;
use crate::stats::{PlayerStats, compute_stats};
use crate::store::{KeyValueStore, load_roster, save_roster};

mod call;
mod navigation;
mod settle;
pub mod state;

pub use state::GameState;

/// A Marafone scoring engine that manages the roster, rounds and balances.
///
/// The game owns every piece of state: roster, dealer, pending call, running
/// totals and history. Use [`GameOptions`] to configure the quota table, the
/// fuoripunto quota and roster locking.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current state.
    state: GameState,
    /// State to return to when leaving an overlay.
    previous: Option<GameState>,
    /// Players in seating order.
    roster: Roster,
    /// Current dealer.
    dealer: Option<String>,
    /// Validated call of the round being played.
    pending: Option<PendingCall>,
    /// Running totals (`player` -> balance).
    totals: HashMap<String, Amount>,
    /// Settled rounds, oldest first.
    history: Vec<RoundResult>,
    /// Where the roster is persisted.
    store: Option<Box<dyn KeyValueStore>>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("previous", &self.previous)
            .field("roster", &self.roster)
            .field("dealer", &self.dealer)
            .field("pending", &self.pending)
            .field("rounds", &self.history.len())
            .field("persisted", &self.store.is_some())
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Creates a new game with an empty roster.
    ///
    /// # Example
    ///
    /// ```
    /// use marafone::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default());
    /// assert_eq!(game.state(), GameState::RosterEditing);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        Self {
            options,
            state: GameState::RosterEditing,
            previous: None,
            roster: Roster::new(),
            dealer: None,
            pending: None,
            totals: HashMap::new(),
            history: Vec::new(),
            store: None,
        }
    }

    /// Creates a game whose roster is loaded from, and saved to, `store`.
    ///
    /// Stored names that cannot join the roster (blank, duplicated, or beyond
    /// the seventh) are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored roster is malformed.
    pub fn with_store(
        options: GameOptions,
        store: Box<dyn KeyValueStore>,
    ) -> Result<Self, StoreError> {
        let names = load_roster(&*store)?;
        let mut game = Self::new(options);

        for name in &names {
            if let Err(err) = game.roster.add(name) {
                warn!(player = %name, error = %err, "skipping stored player");
            }
        }
        debug!(players = game.roster.len(), "roster loaded");

        game.store = Some(store);
        Ok(game)
    }

    /// Adds a player at the end of the roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster is locked or a call is pending, the name
    /// is blank or taken, or the roster is full.
    pub fn add_player(&mut self, name: &str) -> Result<(), RosterError> {
        self.ensure_roster_editable()?;
        self.roster.add(name)?;
        self.persist_roster();
        Ok(())
    }

    /// Removes a player from the roster.
    ///
    /// The dealer is cleared when removing during roster editing, or when the
    /// removed player was the dealer. The removed player's balance is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster is locked, a call is pending, or the
    /// player is not found.
    pub fn remove_player(&mut self, name: &str) -> Result<(), RosterError> {
        self.ensure_roster_editable()?;
        self.roster.remove(name)?;

        if self.state == GameState::RosterEditing || self.dealer.as_deref() == Some(name) {
            self.dealer = None;
        }
        self.persist_roster();
        Ok(())
    }

    /// The roster stays fixed while a call is pending, even when unlocked.
    fn ensure_roster_editable(&self) -> Result<(), RosterError> {
        if self.pending.is_some() {
            return Err(RosterError::RosterLocked);
        }
        if self.options.lock_roster && self.state != GameState::RosterEditing {
            return Err(RosterError::RosterLocked);
        }
        Ok(())
    }

    fn persist_roster(&mut self) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        if let Err(err) = save_roster(&mut **store, self.roster.players()) {
            warn!(error = %err, "failed to persist roster");
        }
    }

    fn transition(&mut self, to: GameState) {
        debug!(from = ?self.state, to = ?to, "state transition");
        self.state = to;
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the roster.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the current dealer.
    #[must_use]
    pub fn dealer(&self) -> Option<&str> {
        self.dealer.as_deref()
    }

    /// Returns the players who play the current round.
    #[must_use]
    pub fn active_players(&self) -> Vec<String> {
        active_players(self.roster.players(), self.dealer.as_deref())
    }

    /// Returns the validated call of the round being played.
    #[must_use]
    pub const fn pending_call(&self) -> Option<&PendingCall> {
        self.pending.as_ref()
    }

    /// Returns the running totals (`player` -> balance).
    #[must_use]
    pub const fn current_totals(&self) -> &HashMap<String, Amount> {
        &self.totals
    }

    /// Returns the running total for a player.
    #[must_use]
    pub fn total_for(&self, player: &str) -> Option<Amount> {
        self.totals.get(player).copied()
    }

    /// Returns the settled rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }

    /// Returns the most recently settled round.
    #[must_use]
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.history.last()
    }

    /// Computes statistics for every player from the history.
    #[must_use]
    pub fn statistics(&self) -> HashMap<String, PlayerStats> {
        compute_stats(self.roster.players(), &self.history)
    }
}
