//! Ordered player roster.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::RosterError;

/// Minimum number of players needed to start a game.
pub const MIN_PLAYERS: usize = 5;

/// Maximum number of players at the table.
pub const MAX_PLAYERS: usize = 7;

/// The ordered list of players.
///
/// Order of insertion is kept: it decides who sits out at a 7-player table and
/// the direction in which the dealer rotates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<String>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            players: Vec::new(),
        }
    }

    /// Adds a player at the end of the roster.
    ///
    /// The name is trimmed before it is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank, the roster already has
    /// [`MAX_PLAYERS`] players, or the name is taken.
    pub fn add(&mut self, name: &str) -> Result<(), RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(RosterError::RosterFull);
        }
        if self.contains(name) {
            return Err(RosterError::DuplicateName);
        }

        self.players.push(name.to_string());
        Ok(())
    }

    /// Removes a player, keeping the order of the others.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not in the roster.
    pub fn remove(&mut self, name: &str) -> Result<(), RosterError> {
        let index = self.index_of(name).ok_or(RosterError::PlayerNotFound)?;
        self.players.remove(index);
        Ok(())
    }

    /// Returns the position of a player.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|player| player == name)
    }

    /// Returns whether the player is in the roster.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Returns the player seated after `name`, wrapping around.
    #[must_use]
    pub fn next_after(&self, name: &str) -> Option<&str> {
        let index = self.index_of(name)?;
        let next = (index + 1) % self.players.len();
        self.players.get(next).map(String::as_str)
    }

    /// Returns the number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns the players in order.
    #[must_use]
    pub fn players(&self) -> &[String] {
        &self.players
    }
}
