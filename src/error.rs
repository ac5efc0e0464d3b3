//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while editing the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Player name is empty or whitespace.
    #[error("player name cannot be empty")]
    EmptyName,
    /// Roster already holds the maximum number of players.
    #[error("the roster already has the maximum number of players")]
    RosterFull,
    /// A player with this name is already in the roster.
    #[error("this player has already been added")]
    DuplicateName,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The roster cannot change while a game is in progress.
    #[error("the roster cannot change while a game is in progress")]
    RosterLocked,
}

/// Errors that can occur when starting the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// Fewer than the minimum number of players.
    #[error("at least 5 players are required")]
    RosterTooSmall,
    /// More than the maximum number of players.
    #[error("at most 7 players can play")]
    RosterTooLarge,
    /// Invalid game state for starting.
    #[error("invalid game state for starting")]
    InvalidState,
}

/// Errors that can occur when submitting a call or choosing the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CallError {
    /// No caller was selected.
    #[error("select the caller")]
    CallerMissing,
    /// Bid score is missing, non-numeric, or outside 81..=118.
    #[error("invalid score, it must be between 81 and 118")]
    InvalidScore,
    /// No dealer was selected.
    #[error("select the dealer")]
    DealerMissing,
    /// Named player is not in the roster.
    #[error("player not found")]
    UnknownPlayer,
    /// Caller and dealer are the same player.
    #[error("the dealer cannot be the caller")]
    DealerEqualsCaller,
    /// Caller sits out this round.
    #[error("the caller does not play this round")]
    CallerInactive,
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
}

/// Errors that can occur when submitting the companion or fuoripunto target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// Caller of the pending call no longer plays this round.
    #[error("the caller does not play this round")]
    CallerInactive,
    /// No companion was selected.
    #[error("select a companion")]
    CompanionMissing,
    /// Companion and caller are the same player.
    #[error("the companion cannot be the caller")]
    CompanionEqualsCaller,
    /// Companion sits out this round.
    #[error("the companion does not play this round")]
    CompanionInactive,
    /// No fuoripunto player was selected.
    #[error("select the fuoripunto player")]
    FuoripuntoTargetMissing,
    /// Fuoripunto player sits out this round.
    #[error("the fuoripunto player does not play this round")]
    FuoripuntoTargetInactive,
    /// Named player is not in the roster.
    #[error("player not found")]
    UnknownPlayer,
    /// Invalid game state for settling.
    #[error("invalid game state for settling")]
    InvalidState,
}

/// Errors that can occur while reading or writing the roster store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Stored value is not a JSON list of names.
    #[error("stored roster is malformed")]
    Malformed,
    /// The backing store rejected the write.
    #[error("failed to write the roster")]
    WriteFailed,
}
