//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Adding and removing players.
    RosterEditing,
    /// Waiting for the caller, bid and dealer.
    Calling,
    /// The hand is being played.
    InProgress,
    /// Waiting for the outcome and the companion or fuoripunto player.
    CompanionSelection,
    /// The round has been settled.
    Results,
    /// Running totals overlay.
    Total,
    /// Round history overlay.
    History,
    /// Statistics overlay.
    Stats,
}

impl GameState {
    /// Returns whether the state is an overlay view.
    #[must_use]
    pub const fn is_overlay(self) -> bool {
        matches!(self, Self::Total | Self::History | Self::Stats)
    }

    /// Returns the state reached by going back, for the round phases.
    ///
    /// Overlays and roster editing have no fixed predecessor.
    #[must_use]
    pub const fn previous_phase(self) -> Option<Self> {
        match self {
            Self::Calling => Some(Self::RosterEditing),
            Self::InProgress => Some(Self::Calling),
            Self::CompanionSelection => Some(Self::InProgress),
            Self::Results => Some(Self::CompanionSelection),
            Self::RosterEditing | Self::Total | Self::History | Self::Stats => None,
        }
    }
}
