use super::{Game, GameState};

impl Game {
    /// Goes back one step.
    ///
    /// From an overlay, returns to the state it was opened from (or to the
    /// results when that is unknown). From a round phase, returns to the
    /// previous phase. Going back to calling drops the pending call. Balances
    /// and history are never undone.
    pub fn go_back(&mut self) {
        let target = if self.state.is_overlay() {
            Some(self.previous.take().unwrap_or(GameState::Results))
        } else {
            self.state.previous_phase()
        };

        if let Some(target) = target {
            if self.state == GameState::InProgress {
                self.pending = None;
            }
            self.transition(target);
        }
    }

    /// Opens the running totals overlay.
    pub fn view_total(&mut self) {
        self.open_overlay(GameState::Total);
    }

    /// Opens the round history overlay.
    pub fn view_history(&mut self) {
        self.open_overlay(GameState::History);
    }

    /// Opens the statistics overlay.
    pub fn view_stats(&mut self) {
        self.open_overlay(GameState::Stats);
    }

    /// Remembers a single return state; opening an overlay from another
    /// overlay overwrites it.
    fn open_overlay(&mut self, overlay: GameState) {
        self.previous = Some(self.state);
        self.transition(overlay);
    }
}
