//! A Marafone scoring engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the roster, the round flow
//! (call, hand, companion, results), money settlement, running totals, the
//! round history and per-player statistics.
//!
//! # Example
//!
//! ```
//! use marafone::{Amount, CallFields, CompanionFields, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default());
//! for name in ["A", "B", "C", "D", "E"] {
//!     game.add_player(name).unwrap();
//! }
//! game.start_game().unwrap();
//! game.submit_call(&CallFields::new("A", 90).with_dealer("C")).unwrap();
//! game.proceed().unwrap();
//! let result = game.submit_companion(&CompanionFields::won("B")).unwrap();
//! assert_eq!(result.delta_for("A"), Some(Amount::units(3)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod active;
pub mod amount;
pub mod error;
pub mod game;
pub mod options;
pub mod quota;
pub mod result;
pub mod roster;
pub mod round;
pub mod settlement;
pub mod stats;
pub mod store;
pub mod validate;

// Re-export main types
pub use active::active_players;
pub use amount::Amount;
pub use error::{CallError, RosterError, SettleError, StartError, StoreError};
pub use game::{Game, GameState};
pub use options::GameOptions;
pub use quota::{MAX_BID, MIN_BID, QuotaBracket, QuotaTable, quota_to_unit};
pub use result::{Outcome, PlayerDelta, RoundResult};
pub use roster::{MAX_PLAYERS, MIN_PLAYERS, Roster};
pub use round::{CallFields, CompanionFields, PendingCall, RoundInput};
pub use settlement::{settle, stake};
pub use stats::{PlayerStats, compute_stats};
pub use store::{KeyValueStore, MemoryStore, PLAYERS_KEY, load_roster, save_roster};
