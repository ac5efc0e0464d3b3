//! Game configuration options.

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::quota::QuotaTable;

/// Configuration options for a Marafone game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use marafone::{Amount, GameOptions};
///
/// let options = GameOptions::default()
///     .with_fuoripunto_quota(Amount::units(5))
///     .with_lock_roster(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    /// Table mapping bid scores to stakes.
    pub quota_table: QuotaTable,
    /// Amount each other active player wins from the fuoripunto player.
    pub fuoripunto_quota: Amount,
    /// Whether the roster is frozen once the game leaves roster editing.
    pub lock_roster: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            quota_table: QuotaTable::standard(),
            fuoripunto_quota: Amount::units(4),
            lock_roster: true,
        }
    }
}

impl GameOptions {
    /// Sets the quota table.
    ///
    /// # Example
    ///
    /// ```
    /// use marafone::{Amount, GameOptions, QuotaBracket, QuotaTable};
    ///
    /// let table = QuotaTable::from_brackets(vec![QuotaBracket::new(81, 118, Amount::units(1))]);
    /// let options = GameOptions::default().with_quota_table(table.clone());
    /// assert_eq!(options.quota_table, table);
    /// ```
    #[must_use]
    pub fn with_quota_table(mut self, table: QuotaTable) -> Self {
        self.quota_table = table;
        self
    }

    /// Sets the fuoripunto quota.
    ///
    /// # Example
    ///
    /// ```
    /// use marafone::{Amount, GameOptions};
    ///
    /// let options = GameOptions::default().with_fuoripunto_quota(Amount::units(2));
    /// assert_eq!(options.fuoripunto_quota, Amount::units(2));
    /// ```
    #[must_use]
    pub const fn with_fuoripunto_quota(mut self, quota: Amount) -> Self {
        self.fuoripunto_quota = quota;
        self
    }

    /// Sets whether the roster is locked outside roster editing.
    ///
    /// # Example
    ///
    /// ```
    /// use marafone::GameOptions;
    ///
    /// let options = GameOptions::default().with_lock_roster(false);
    /// assert_eq!(options.lock_roster, false);
    /// ```
    #[must_use]
    pub const fn with_lock_roster(mut self, lock: bool) -> Self {
        self.lock_roster = lock;
        self
    }
}
