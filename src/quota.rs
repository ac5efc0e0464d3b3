//! Bid score to stake conversion.

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// Lowest valid bid score.
pub const MIN_BID: u8 = 81;

/// Highest valid bid score.
pub const MAX_BID: u8 = 118;

/// An inclusive range of bid scores sharing the same quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaBracket {
    /// Lowest score of the bracket.
    pub low: u8,
    /// Highest score of the bracket.
    pub high: u8,
    /// Stake for a score within the bracket.
    pub quota: Amount,
}

impl QuotaBracket {
    /// Creates a bracket covering `low..=high`.
    #[must_use]
    pub const fn new(low: u8, high: u8, quota: Amount) -> Self {
        Self { low, high, quota }
    }

    /// Returns whether `score` falls within the bracket.
    #[must_use]
    pub fn contains(&self, score: i32) -> bool {
        (i32::from(self.low)..=i32::from(self.high)).contains(&score)
    }
}

const STANDARD_BRACKETS: [QuotaBracket; 7] = [
    QuotaBracket::new(81, 86, Amount::from_cents(100)),
    QuotaBracket::new(87, 90, Amount::from_cents(150)),
    QuotaBracket::new(91, 96, Amount::from_cents(200)),
    QuotaBracket::new(97, 100, Amount::from_cents(250)),
    QuotaBracket::new(101, 106, Amount::from_cents(300)),
    QuotaBracket::new(107, 110, Amount::from_cents(350)),
    QuotaBracket::new(111, 118, Amount::from_cents(400)),
];

/// Step table mapping a bid score to its base stake.
///
/// Scores that fall outside every bracket map to [`Amount::ZERO`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaTable {
    brackets: Vec<QuotaBracket>,
}

impl Default for QuotaTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl QuotaTable {
    /// The standard table, from 1 unit at 81–86 up to 4 units at 111–118.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            brackets: STANDARD_BRACKETS.to_vec(),
        }
    }

    /// Creates a table from custom brackets.
    ///
    /// Brackets are matched in order; the first one containing the score wins.
    #[must_use]
    pub const fn from_brackets(brackets: Vec<QuotaBracket>) -> Self {
        Self { brackets }
    }

    /// Returns the brackets of the table.
    #[must_use]
    pub fn brackets(&self) -> &[QuotaBracket] {
        &self.brackets
    }

    /// Returns the stake for `score`, or zero if no bracket contains it.
    #[must_use]
    pub fn quota(&self, score: i32) -> Amount {
        lookup(&self.brackets, score)
    }
}

/// Maps a bid score to its stake using the standard table.
///
/// # Example
///
/// ```
/// use marafone::{Amount, quota_to_unit};
///
/// assert_eq!(quota_to_unit(87), Amount::from_cents(150));
/// assert_eq!(quota_to_unit(119), Amount::ZERO);
/// ```
#[must_use]
pub fn quota_to_unit(score: i32) -> Amount {
    lookup(&STANDARD_BRACKETS, score)
}

fn lookup(brackets: &[QuotaBracket], score: i32) -> Amount {
    brackets
        .iter()
        .find(|bracket| bracket.contains(score))
        .map_or(Amount::ZERO, |bracket| bracket.quota)
}

/// Returns whether `score` is a valid bid.
#[must_use]
pub fn is_valid_bid(score: i32) -> bool {
    (i32::from(MIN_BID)..=i32::from(MAX_BID)).contains(&score)
}
