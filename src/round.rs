//! Round inputs collected from the table.

use alloc::string::{String, ToString};

use crate::result::Outcome;

/// Fields entered when the caller makes a bid.
///
/// ```
/// use marafone::CallFields;
///
/// let call = CallFields::new("Anna", 90).with_dealer("Carlo").with_double(true);
/// assert_eq!(call.bid_score, Some(90));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallFields {
    /// The caller.
    pub caller: Option<String>,
    /// The dealer. When `None` the current dealer is kept.
    pub dealer: Option<String>,
    /// The bid score, `None` when missing or not a number.
    pub bid_score: Option<i32>,
    /// Whether the stake is doubled.
    pub double: bool,
}

impl CallFields {
    /// Creates call fields for `caller` bidding `bid_score`.
    #[must_use]
    pub fn new(caller: &str, bid_score: i32) -> Self {
        Self {
            caller: Some(caller.to_string()),
            dealer: None,
            bid_score: Some(bid_score),
            double: false,
        }
    }

    /// Sets the dealer.
    #[must_use]
    pub fn with_dealer(mut self, dealer: &str) -> Self {
        self.dealer = Some(dealer.to_string());
        self
    }

    /// Sets the bid score from free text.
    ///
    /// Text that is not an integer leaves the score unset, so the call is
    /// rejected as an invalid score.
    #[must_use]
    pub fn with_score_text(mut self, text: &str) -> Self {
        self.bid_score = text.trim().parse().ok();
        self
    }

    /// Sets whether the stake is doubled.
    #[must_use]
    pub const fn with_double(mut self, double: bool) -> Self {
        self.double = double;
        self
    }
}

/// Fields entered once the hand is over.
///
/// `partner` is the companion for [`Outcome::Won`] and [`Outcome::Lost`], and
/// the player going out of point for [`Outcome::Fuoripunto`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionFields {
    /// How the round ended.
    pub outcome: Outcome,
    /// The companion or fuoripunto player.
    pub partner: Option<String>,
    /// Whether the stake is doubled again for a hand without points.
    pub no_points: bool,
}

impl CompanionFields {
    /// The caller won with `companion`.
    #[must_use]
    pub fn won(companion: &str) -> Self {
        Self::with_partner(Outcome::Won, companion)
    }

    /// The caller lost with `companion`.
    #[must_use]
    pub fn lost(companion: &str) -> Self {
        Self::with_partner(Outcome::Lost, companion)
    }

    /// `player` went out of point.
    #[must_use]
    pub fn fuoripunto(player: &str) -> Self {
        Self::with_partner(Outcome::Fuoripunto, player)
    }

    /// Fields with an outcome but no partner selected yet.
    #[must_use]
    pub const fn unselected(outcome: Outcome) -> Self {
        Self {
            outcome,
            partner: None,
            no_points: false,
        }
    }

    /// Sets whether the "no points" doubling applies.
    #[must_use]
    pub const fn with_no_points(mut self, no_points: bool) -> Self {
        self.no_points = no_points;
        self
    }

    fn with_partner(outcome: Outcome, partner: &str) -> Self {
        Self {
            outcome,
            partner: Some(partner.to_string()),
            no_points: false,
        }
    }
}

/// A call that passed validation and waits for the hand to finish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCall {
    /// The caller.
    pub caller: String,
    /// The dealer of the round.
    pub dealer: String,
    /// The bid score, within 81..=118.
    pub bid_score: u8,
    /// Whether the stake is doubled.
    pub double: bool,
}

/// Everything needed to settle a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundInput {
    /// The caller.
    pub caller: String,
    /// The companion or fuoripunto player.
    pub partner: String,
    /// The bid score.
    pub bid_score: u8,
    /// Whether the stake is doubled.
    pub double: bool,
    /// Whether the "no points" doubling applies.
    pub no_points: bool,
    /// How the round ended.
    pub outcome: Outcome,
}
