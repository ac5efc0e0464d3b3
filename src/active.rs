//! Which players take part in a round.

use alloc::string::String;
use alloc::vec::Vec;

/// Returns the players who play a round, in roster order.
///
/// The table size is the roster length:
///
/// - 5 players: everyone plays, the dealer included.
/// - 6 players: the dealer sits out.
/// - 7 players: the dealer and the player seated just before the dealer
///   (circularly) sit out.
///
/// Any other size, or a dealer that is unset or not in the roster, yields the
/// full roster.
///
/// # Example
///
/// ```
/// use marafone::active_players;
///
/// let roster: Vec<String> = ["A", "B", "C", "D", "E", "F", "G"]
///     .iter()
///     .map(|name| name.to_string())
///     .collect();
/// let active = active_players(&roster, Some("A"));
/// assert_eq!(active, ["B", "C", "D", "E", "F"]);
/// ```
#[must_use]
pub fn active_players(roster: &[String], dealer: Option<&str>) -> Vec<String> {
    let dealer_index = dealer.and_then(|dealer| roster.iter().position(|player| player == dealer));

    match (roster.len(), dealer_index) {
        (6, Some(dealer_index)) => roster
            .iter()
            .enumerate()
            .filter(|&(index, _)| index != dealer_index)
            .map(|(_, player)| player.clone())
            .collect(),
        (7, Some(dealer_index)) => {
            let excluded = (dealer_index + roster.len() - 1) % roster.len();
            roster
                .iter()
                .enumerate()
                .filter(|&(index, _)| index != dealer_index && index != excluded)
                .map(|(_, player)| player.clone())
                .collect()
        }
        _ => roster.to_vec(),
    }
}
