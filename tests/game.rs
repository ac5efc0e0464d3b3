//! Game integration tests.

use marafone::validate::validate_settlement;
use marafone::{
    Amount, CallError, CallFields, CompanionFields, Game, GameOptions, GameState, KeyValueStore,
    MemoryStore, Outcome, PLAYERS_KEY, PendingCall, PlayerDelta, Roster, RosterError,
    RoundResult, SettleError, StartError, active_players, compute_stats,
};

fn names(players: &[&str]) -> Vec<String> {
    players.iter().map(ToString::to_string).collect()
}

fn game_with(players: &[&str]) -> Game {
    let mut game = Game::new(GameOptions::default());
    for player in players {
        game.add_player(player).unwrap();
    }
    game
}

fn started(players: &[&str], dealer: &str) -> Game {
    let mut game = game_with(players);
    game.set_dealer(dealer).unwrap();
    game.start_game().unwrap();
    game
}

fn play_round(game: &mut Game, call: &CallFields, companion: &CompanionFields) {
    game.submit_call(call).unwrap();
    game.proceed().unwrap();
    game.submit_companion(companion).unwrap();
}

const FIVE: [&str; 5] = ["A", "B", "C", "D", "E"];
const SIX: [&str; 6] = ["A", "B", "C", "D", "E", "F"];
const SEVEN: [&str; 7] = ["A", "B", "C", "D", "E", "F", "G"];

#[test]
fn roster_rejects_invalid_names() {
    let mut game = game_with(&SEVEN);
    assert_eq!(game.add_player("H").unwrap_err(), RosterError::RosterFull);

    let mut game = game_with(&["A"]);
    assert_eq!(game.add_player("   ").unwrap_err(), RosterError::EmptyName);
    assert_eq!(game.add_player("A").unwrap_err(), RosterError::DuplicateName);
    assert_eq!(game.add_player(" A ").unwrap_err(), RosterError::DuplicateName);
    assert_eq!(
        game.remove_player("Z").unwrap_err(),
        RosterError::PlayerNotFound
    );
}

#[test]
fn start_requires_five_to_seven_players() {
    let mut game = game_with(&["A", "B", "C", "D"]);
    assert_eq!(game.start_game().unwrap_err(), StartError::RosterTooSmall);
    assert_eq!(game.state(), GameState::RosterEditing);

    game.add_player("E").unwrap();
    game.start_game().unwrap();
    assert_eq!(game.state(), GameState::Calling);
    assert_eq!(game.current_totals().len(), 5);
    assert!(game.current_totals().values().all(|total| total.is_zero()));

    assert_eq!(game.start_game().unwrap_err(), StartError::InvalidState);
}

#[test]
fn active_players_depend_on_table_size() {
    let five = names(&FIVE);
    assert_eq!(active_players(&five, Some("C")), five);

    let six = names(&SIX);
    assert_eq!(active_players(&six, Some("C")), names(&["A", "B", "D", "E", "F"]));

    let seven = names(&SEVEN);
    assert_eq!(
        active_players(&seven, Some("C")),
        names(&["A", "D", "E", "F", "G"])
    );
    // The player before the first seat is the last one.
    assert_eq!(
        active_players(&seven, Some("A")),
        names(&["B", "C", "D", "E", "F"])
    );
    assert_eq!(active_players(&seven, None), seven);
    assert_eq!(active_players(&seven, Some("Z")), seven);
}

#[test]
fn normal_win_example() {
    let mut game = started(&FIVE, "C");
    game.submit_call(&CallFields::new("A", 90)).unwrap();
    assert_eq!(game.state(), GameState::InProgress);
    game.proceed().unwrap();
    assert_eq!(game.state(), GameState::CompanionSelection);

    let result = game.submit_companion(&CompanionFields::won("B")).unwrap();
    assert_eq!(game.state(), GameState::Results);
    assert_eq!(result.sequence, 1);
    assert_eq!(result.outcome, Outcome::Won);
    assert_eq!(result.delta_for("A"), Some(Amount::units(3)));
    assert_eq!(result.delta_for("B"), Some(Amount::from_cents(150)));
    for player in ["C", "D", "E"] {
        assert_eq!(result.delta_for(player), Some(Amount::from_cents(-150)));
    }
    let sum: Amount = result.deltas.iter().map(|entry| entry.delta).sum();
    assert!(sum.is_zero());

    assert_eq!(game.total_for("A"), Some(Amount::units(3)));
    assert_eq!(game.history().len(), 1);
}

#[test]
fn normal_loss_with_double_and_no_points() {
    let mut game = started(&SIX, "F");
    play_round(
        &mut game,
        &CallFields::new("A", 111).with_double(true),
        &CompanionFields::lost("B").with_no_points(true),
    );

    // 4 units, doubled twice.
    let result = game.last_result().unwrap();
    assert_eq!(result.outcome, Outcome::Lost);
    assert_eq!(result.delta_for("A"), Some(Amount::units(-32)));
    assert_eq!(result.delta_for("B"), Some(Amount::units(-16)));
    assert_eq!(result.delta_for("C"), Some(Amount::units(16)));
    assert_eq!(result.delta_for("F"), Some(Amount::ZERO));
    assert!(!result.is_active("F"));
}

#[test]
fn fuoripunto_example() {
    let mut game = started(&SIX, "F");
    play_round(
        &mut game,
        &CallFields::new("B", 81),
        &CompanionFields::fuoripunto("A").with_no_points(true),
    );

    let result = game.last_result().unwrap();
    assert_eq!(result.outcome, Outcome::Fuoripunto);
    assert_eq!(result.partner, "A");
    assert_eq!(result.delta_for("A"), Some(Amount::units(-16)));
    for player in ["B", "C", "D", "E"] {
        assert_eq!(result.delta_for(player), Some(Amount::units(4)));
    }
    assert_eq!(result.delta_for("F"), Some(Amount::ZERO));
}

#[test]
fn fuoripunto_with_six_active_players() {
    let deltas = marafone::settle(
        &marafone::RoundInput {
            caller: "B".to_string(),
            partner: "A".to_string(),
            bid_score: 100,
            double: true,
            no_points: false,
            outcome: Outcome::Fuoripunto,
        },
        &names(&SIX),
        &names(&SIX),
        &GameOptions::default(),
    );

    assert_eq!(deltas[0].delta, Amount::units(-20));
    assert!(deltas[1..].iter().all(|entry| entry.delta == Amount::units(4)));
    let sum: Amount = deltas.iter().map(|entry| entry.delta).sum();
    assert!(sum.is_zero());
}

#[test]
fn call_gate_errors_leave_state_unchanged() {
    let mut game = game_with(&FIVE);
    game.start_game().unwrap();

    assert_eq!(
        game.submit_call(&CallFields::new("A", 90)).unwrap_err(),
        CallError::DealerMissing
    );
    assert_eq!(
        game.submit_call(&CallFields::default().with_dealer("C"))
            .unwrap_err(),
        CallError::CallerMissing
    );
    assert_eq!(
        game.submit_call(&CallFields::new("A", 80).with_dealer("C"))
            .unwrap_err(),
        CallError::InvalidScore
    );
    assert_eq!(
        game.submit_call(&CallFields::new("A", 119).with_dealer("C"))
            .unwrap_err(),
        CallError::InvalidScore
    );
    assert_eq!(
        game.submit_call(
            &CallFields::new("A", 90)
                .with_dealer("C")
                .with_score_text("ottanta")
        )
        .unwrap_err(),
        CallError::InvalidScore
    );
    assert_eq!(
        game.submit_call(&CallFields::new("Z", 90).with_dealer("C"))
            .unwrap_err(),
        CallError::UnknownPlayer
    );
    assert_eq!(
        game.submit_call(&CallFields::new("C", 90).with_dealer("C"))
            .unwrap_err(),
        CallError::DealerEqualsCaller
    );
    assert_eq!(game.state(), GameState::Calling);
    assert!(game.pending_call().is_none());
    assert_eq!(game.dealer(), None);

    let mut call = CallFields::new("A", 0).with_score_text(" 95 ");
    call.dealer = Some("C".to_string());
    game.submit_call(&call).unwrap();
    assert_eq!(game.dealer(), Some("C"));
    assert_eq!(game.pending_call().unwrap().bid_score, 95);
}

#[test]
fn caller_sitting_out_is_rejected() {
    let mut game = started(&SEVEN, "C");
    assert_eq!(
        game.submit_call(&CallFields::new("B", 90)).unwrap_err(),
        CallError::CallerInactive
    );
    assert_eq!(game.state(), GameState::Calling);
}

#[test]
fn settlement_gate_errors() {
    let mut game = started(&SIX, "F");
    game.submit_call(&CallFields::new("A", 90)).unwrap();
    game.proceed().unwrap();

    assert_eq!(
        game.submit_companion(&CompanionFields::unselected(Outcome::Won))
            .unwrap_err(),
        SettleError::CompanionMissing
    );
    assert_eq!(
        game.submit_companion(&CompanionFields::unselected(Outcome::Fuoripunto))
            .unwrap_err(),
        SettleError::FuoripuntoTargetMissing
    );
    assert_eq!(
        game.submit_companion(&CompanionFields::won("A")).unwrap_err(),
        SettleError::CompanionEqualsCaller
    );
    assert_eq!(
        game.submit_companion(&CompanionFields::lost("F")).unwrap_err(),
        SettleError::CompanionInactive
    );
    assert_eq!(
        game.submit_companion(&CompanionFields::fuoripunto("F"))
            .unwrap_err(),
        SettleError::FuoripuntoTargetInactive
    );
    assert_eq!(
        game.submit_companion(&CompanionFields::won("Z")).unwrap_err(),
        SettleError::UnknownPlayer
    );

    assert_eq!(game.state(), GameState::CompanionSelection);
    assert!(game.history().is_empty());
    assert!(game.current_totals().values().all(|total| total.is_zero()));
}

#[test]
fn phase_mismatches_are_rejected() {
    let mut game = game_with(&FIVE);
    assert_eq!(
        game.submit_call(&CallFields::new("A", 90)).unwrap_err(),
        CallError::InvalidState
    );
    assert_eq!(game.proceed().unwrap_err(), SettleError::InvalidState);
    assert_eq!(
        game.submit_companion(&CompanionFields::won("B"))
            .unwrap_err(),
        SettleError::InvalidState
    );

    game.new_round();
    assert_eq!(game.state(), GameState::RosterEditing);
}

#[test]
fn dealer_rotates_with_wrap_around() {
    let mut game = started(&FIVE, "C");
    play_round(
        &mut game,
        &CallFields::new("A", 90),
        &CompanionFields::won("B"),
    );
    game.new_round();
    assert_eq!(game.state(), GameState::Calling);
    assert_eq!(game.dealer(), Some("D"));
    assert!(game.pending_call().is_none());

    game.set_dealer("E").unwrap();
    play_round(
        &mut game,
        &CallFields::new("A", 90),
        &CompanionFields::won("B"),
    );
    game.new_round();
    assert_eq!(game.dealer(), Some("A"));
}

#[test]
fn totals_accumulate_and_history_is_ordered() {
    let mut game = started(&SEVEN, "G");
    play_round(
        &mut game,
        &CallFields::new("A", 90),
        &CompanionFields::won("B"),
    );
    game.new_round();
    assert_eq!(game.dealer(), Some("A"));
    play_round(
        &mut game,
        &CallFields::new("C", 86),
        &CompanionFields::lost("B"),
    );

    let history = game.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].sequence, 1);
    assert_eq!(history[1].sequence, 2);
    assert_eq!(history[0].active_players, names(&["A", "B", "C", "D", "E"]));
    assert_eq!(history[1].active_players, names(&["B", "C", "D", "E", "F"]));
    assert_eq!(history[1].dealer, "A");

    // Round 1: A +3, B +1.5. Round 2: C -2, B -1.
    assert_eq!(game.total_for("A"), Some(Amount::units(3)));
    assert_eq!(game.total_for("B"), Some(Amount::from_cents(50)));
    assert_eq!(game.total_for("C"), Some(Amount::from_cents(-350)));
    assert_eq!(game.total_for("G"), Some(Amount::ZERO));

    let sum: Amount = game.current_totals().values().sum();
    assert!(sum.is_zero());
}

#[test]
fn statistics_count_active_rounds_only() {
    let mut game = started(&SIX, "F");
    play_round(
        &mut game,
        &CallFields::new("A", 90),
        &CompanionFields::won("B"),
    );
    game.new_round();
    // Dealer is now A, so A sits out.
    play_round(
        &mut game,
        &CallFields::new("B", 90),
        &CompanionFields::lost("C"),
    );

    let stats = game.statistics();
    assert_eq!(stats.len(), 6);
    let a = stats["A"];
    assert_eq!((a.rounds_played, a.wins, a.losses), (1, 1, 0));
    let b = stats["B"];
    assert_eq!((b.rounds_played, b.wins, b.losses), (2, 1, 1));
    let f = stats["F"];
    assert_eq!((f.rounds_played, f.wins, f.losses), (1, 1, 0));
}

#[test]
fn statistics_zero_delta_counts_as_played() {
    let mut game = started(&FIVE, "E");
    play_round(
        &mut game,
        &CallFields::new("A", 90),
        &CompanionFields::won("B"),
    );
    let mut history = game.history().to_vec();
    history[0].deltas[0].delta = Amount::ZERO;

    let stats = compute_stats(&names(&FIVE), &history);
    let a = stats["A"];
    assert_eq!((a.rounds_played, a.wins, a.losses), (1, 0, 0));

    let empty = compute_stats(&names(&["X"]), &[]);
    assert_eq!(empty["X"], marafone::PlayerStats::default());
}

#[test]
fn statistics_add_up_wins_losses_and_ties() {
    let round = |sequence: u32, delta: Amount| RoundResult {
        sequence,
        caller: "A".to_string(),
        partner: "B".to_string(),
        dealer: "E".to_string(),
        bid_score: 90,
        double: false,
        no_points: false,
        outcome: Outcome::Won,
        deltas: vec![PlayerDelta {
            player: "A".to_string(),
            delta,
        }],
        active_players: names(&["A"]),
    };
    let history = [
        round(1, Amount::units(2)),
        round(2, Amount::units(-1)),
        round(3, Amount::ZERO),
    ];

    let stats = compute_stats(&names(&["A"]), &history);
    let a = stats["A"];
    assert_eq!((a.rounds_played, a.wins, a.losses), (3, 1, 1));
}

#[test]
fn back_navigation_does_not_undo_results() {
    let mut game = started(&FIVE, "C");
    game.go_back();
    assert_eq!(game.state(), GameState::RosterEditing);
    game.start_game().unwrap();

    game.submit_call(&CallFields::new("A", 90)).unwrap();
    game.go_back();
    assert_eq!(game.state(), GameState::Calling);
    game.submit_call(&CallFields::new("A", 90)).unwrap();
    game.proceed().unwrap();
    game.go_back();
    assert_eq!(game.state(), GameState::InProgress);
    game.proceed().unwrap();
    game.submit_companion(&CompanionFields::won("B")).unwrap();
    game.go_back();
    assert_eq!(game.state(), GameState::CompanionSelection);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.total_for("A"), Some(Amount::units(3)));
}

#[test]
fn overlays_use_a_single_return_slot() {
    let mut game = started(&FIVE, "C");
    game.view_total();
    assert_eq!(game.state(), GameState::Total);
    game.go_back();
    assert_eq!(game.state(), GameState::Calling);

    game.view_history();
    game.view_stats();
    game.go_back();
    assert_eq!(game.state(), GameState::History);
    // The slot was consumed, so the fallback is the results view.
    game.go_back();
    assert_eq!(game.state(), GameState::Results);
}

#[test]
fn overlays_block_round_actions() {
    let mut game = started(&FIVE, "C");
    game.view_stats();
    assert_eq!(
        game.submit_call(&CallFields::new("A", 90)).unwrap_err(),
        CallError::InvalidState
    );
}

#[test]
fn roster_is_locked_during_the_game() {
    let mut game = started(&FIVE, "C");
    assert_eq!(game.add_player("F").unwrap_err(), RosterError::RosterLocked);
    assert_eq!(game.remove_player("A").unwrap_err(), RosterError::RosterLocked);

    let mut game = game_with(&FIVE);
    game.options = GameOptions::default().with_lock_roster(false);
    game.set_dealer("C").unwrap();
    game.start_game().unwrap();
    game.add_player("F").unwrap();
    assert_eq!(game.dealer(), Some("C"));
    game.remove_player("C").unwrap();
    assert_eq!(game.dealer(), None);
}

#[test]
fn unlocked_roster_is_frozen_while_a_call_is_pending() {
    let mut game = game_with(&SIX);
    game.options = GameOptions::default().with_lock_roster(false);
    game.set_dealer("F").unwrap();
    game.start_game().unwrap();

    game.submit_call(&CallFields::new("A", 90)).unwrap();
    assert_eq!(game.remove_player("A").unwrap_err(), RosterError::RosterLocked);
    assert_eq!(game.add_player("G").unwrap_err(), RosterError::RosterLocked);
    game.proceed().unwrap();
    assert_eq!(game.remove_player("A").unwrap_err(), RosterError::RosterLocked);
    assert_eq!(game.roster().len(), 6);

    let result = game.submit_companion(&CompanionFields::won("B")).unwrap();
    assert_eq!(result.delta_for("A"), Some(Amount::units(3)));
    assert_eq!(result.delta_for("F"), Some(Amount::ZERO));
    let sum: Amount = result.deltas.iter().map(|entry| entry.delta).sum();
    assert!(sum.is_zero());

    game.new_round();
    assert!(game.pending_call().is_none());
    game.remove_player("A").unwrap();
    assert_eq!(game.roster().len(), 5);
}

#[test]
fn going_back_to_calling_drops_the_pending_call() {
    let mut game = game_with(&SIX);
    game.options = GameOptions::default().with_lock_roster(false);
    game.set_dealer("F").unwrap();
    game.start_game().unwrap();

    game.submit_call(&CallFields::new("A", 90)).unwrap();
    assert!(game.pending_call().is_some());
    game.go_back();
    assert_eq!(game.state(), GameState::Calling);
    assert!(game.pending_call().is_none());
    game.remove_player("A").unwrap();

    game.submit_call(&CallFields::new("B", 90)).unwrap();
    game.proceed().unwrap();
    game.go_back();
    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.pending_call().map(|call| call.caller.as_str()), Some("B"));
}

#[test]
fn settlement_rechecks_the_pending_call() {
    fn roster_of(players: &[&str]) -> Roster {
        let mut roster = Roster::new();
        for player in players {
            roster.add(player).unwrap();
        }
        roster
    }

    let call = |caller: &str, dealer: &str| PendingCall {
        caller: caller.to_string(),
        dealer: dealer.to_string(),
        bid_score: 90,
        double: false,
    };
    let settle_with = |roster: &Roster, call: &PendingCall| {
        let active = active_players(roster.players(), Some(call.dealer.as_str()));
        validate_settlement(call, &CompanionFields::won("C"), roster, &active)
    };

    // Caller left the table.
    let roster = roster_of(&["B", "C", "D", "E", "F"]);
    assert_eq!(
        settle_with(&roster, &call("A", "F")).unwrap_err(),
        SettleError::UnknownPlayer
    );

    // Dealer left the table.
    let roster = roster_of(&["A", "B", "C", "D", "E"]);
    assert_eq!(
        settle_with(&roster, &call("A", "F")).unwrap_err(),
        SettleError::UnknownPlayer
    );

    // A precedes the dealer B at seven players and sits out.
    let roster = roster_of(&SEVEN);
    assert_eq!(
        settle_with(&roster, &call("A", "B")).unwrap_err(),
        SettleError::CallerInactive
    );

    let roster = roster_of(&SIX);
    assert!(settle_with(&roster, &call("A", "F")).is_ok());
}

#[test]
fn removing_in_roster_editing_clears_dealer() {
    let mut game = game_with(&SIX);
    game.set_dealer("C").unwrap();
    game.remove_player("F").unwrap();
    assert_eq!(game.dealer(), None);
}

#[test]
fn restarting_keeps_existing_balances() {
    let mut game = started(&FIVE, "C");
    play_round(
        &mut game,
        &CallFields::new("A", 90),
        &CompanionFields::won("B"),
    );
    game.new_round();
    game.go_back();
    assert_eq!(game.state(), GameState::RosterEditing);
    game.remove_player("E").unwrap();
    game.add_player("F").unwrap();
    game.start_game().unwrap();

    assert_eq!(game.total_for("A"), Some(Amount::units(3)));
    assert_eq!(game.total_for("E"), Some(Amount::from_cents(-150)));
    assert_eq!(game.total_for("F"), Some(Amount::ZERO));
    assert_eq!(game.current_totals().len(), 6);
}

#[test]
fn roster_is_persisted_and_restored() {
    let mut store = MemoryStore::new();
    store
        .set(PLAYERS_KEY, r#"["A","B","A"," ","C"]"#.to_string())
        .unwrap();

    let mut game = Game::with_store(GameOptions::default(), Box::new(store)).unwrap();
    assert_eq!(game.roster().players(), names(&["A", "B", "C"]).as_slice());
    game.add_player("D").unwrap();
    game.remove_player("A").unwrap();
    assert_eq!(game.roster().players(), names(&["B", "C", "D"]).as_slice());

    let mut store = MemoryStore::new();
    store.set(PLAYERS_KEY, "not json".to_string()).unwrap();
    assert_eq!(
        Game::with_store(GameOptions::default(), Box::new(store)).unwrap_err(),
        marafone::StoreError::Malformed
    );
}

#[test]
fn custom_fuoripunto_quota() {
    let mut game = game_with(&FIVE);
    game.options = GameOptions::default().with_fuoripunto_quota(Amount::units(2));
    game.set_dealer("A").unwrap();
    game.start_game().unwrap();
    play_round(
        &mut game,
        &CallFields::new("B", 90),
        &CompanionFields::fuoripunto("A"),
    );
    assert_eq!(game.total_for("A"), Some(Amount::units(-8)));
    assert_eq!(game.total_for("E"), Some(Amount::units(2)));
}
