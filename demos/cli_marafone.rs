//! CLI Marafone scorekeeper example.

use std::io::{self, Write};

use marafone::{
    Amount, CallFields, CompanionFields, Game, GameOptions, GameState, MemoryStore, Outcome,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Marafone scorekeeper (type 'q' to quit)");

    let mut game = match Game::with_store(GameOptions::default(), Box::new(MemoryStore::new())) {
        Ok(game) => game,
        Err(err) => {
            println!("Store error: {err}");
            return;
        }
    };

    if !edit_roster(&mut game) {
        return;
    }

    loop {
        if game.dealer().is_none() {
            let dealer = prompt_line("Dealer: ");
            if is_quit(&dealer) {
                break;
            }
            if let Err(err) = game.set_dealer(&dealer) {
                println!("Error: {err}");
                continue;
            }
        }

        print_table(&game);

        let caller = prompt_line("Caller: ");
        if is_quit(&caller) {
            break;
        }
        let score = prompt_line("Score (81-118): ");
        let double = prompt_yes("Double? (y/n): ");
        let call = CallFields {
            caller: Some(caller),
            ..CallFields::default()
        }
        .with_score_text(&score)
        .with_double(double);

        if let Err(err) = game.submit_call(&call) {
            println!("Error: {err}");
            continue;
        }

        println!("Hand in progress. Press enter when it is over.");
        let _ = prompt_line("");
        if let Err(err) = game.proceed() {
            println!("Error: {err}");
            continue;
        }

        loop {
            let fields = prompt_outcome();
            match game.submit_companion(&fields) {
                Ok(result) => {
                    println!("\nRound {} ({})", result.sequence, result.outcome.label());
                    for entry in &result.deltas {
                        println!("  {:<12} {}", entry.player, format_amount(entry.delta));
                    }
                    break;
                }
                Err(err) => println!("Error: {err}"),
            }
        }

        print_totals(&game);
        game.new_round();
    }

    print_stats(&game);
}

fn edit_roster(game: &mut Game) -> bool {
    while game.state() == GameState::RosterEditing {
        let name = prompt_line("Add player (empty to start): ");
        if is_quit(&name) {
            return false;
        }
        if name.is_empty() {
            match game.start_game() {
                Ok(()) => return true,
                Err(err) => println!("Error: {err}"),
            }
            continue;
        }
        if let Err(err) = game.add_player(&name) {
            println!("Error: {err}");
        }
    }
    true
}

fn prompt_outcome() -> CompanionFields {
    let outcome = match prompt_line("Outcome [w]on / [l]ost / [f]uoripunto: ").as_str() {
        "f" | "fuoripunto" => Outcome::Fuoripunto,
        "l" | "lost" => Outcome::Lost,
        _ => Outcome::Won,
    };
    let prompt = if outcome == Outcome::Fuoripunto {
        "Fuoripunto player: "
    } else {
        "Companion: "
    };
    let partner = prompt_line(prompt);
    let no_points = outcome != Outcome::Fuoripunto && prompt_yes("No points? (y/n): ");

    CompanionFields {
        outcome,
        partner: (!partner.is_empty()).then_some(partner),
        no_points,
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_yes(prompt: &str) -> bool {
    matches!(prompt_line(prompt).to_lowercase().as_str(), "y" | "yes")
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "q" | "quit")
}

fn print_table(game: &Game) {
    let dealer = game.dealer().unwrap_or("-");
    let active = game.active_players();
    println!("\nDealer: {dealer}");
    println!("Playing: {}", active.join(", "));
}

fn print_totals(game: &Game) {
    println!("\nTotals:");
    for player in game.roster().players() {
        let total = game.total_for(player).unwrap_or(Amount::ZERO);
        println!("  {:<12} {}", player, format_amount(total));
    }
}

fn print_stats(game: &Game) {
    let stats = game.statistics();
    println!("\nStatistics:");
    for player in game.roster().players() {
        if let Some(entry) = stats.get(player) {
            println!(
                "  {:<12} rounds {} | won {} | lost {}",
                player, entry.rounds_played, entry.wins, entry.losses
            );
        }
    }
}

fn format_amount(amount: Amount) -> String {
    let text = amount.to_string();
    if amount.is_positive() {
        colorize(&format!("+{text}"), "32")
    } else if amount.is_negative() {
        colorize(&text, "31")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
