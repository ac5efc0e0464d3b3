use marafone::{
    Amount, CallFields, CompanionFields, Game, GameOptions, GameState, KeyValueStore, MemoryStore,
    Outcome, PLAYERS_KEY, RoundResult, save_roster,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// `stored_players` is the value of the `"players"` local storage slot.
    #[wasm_bindgen(constructor)]
    pub fn new(stored_players: Option<String>) -> Result<WasmGame, JsValue> {
        let mut store = MemoryStore::new();
        if let Some(raw) = stored_players {
            store.set(PLAYERS_KEY, raw).map_err(js_err)?;
        }
        let game = Game::with_store(GameOptions::default(), Box::new(store)).map_err(js_err)?;
        Ok(Self { game })
    }

    /// Returns the roster as the JSON list to write back to local storage.
    pub fn roster_json(&self) -> Result<String, JsValue> {
        let mut store = MemoryStore::new();
        save_roster(&mut store, self.game.roster().players()).map_err(js_err)?;
        Ok(store.get(PLAYERS_KEY).unwrap_or_default())
    }

    pub fn add_player(&mut self, name: &str) -> Result<(), JsValue> {
        self.game.add_player(name).map_err(js_err)
    }

    pub fn remove_player(&mut self, name: &str) -> Result<(), JsValue> {
        self.game.remove_player(name).map_err(js_err)
    }

    pub fn set_dealer(&mut self, name: &str) -> Result<(), JsValue> {
        self.game.set_dealer(name).map_err(js_err)
    }

    pub fn start_game(&mut self) -> Result<(), JsValue> {
        self.game.start_game().map_err(js_err)
    }

    pub fn submit_call(
        &mut self,
        caller: Option<String>,
        dealer: Option<String>,
        score: &str,
        double: bool,
    ) -> Result<(), JsValue> {
        let fields = CallFields {
            caller: caller.filter(|name| !name.is_empty()),
            dealer: dealer.filter(|name| !name.is_empty()),
            ..CallFields::default()
        }
        .with_score_text(score)
        .with_double(double);
        self.game.submit_call(&fields).map_err(js_err)
    }

    pub fn proceed(&mut self) -> Result<(), JsValue> {
        self.game.proceed().map_err(js_err)
    }

    /// `outcome` is one of `"Won"`, `"Lost"` or `"Fuoripunto"`.
    pub fn submit_companion(
        &mut self,
        outcome: &str,
        partner: Option<String>,
        no_points: bool,
    ) -> Result<JsValue, JsValue> {
        let outcome = parse_outcome(outcome)?;
        let fields = CompanionFields {
            outcome,
            partner: partner.filter(|name| !name.is_empty()),
            no_points,
        };
        let result = self.game.submit_companion(&fields).map_err(js_err)?;
        to_js_value(&JsRound::from(&result))
    }

    pub fn new_round(&mut self) {
        self.game.new_round();
    }

    pub fn go_back(&mut self) {
        self.game.go_back();
    }

    pub fn view_total(&mut self) {
        self.game.view_total();
    }

    pub fn view_history(&mut self) {
        self.game.view_history();
    }

    pub fn view_stats(&mut self) {
        self.game.view_stats();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let roster = self.game.roster().players();
        let stats = self.game.statistics();

        let players = roster
            .iter()
            .map(|player| {
                let entry = stats.get(player).copied().unwrap_or_default();
                JsPlayer {
                    name: player.clone(),
                    total: self
                        .game
                        .total_for(player)
                        .unwrap_or(Amount::ZERO)
                        .as_units_f64(),
                    rounds_played: entry.rounds_played,
                    wins: entry.wins,
                    losses: entry.losses,
                }
            })
            .collect();

        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            dealer: self.game.dealer().map(ToString::to_string),
            active_players: self.game.active_players(),
            players,
            history: self.game.history().iter().map(JsRound::from).collect(),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    dealer: Option<String>,
    active_players: Vec<String>,
    players: Vec<JsPlayer>,
    history: Vec<JsRound>,
}

#[derive(Serialize)]
struct JsPlayer {
    name: String,
    total: f64,
    rounds_played: u32,
    wins: u32,
    losses: u32,
}

#[derive(Serialize)]
struct JsDelta {
    player: String,
    delta: f64,
}

#[derive(Serialize)]
struct JsRound {
    round: u32,
    caller: String,
    partner: String,
    dealer: String,
    score: u8,
    double: bool,
    no_points: bool,
    outcome: &'static str,
    results: Vec<JsDelta>,
    active_players: Vec<String>,
}

impl From<&RoundResult> for JsRound {
    fn from(result: &RoundResult) -> Self {
        Self {
            round: result.sequence,
            caller: result.caller.clone(),
            partner: result.partner.clone(),
            dealer: result.dealer.clone(),
            score: result.bid_score,
            double: result.double,
            no_points: result.no_points,
            outcome: result.outcome.label(),
            results: result
                .deltas
                .iter()
                .map(|entry| JsDelta {
                    player: entry.player.clone(),
                    delta: entry.delta.as_units_f64(),
                })
                .collect(),
            active_players: result.active_players.clone(),
        }
    }
}

fn parse_outcome(outcome: &str) -> Result<Outcome, JsValue> {
    match outcome {
        "Won" => Ok(Outcome::Won),
        "Lost" => Ok(Outcome::Lost),
        "Fuoripunto" => Ok(Outcome::Fuoripunto),
        _ => Err(JsValue::from_str("unknown outcome")),
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::RosterEditing => "RosterEditing",
        GameState::Calling => "Calling",
        GameState::InProgress => "InProgress",
        GameState::CompanionSelection => "CompanionSelection",
        GameState::Results => "Results",
        GameState::Total => "Total",
        GameState::History => "History",
        GameState::Stats => "Stats",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
