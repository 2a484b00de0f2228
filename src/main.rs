//! Mob Volley entry point
//!
//! Headless native driver: plays a full game with a simple autopilot, folds
//! the result into lifetime stats and saves them.
//!
//! Usage: `mob-volley [seed] [tuning.json]`

use std::error::Error;

use mob_volley::consts::*;
use mob_volley::persistence::{FileStatsStore, StatsStore};
use mob_volley::sim::{Buff, FrameSnapshot, GamePhase, GameState, MobState, TickInput, tick};
use mob_volley::Tuning;

/// Longest game the autopilot will play before giving up (simulated seconds)
const MAX_GAME_SECONDS: f32 = 60.0 * 30.0;

/// Game instance driven by a fixed-step accumulator
struct Game {
    state: GameState,
    accumulator: f32,
    input: TickInput,
    previous_input: TickInput,
    elapsed: f32,
}

impl Game {
    fn new(state: GameState) -> Self {
        Self {
            state,
            accumulator: 0.0,
            input: TickInput::default(),
            previous_input: TickInput::default(),
            elapsed: 0.0,
        }
    }

    /// Run simulation substeps for one presented frame
    fn update(&mut self, frame_dt: f32) {
        let frame_dt = frame_dt.min(0.1);
        self.accumulator += frame_dt;
        self.elapsed += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.steer();
            let input = self.input.with_previous(&self.previous_input);
            let outcome = tick(&mut self.state, &input, SIM_DT);
            self.previous_input = input;
            self.accumulator -= SIM_DT;
            substeps += 1;

            if outcome.level_complete {
                self.accumulator = 0.0;
                break;
            }
        }
    }

    /// Line up under the lowest live mob and tap fire when aligned
    fn steer(&mut self) {
        let archer = self.state.actor.rect.center().x;
        let target = self
            .state
            .mobs
            .iter()
            .filter(|mob| mob.state == MobState::Alive && mob.rect().right() > 0.0)
            .max_by(|a, b| a.rect().bottom().total_cmp(&b.rect().bottom()))
            .map(|mob| mob.rect().center().x);

        self.input = TickInput::default();
        let Some(target) = target else {
            return;
        };
        let offset = target - archer;
        self.input.move_left = offset < -8.0;
        self.input.move_right = offset > 8.0;
        // Release every other step so each press is a fresh edge
        self.input.fire_held = offset.abs() < 24.0 && !self.previous_input.fire_held;
    }

    /// Spend score on buffs, cheapest first
    fn shop(&mut self) {
        let mut buffs = Buff::ALL;
        buffs.sort_by_key(|&buff| self.state.tuning.buff_cost(buff));
        for buff in buffs {
            if self.state.purchase_buff(buff).is_ok() {
                log::info!("Autopilot bought the {} buff", buff.as_str());
            }
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(arg) => arg.parse()?,
        None => 0x5EED,
    };
    let state = match args.next() {
        Some(path) => {
            let tuning = Tuning::from_json(&std::fs::read_to_string(&path)?)?;
            log::info!("Using tuning from {path}");
            GameState::with_tuning(tuning, seed)?
        }
        None => GameState::new(seed),
    };

    let mut store = FileStatsStore::default();
    let mut stats = store.load_or_default();
    log::info!("Spawn odds: {:?}", state.level_tuning().spawn_table.odds());
    let mut game = Game::new(state);

    // Uneven frame times, as a real display loop would produce
    let frame_times = [1.0 / 60.0, 1.0 / 58.0, 1.0 / 62.0, 1.0 / 30.0];
    let mut frame = 0;
    while game.state.phase != GamePhase::GameComplete {
        if game.elapsed > MAX_GAME_SECONDS {
            log::warn!("Autopilot gave up on level {}", game.state.level);
            return Ok(());
        }

        game.update(frame_times[frame % frame_times.len()]);
        frame += 1;

        if game.state.phase == GamePhase::LevelComplete {
            if let Some(report) = game.state.reports.last() {
                println!(
                    "Level {}: {} points, {} kills, {}/{} hits ({}%)",
                    report.level,
                    report.score,
                    report.kills,
                    report.hits,
                    report.shots_fired,
                    report.hit_percent
                );
            }
            game.shop();
            game.state.start_next_level()?;
            log::info!("Spawn odds: {:?}", game.state.level_tuning().spawn_table.odds());
        }
    }

    if let Some(report) = game.state.reports.last() {
        println!("Level {}: {} points, {} kills", report.level, report.score, report.kills);
    }
    let snapshot = FrameSnapshot::capture(&game.state);
    log::debug!("Final frame: {}", serde_json::to_string(&snapshot)?);

    game.state.finish_game(&mut stats)?;
    store.save(&stats)?;
    log::info!("Stats saved to {}", store.path().display());

    println!("Final score: {}", game.state.score);
    println!("Accuracy: {}%", game.state.game_hit_percent());
    println!(
        "Lifetime: {} games, high score {}, {} kills, {}% hit, {:.2} shots/game, {:.2} kills/game",
        stats.games_played,
        stats.high_score,
        stats.total_kills(),
        stats.hit_percent(),
        stats.average_shots_per_game(),
        stats.average_kills_per_game()
    );
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Mob Volley (native) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
