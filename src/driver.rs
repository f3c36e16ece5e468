//! Session loop
//!
//! Paces the simulation at a fixed tick rate, funnels raw input into at most
//! one direction change per tick, and hands state to the renderer. Input and
//! rendering sit behind traits so the loop runs the same against a terminal
//! or a test script.

use std::io;
use std::time::{Duration, Instant};

use crate::scorefile::ScoreFile;
use crate::settings::Settings;
use crate::sim::{Direction, EndCause, GameConfig, GameState, StepReport, TickInput, tick};

/// How often the round-over screen re-polls for a decision
const REPLAY_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// One player intent, as decoded by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn the snake
    Turn(Direction),
    /// Start the next round (from the round-over screen)
    Play,
    /// Leave the game
    Quit,
}

/// Source of player commands
pub trait InputSource {
    /// Wait up to `timeout` for the next command
    ///
    /// `None` means the timeout elapsed with nothing actionable; the caller
    /// treats it as "no more input this tick".
    fn poll_command(&mut self, timeout: Duration) -> io::Result<Option<Command>>;
}

/// Where the game is drawn
pub trait Renderer {
    /// A round is starting; draw the whole board
    fn begin_round(&mut self, state: &GameState, previous_score: u32) -> io::Result<()>;
    /// One tick happened; update the cells the report names
    fn draw_update(&mut self, state: &GameState, report: &StepReport) -> io::Result<()>;
    /// The round is over; show the verdict and the replay prompt
    fn round_over(&mut self, state: &GameState, cause: EndCause, score: u32) -> io::Result<()>;
}

/// How one round finished
enum RoundExit {
    Finished(EndCause),
    Quit,
}

/// Seed drawn from the wall clock, for rounds nobody asked to replay
pub fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// One play session: rounds until the player quits
pub struct Session<I, R> {
    state: GameState,
    config: GameConfig,
    fixed_seed: Option<u64>,
    tick_interval: Duration,
    scores: ScoreFile,
    previous_score: u32,
    input: I,
    renderer: R,
}

impl<I: InputSource, R: Renderer> Session<I, R> {
    pub fn new(settings: &Settings, input: I, renderer: R) -> Self {
        let seed = settings.seed.unwrap_or_else(clock_seed);
        let scores = ScoreFile::new(settings.score_file.clone());
        let previous_score = scores.load();
        log::info!("Previous score: {previous_score}");

        Self {
            state: GameState::new(&settings.game, seed),
            config: settings.game,
            fixed_seed: settings.seed,
            tick_interval: Duration::from_secs(1) / settings.ticks_per_second.max(1),
            scores,
            previous_score,
            input,
            renderer,
        }
    }

    /// Drive rounds until the player quits
    pub fn run(&mut self) -> io::Result<()> {
        log::info!("Session started (seed {})", self.state.seed);
        loop {
            match self.play_round()? {
                RoundExit::Finished(cause) => {
                    self.renderer
                        .round_over(&self.state, cause, self.state.score)?;
                    if !self.wait_for_replay()? {
                        log::info!("Player quit from the round-over screen");
                        return Ok(());
                    }
                    let seed = self.fixed_seed.unwrap_or_else(clock_seed);
                    self.state = GameState::new(&self.config, seed);
                }
                RoundExit::Quit => {
                    log::info!("Player quit mid-round");
                    return Ok(());
                }
            }
        }
    }

    fn play_round(&mut self) -> io::Result<RoundExit> {
        self.renderer.begin_round(&self.state, self.previous_score)?;
        log::info!(
            "Round started: {}x{} grid, seed {}",
            self.state.grid.width,
            self.state.grid.height,
            self.state.seed
        );

        // A board the snake already covers is won on arrival
        if self.state.is_over() {
            return Ok(RoundExit::Finished(
                self.state.end_cause.unwrap_or(EndCause::GridFull),
            ));
        }

        loop {
            let deadline = Instant::now() + self.tick_interval;
            let mut tick_input = TickInput::default();

            // Drain events until the deadline; the latest turn wins
            loop {
                let now = Instant::now();
                if now >= deadline {
                    break;
                }
                match self.input.poll_command(deadline - now)? {
                    Some(Command::Turn(direction)) => tick_input.direction = Some(direction),
                    Some(Command::Quit) => return Ok(RoundExit::Quit),
                    Some(Command::Play) => {}
                    None => break,
                }
            }

            let report = tick(&mut self.state, &tick_input);

            if let Some(kind) = report.eaten {
                log::debug!("Ate {kind:?} at tick {}, score {}", self.state.ticks, report.score);
            }

            if let Some(cause) = report.ended {
                self.finish_round(report.score, cause);
                if self.state.is_over() {
                    self.renderer.draw_update(&self.state, &report)?;
                    return Ok(RoundExit::Finished(cause));
                }
                // The collision policy restarted the round in place
                self.renderer.begin_round(&self.state, self.previous_score)?;
                continue;
            }

            self.renderer.draw_update(&self.state, &report)?;
        }
    }

    /// Persist the finished round's score
    fn finish_round(&mut self, score: u32, cause: EndCause) {
        log::info!("Round over ({cause:?}) with score {score}");
        if let Err(err) = self.scores.save(score) {
            log::error!(
                "Could not write score file {}: {err}",
                self.scores.path().display()
            );
        }
        self.previous_score = score;
    }

    /// Round-over screen: `true` to play again, `false` to quit
    fn wait_for_replay(&mut self) -> io::Result<bool> {
        loop {
            match self.input.poll_command(REPLAY_POLL_INTERVAL)? {
                Some(Command::Play) => return Ok(true),
                Some(Command::Quit) => return Ok(false),
                Some(Command::Turn(_)) | None => {}
            }
        }
    }
}
