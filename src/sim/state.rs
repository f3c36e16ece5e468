//! Game state and round lifecycle
//!
//! Everything a round needs in order to be replayed lives here. The RNG is
//! owned by the state and re-seeded from the stored seed on reset, so a
//! (config, seed) pair fully determines a round.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::config::{CollisionPolicy, GameConfig};
use super::food::{self, Food, GridFull};
use super::grid::{Cell, Grid};
use super::snake::Snake;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Fresh round, nothing has moved yet
    Ready,
    /// Snake is moving
    Active,
    /// Round is over; ticks are no-ops until reset
    Terminated,
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCause {
    /// The head ran into the body
    SelfCollision,
    /// The snake covers every cell; the board is beaten
    GridFull,
}

/// Complete state of one round (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Round seed for reproducibility
    pub seed: u64,
    /// Board dimensions and edge behavior
    pub grid: Grid,
    /// What a self-collision does
    pub collision_policy: CollisionPolicy,
    pub snake: Snake,
    /// The one food item; `None` only once the round is terminated
    pub food: Option<Food>,
    pub score: u32,
    pub phase: GamePhase,
    /// Why the round terminated, while it is
    pub end_cause: Option<EndCause>,
    /// Ticks advanced since the round started
    pub ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Fresh round from a config and seed
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let grid = config.grid();
        let mut state = Self {
            seed,
            grid,
            collision_policy: config.collision_policy,
            snake: Snake::new(grid.center()),
            food: None,
            score: 0,
            phase: GamePhase::Ready,
            end_cause: None,
            ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.respawn_food();
        state
    }

    /// Place fresh food on a free cell
    ///
    /// A board with no free cell left is beaten: the round terminates with
    /// [`EndCause::GridFull`] and no food is placed.
    pub fn respawn_food(&mut self) {
        let occupied: HashSet<Cell> = self.snake.cells().collect();
        match food::spawn(&self.grid, &occupied, &mut self.rng) {
            Ok(food) => {
                log::debug!(
                    "Placed {:?} at ({}, {})",
                    food.kind,
                    food.cell.col,
                    food.cell.row
                );
                self.food = Some(food);
            }
            Err(GridFull) => {
                log::info!("Grid full at length {}, board beaten", self.snake.len());
                self.food = None;
                self.phase = GamePhase::Terminated;
                self.end_cause = Some(EndCause::GridFull);
            }
        }
    }

    /// Restart the round in place
    ///
    /// The RNG is re-seeded from the stored seed, so resetting replays the
    /// identical round: calling this twice in a row is a no-op.
    pub fn reset(&mut self) {
        self.snake.reset(&self.grid);
        self.score = 0;
        self.phase = GamePhase::Ready;
        self.end_cause = None;
        self.ticks = 0;
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.respawn_food();
    }

    /// Whether the round has terminated
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Terminated
    }
}
