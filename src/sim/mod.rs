//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per `tick` call, no wall clock
//! - Seeded RNG only, owned by the state
//! - No rendering or platform dependencies

pub mod config;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;
pub mod tick;

pub use config::{CollisionPolicy, GameConfig};
pub use food::{Food, FoodKind, GridFull};
pub use grid::{Cell, Direction, EdgePolicy, Grid};
pub use snake::{INITIAL_DIRECTION, Snake, StepOutcome};
pub use state::{EndCause, GamePhase, GameState};
pub use tick::{StepReport, TickInput, tick};
