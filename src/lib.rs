//! Torus Snake - classic grid snake on a wrapping board
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, snake, food, state machine)
//! - `driver`: Frame-paced session loop behind input/render trait seams
//! - `term`: Terminal front-end (crossterm input and renderer)
//! - `settings`: Configuration with bounds clamping
//! - `scorefile`: Previous-score persistence (one integer on disk)

pub mod driver;
pub mod scorefile;
pub mod settings;
pub mod sim;
pub mod term;

pub use scorefile::ScoreFile;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default board size in cells (the classic 800x600 window of 20 px cells)
    pub const DEFAULT_GRID_WIDTH: u16 = 40;
    pub const DEFAULT_GRID_HEIGHT: u16 = 30;

    /// Board dimension bounds accepted from configuration
    pub const MIN_GRID_DIM: u16 = 4;
    pub const MAX_GRID_DIM: u16 = 256;

    /// Simulation speed bounds (ticks per second)
    pub const MIN_TICKS_PER_SECOND: u32 = 5;
    pub const MAX_TICKS_PER_SECOND: u32 = 30;
    pub const DEFAULT_TICKS_PER_SECOND: u32 = 20;

    /// Score awarded per food eaten
    pub const POINTS_PER_FOOD: u32 = 1;

    /// Default location of the previous-score file
    pub const DEFAULT_SCORE_FILE: &str = "score.txt";
}
