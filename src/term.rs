//! Terminal front-end
//!
//! Crossterm implementations of the driver's input and renderer seams. The
//! renderer owns the terminal: raw mode and the alternate screen are entered
//! on construction and restored on drop, and drawing is incremental, cell by
//! cell, guided by each tick's report.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

use crate::driver::{Command, InputSource, Renderer};
use crate::sim::{Cell, Direction, EndCause, FoodKind, GameState, StepReport};

/// Rows above the play field (HUD plus the top frame line)
const FIELD_TOP: u16 = 2;
/// Columns left of the play field (the frame line)
const FIELD_LEFT: u16 = 1;

const SNAKE_COLOR: Color = Color::Green;

fn food_color(kind: FoodKind) -> Color {
    match kind {
        FoodKind::Apple => Color::Red,
        FoodKind::Banana => Color::Yellow,
        FoodKind::Orange => Color::DarkYellow,
    }
}

/// Map a key press to a player command
fn map_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Command::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Turn(Direction::Right))
        }
        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Play),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

/// Keyboard input via crossterm events
#[derive(Debug, Default)]
pub struct TermInput;

impl TermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TermInput {
    fn poll_command(&mut self, timeout: Duration) -> io::Result<Option<Command>> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(None);
            }
            if !event::poll(remaining)? {
                return Ok(None);
            }
            if let Event::Key(key) = event::read()? {
                // Only presses; ignore release/repeat events on terminals
                // that report them
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(command) = map_key(key.code) {
                    return Ok(Some(command));
                }
            }
        }
    }
}

/// Cell-by-cell board renderer on the alternate screen
///
/// Each grid cell is two characters wide so the board looks roughly square.
pub struct TermRenderer {
    out: io::Stdout,
    grid_width: u16,
    grid_height: u16,
    previous_score: u32,
}

impl TermRenderer {
    /// Take over the terminal; fails up front if it is too small for the board
    pub fn new(grid_width: u16, grid_height: u16) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let need_cols = grid_width * 2 + 2;
        let need_rows = grid_height + 3;
        if cols < need_cols || rows < need_rows {
            return Err(io::Error::other(format!(
                "terminal is {cols}x{rows}, need at least {need_cols}x{need_rows} for this board"
            )));
        }

        enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(Self {
            out,
            grid_width,
            grid_height,
            previous_score: 0,
        })
    }

    fn screen_pos(cell: Cell) -> (u16, u16) {
        (FIELD_LEFT + cell.col * 2, FIELD_TOP + cell.row)
    }

    fn draw_cell(&mut self, cell: Cell, color: Color) -> io::Result<()> {
        let (x, y) = Self::screen_pos(cell);
        queue!(
            self.out,
            MoveTo(x, y),
            SetForegroundColor(color),
            Print("██"),
            ResetColor
        )
    }

    fn erase_cell(&mut self, cell: Cell) -> io::Result<()> {
        let (x, y) = Self::screen_pos(cell);
        queue!(self.out, MoveTo(x, y), Print("  "))
    }

    fn draw_hud(&mut self, state: &GameState) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(0, 0),
            Clear(ClearType::CurrentLine),
            Print(format!(
                "score {:<5} previous {:<5} [wasd/arrows] turn  [q] quit",
                state.score, self.previous_score
            ))
        )
    }

    fn draw_frame(&mut self) -> io::Result<()> {
        let inner = "─".repeat(self.grid_width as usize * 2);
        queue!(self.out, MoveTo(0, 1), Print(format!("┌{inner}┐")))?;
        for row in 0..self.grid_height {
            queue!(
                self.out,
                MoveTo(0, FIELD_TOP + row),
                Print("│"),
                MoveTo(FIELD_LEFT + self.grid_width * 2, FIELD_TOP + row),
                Print("│")
            )?;
        }
        queue!(
            self.out,
            MoveTo(0, FIELD_TOP + self.grid_height),
            Print(format!("└{inner}┘"))
        )
    }
}

impl Renderer for TermRenderer {
    fn begin_round(&mut self, state: &GameState, previous_score: u32) -> io::Result<()> {
        self.previous_score = previous_score;
        queue!(self.out, Clear(ClearType::All))?;
        self.draw_hud(state)?;
        self.draw_frame()?;
        for cell in state.snake.cells() {
            self.draw_cell(cell, SNAKE_COLOR)?;
        }
        if let Some(food) = state.food {
            self.draw_cell(food.cell, food_color(food.kind))?;
        }
        self.out.flush()
    }

    fn draw_update(&mut self, state: &GameState, report: &StepReport) -> io::Result<()> {
        if let Some(vacated) = report.vacated {
            self.erase_cell(vacated)?;
        }
        self.draw_cell(state.snake.head(), SNAKE_COLOR)?;
        if report.eaten.is_some() {
            if let Some(food) = state.food {
                self.draw_cell(food.cell, food_color(food.kind))?;
            }
            self.draw_hud(state)?;
        }
        self.out.flush()
    }

    fn round_over(&mut self, _state: &GameState, cause: EndCause, score: u32) -> io::Result<()> {
        let title = match cause {
            EndCause::SelfCollision => "  GAME OVER  ",
            EndCause::GridFull => "  BOARD CLEARED!  ",
        };
        let lines = [
            title.to_string(),
            format!("  final score: {score}  "),
            "  [space] play again   [q] quit  ".to_string(),
        ];

        let field_width = self.grid_width * 2;
        let mid_row = FIELD_TOP + self.grid_height / 2;
        for (i, line) in lines.iter().enumerate() {
            let x = FIELD_LEFT + field_width.saturating_sub(line.chars().count() as u16) / 2;
            queue!(
                self.out,
                MoveTo(x, mid_row.saturating_sub(1) + i as u16),
                SetForegroundColor(Color::White),
                Print(line),
                ResetColor
            )?;
        }
        self.out.flush()
    }
}

impl Drop for TermRenderer {
    fn drop(&mut self) {
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
    }
}
