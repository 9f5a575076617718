use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use serde::{Deserialize, Serialize};

const AXIS_BIT: u8 = 0b01;
const SIGN_BIT: u8 = 0b10;

/// Canonical movement directions.
///
/// The discriminant is a two-bit code: the low bit selects the axis
/// (set for horizontal) and the high bit selects the sign (set for +1).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Direction {
    Up = 0b00,
    Left = 0b01,
    Down = 0b10,
    Right = 0b11,
}

impl Direction {
    /// All directions in encoding order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Parses the single-letter form used in configuration strings.
    #[must_use]
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "U" => Some(Self::Up),
            "D" => Some(Self::Down),
            "L" => Some(Self::Left),
            "R" => Some(Self::Right),
            _ => None,
        }
    }

    #[must_use]
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Returns true for left/right.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        self.bits() & AXIS_BIT != 0
    }

    /// Returns the unit step `(dx, dy)` for one cell of movement.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        let step = if self.bits() & SIGN_BIT != 0 { 1 } else { -1 };
        if self.is_horizontal() {
            (step, 0)
        } else {
            (0, step)
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level input events consumed by the terminal loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Quit,
    Confirm,
}

/// Waits up to `timeout` for a key press and maps it to a game input.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key.code)),
        _ => Ok(None),
    }
}

fn map_key(code: KeyCode) -> Option<GameInput> {
    let input = match code {
        KeyCode::Up | KeyCode::Char('w' | 'k') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'j') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'h') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'l') => GameInput::Direction(Direction::Right),
        KeyCode::Char('p') => GameInput::Pause,
        KeyCode::Enter | KeyCode::Char(' ') => GameInput::Confirm,
        KeyCode::Char('q') | KeyCode::Esc => GameInput::Quit,
        _ => return None,
    };
    Some(input)
}

/// Returns whether a direction change is legal: only a switch of axis turns the snake.
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    current.is_horizontal() != next.is_horizontal()
}
