use std::str::{FromStr, SplitWhitespace};

use ratatui::symbols::border;

use crate::error::ConfigurationError;
use crate::input::Direction;
use crate::snake::{Body, Position};

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Validated starting state decoded from a configuration string.
///
/// Grammar: `W <width> <height> F <foodX> <foodY> S <U|D|L|R> <len> (<x> <y>){len}`,
/// body listed head first.
#[derive(Debug, Clone)]
pub struct InitialState {
    pub bounds: GridSize,
    pub food: Position,
    pub direction: Direction,
    pub body: Body,
}

impl FromStr for InitialState {
    type Err = ConfigurationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens(text.split_whitespace());

        tokens.marker('W')?;
        let bounds = GridSize {
            width: tokens.number("map width")?,
            height: tokens.number("map height")?,
        };

        tokens.marker('F')?;
        let food = Position {
            x: tokens.number("food x")?,
            y: tokens.number("food y")?,
        };

        tokens.marker('S')?;
        let letter = tokens.next("direction")?;
        let direction = Direction::from_letter(letter)
            .ok_or_else(|| ConfigurationError::UnknownDirection(letter.to_owned()))?;

        let length: usize = tokens.number("body length")?;
        let mut positions = Vec::new();
        for _ in 0..length {
            positions.push(Position {
                x: tokens.number("segment x")?,
                y: tokens.number("segment y")?,
            });
        }
        let body = Body::from_positions(positions).ok_or(ConfigurationError::EmptyBody)?;

        Ok(Self {
            bounds,
            food,
            direction,
            body,
        })
    }
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl<'a> Tokens<'a> {
    fn next(&mut self, field: &'static str) -> Result<&'a str, ConfigurationError> {
        self.0.next().ok_or(ConfigurationError::MissingToken(field))
    }

    fn marker(&mut self, expected: char) -> Result<(), ConfigurationError> {
        let token = self.next("marker")?;
        let mut chars = token.chars();
        if chars.next() == Some(expected) && chars.next().is_none() {
            Ok(())
        } else {
            Err(ConfigurationError::UnexpectedMarker {
                expected,
                found: token.to_owned(),
            })
        }
    }

    fn number<T: FromStr>(&mut self, field: &'static str) -> Result<T, ConfigurationError> {
        let token = self.next(field)?;
        token
            .parse()
            .map_err(|_| ConfigurationError::InvalidNumber {
                field,
                value: token.to_owned(),
            })
    }
}

/// Board used when no `--config` is given.
pub const DEFAULT_CONFIGURATION: &str = "W 30 15 F 20 7 S R 3 8 7 7 7 6 7";

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

pub const GLYPH_SNAKE: &str = "█";
pub const GLYPH_FOOD: &str = "●";

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 60;

/// Score needed per speed level increase.
pub const POINTS_PER_SPEED_LEVEL: u32 = 5;

/// Ticks an uneaten food stays put before the host relocates it.
pub const FOOD_RELOCATION_TICKS: u64 = 60;

#[cfg(test)]
mod tests {
    use crate::error::ConfigurationError;
    use crate::input::Direction;
    use crate::snake::Position;

    use super::{DEFAULT_CONFIGURATION, GridSize, InitialState};

    #[test]
    fn parses_complete_description() {
        let state: InitialState = "W 10 10 F 1 1 S R 2 5 5 4 5"
            .parse()
            .expect("valid configuration");

        assert_eq!(
            state.bounds,
            GridSize {
                width: 10,
                height: 10
            }
        );
        assert_eq!(state.food, Position::new(1, 1));
        assert_eq!(state.direction, Direction::Right);

        let segments: Vec<(Position, u32)> = state
            .body
            .segments()
            .map(|segment| (segment.position, segment.ttl))
            .collect();
        assert_eq!(
            segments,
            vec![(Position::new(5, 5), 2), (Position::new(4, 5), 1)]
        );
    }

    #[test]
    fn default_configuration_is_valid() {
        let state: InitialState = DEFAULT_CONFIGURATION.parse().expect("default parses");
        assert_eq!(state.body.len(), 3);
        assert_eq!(state.bounds.total_cells(), 30 * 15);
    }

    #[test]
    fn rejects_wrong_markers() {
        for text in [
            "X 10 10 F 1 1 S R 1 5 5",
            "W 10 10 G 1 1 S R 1 5 5",
            "W 10 10 F 1 1 T R 1 5 5",
        ] {
            assert!(
                matches!(
                    text.parse::<InitialState>(),
                    Err(ConfigurationError::UnexpectedMarker { .. })
                ),
                "{text} should fail on its marker"
            );
        }
    }

    #[test]
    fn rejects_unknown_direction_letter() {
        let result = "W 10 10 F 1 1 S Q 1 5 5".parse::<InitialState>();
        assert_eq!(
            result.err(),
            Some(ConfigurationError::UnknownDirection("Q".to_owned()))
        );
    }

    #[test]
    fn rejects_truncated_and_malformed_input() {
        assert_eq!(
            "W 10 10 F 1 1 S R 2 5 5".parse::<InitialState>().err(),
            Some(ConfigurationError::MissingToken("segment x"))
        );
        assert!(matches!(
            "W ten 10 F 1 1 S R 1 5 5".parse::<InitialState>(),
            Err(ConfigurationError::InvalidNumber {
                field: "map width",
                ..
            })
        ));
        assert_eq!(
            "W 10 10 F 1 1 S R 0".parse::<InitialState>().err(),
            Some(ConfigurationError::EmptyBody)
        );
    }

    #[test]
    fn huge_body_length_runs_out_of_tokens() {
        for length in [usize::MAX, 1_000_000_000] {
            let text = format!("W 10 10 F 1 1 S R {length} 5 5");
            assert_eq!(
                text.parse::<InitialState>().err(),
                Some(ConfigurationError::MissingToken("segment x")),
                "{text}"
            );
        }
    }

    #[test]
    fn body_coordinates_are_not_range_checked() {
        let state: InitialState = "W 5 5 F 1 1 S U 2 9 9 9 9"
            .parse()
            .expect("overlapping out-of-range body is accepted");
        assert_eq!(state.body.len(), 2);
    }
}
