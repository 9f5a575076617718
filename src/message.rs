use serde::{Deserialize, Serialize};

use crate::input::Direction;
use crate::snake::Position;

/// Display state of one board cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Free,
    Snake,
    Food,
}

/// Every message that travels between the controller and its collaborators.
///
/// The first four variants are the inbound events the controller handles;
/// the rest are what it sends to its display, food and score ports.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "data", rename_all = "snake_case")]
pub enum Message {
    Timeout,
    DirectionChange(Direction),
    FoodArrived(Position),
    FoodResponse(Position),
    Display { x: i32, y: i32, cell: Cell },
    FoodRequest,
    Score,
    Lost,
}

impl Message {
    /// Builds a display update for `position`.
    #[must_use]
    pub fn display(position: Position, cell: Cell) -> Self {
        Self::Display {
            x: position.x,
            y: position.y,
            cell,
        }
    }

    /// Short tag used in logs and errors.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::DirectionChange(_) => "direction_change",
            Self::FoodArrived(_) => "food_arrived",
            Self::FoodResponse(_) => "food_response",
            Self::Display { .. } => "display",
            Self::FoodRequest => "food_request",
            Self::Score => "score",
            Self::Lost => "lost",
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::input::Direction;
    use crate::snake::Position;

    use super::{Cell, Message};

    #[test]
    fn wire_form_uses_adjacent_tag() {
        let json = serde_json::to_string(&Message::display(Position::new(3, 4), Cell::Food))
            .expect("serializable");
        assert_eq!(
            json,
            r#"{"t":"display","data":{"x":3,"y":4,"cell":"food"}}"#
        );

        let json = serde_json::to_string(&Message::Timeout).expect("serializable");
        assert_eq!(json, r#"{"t":"timeout"}"#);
    }

    #[test]
    fn inbound_events_decode_from_json() {
        let direction: Message =
            serde_json::from_str(r#"{"t":"direction_change","data":"up"}"#).expect("decodes");
        assert_eq!(direction, Message::DirectionChange(Direction::Up));

        let food: Message =
            serde_json::from_str(r#"{"t":"food_response","data":{"x":1,"y":2}}"#)
                .expect("decodes");
        assert_eq!(food, Message::FoodResponse(Position::new(1, 2)));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!(serde_json::from_str::<Message>(r#"{"t":"teleport"}"#).is_err());
    }
}
