use log::{debug, info, warn};

use crate::config::{GridSize, InitialState};
use crate::error::{ConfigurationError, ControllerError};
use crate::input::{Direction, direction_change_is_valid};
use crate::message::{Cell, Message};
use crate::port::Port;
use crate::snake::{Body, Position, Segment};

/// Outcome of one timeout tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    Moved,
    Grew,
    Lost,
}

/// Event-driven snake state machine.
///
/// Owns the body, direction, food position and map bounds. Everything it
/// decides is reported through the display, food and score ports.
pub struct Controller<D, F, S> {
    display_port: D,
    food_port: F,
    score_port: S,
    bounds: GridSize,
    food: Position,
    direction: Direction,
    body: Body,
}

impl<D: Port, F: Port, S: Port> Controller<D, F, S> {
    /// Parses `config` and builds a controller around the three ports.
    pub fn new(
        display_port: D,
        food_port: F,
        score_port: S,
        config: &str,
    ) -> Result<Self, ConfigurationError> {
        let initial: InitialState = config.parse()?;
        Ok(Self::from_initial_state(
            display_port,
            food_port,
            score_port,
            initial,
        ))
    }

    #[must_use]
    pub fn from_initial_state(
        display_port: D,
        food_port: F,
        score_port: S,
        initial: InitialState,
    ) -> Self {
        info!(
            "controller ready: {}x{} board, {} segments heading {:?}, food at ({}, {})",
            initial.bounds.width,
            initial.bounds.height,
            initial.body.len(),
            initial.direction,
            initial.food.x,
            initial.food.y,
        );

        Self {
            display_port,
            food_port,
            score_port,
            bounds: initial.bounds,
            food: initial.food,
            direction: initial.direction,
            body: initial.body,
        }
    }

    /// Routes one inbound event to its handler.
    ///
    /// Outbound-only messages (display, food request, score, loss) are a
    /// contract violation by whoever delivered them.
    pub fn receive(&mut self, event: Message) -> Result<(), ControllerError> {
        debug!("received {}", event.kind());
        match event {
            Message::Timeout => {
                self.tick();
            }
            Message::DirectionChange(direction) => self.change_direction(direction),
            Message::FoodArrived(position) => self.relocate_food(position, true),
            Message::FoodResponse(position) => self.relocate_food(position, false),
            Message::Display { .. } | Message::FoodRequest | Message::Score | Message::Lost => {
                return Err(ControllerError::UnexpectedEvent { kind: event.kind() });
            }
        }
        Ok(())
    }

    /// Advances the snake one cell.
    ///
    /// Self collision is checked first, then food, then walls, so food on the
    /// edge of the map still feeds the snake. A step past the `i32` range is a
    /// wall hit. The new head inherits the old head's ttl; on a growth tick it
    /// gets one more, keeping every ttl equal to the segment's distance from
    /// the tail.
    pub fn tick(&mut self) -> TickOutcome {
        let old_head = self.body.head();
        let Some(position) = old_head.position.stepped(self.direction) else {
            info!(
                "snake left the coordinate range at ({}, {})",
                old_head.position.x, old_head.position.y
            );
            self.score_port.send(Message::Lost);
            return TickOutcome::Lost;
        };
        let mut new_head = Segment {
            position,
            ttl: old_head.ttl,
        };

        if self.body.occupies(new_head.position) {
            info!(
                "snake bit itself at ({}, {})",
                new_head.position.x, new_head.position.y
            );
            self.score_port.send(Message::Lost);
            return TickOutcome::Lost;
        }

        let outcome = if new_head.position == self.food {
            info!("snake ate food at ({}, {})", self.food.x, self.food.y);
            self.score_port.send(Message::Score);
            self.food_port.send(Message::FoodRequest);
            new_head.ttl += 1;
            TickOutcome::Grew
        } else if !new_head.position.is_within_bounds(self.bounds) {
            info!(
                "snake hit the wall at ({}, {})",
                new_head.position.x, new_head.position.y
            );
            self.score_port.send(Message::Lost);
            return TickOutcome::Lost;
        } else {
            for expired in self.body.age() {
                self.display_port.send(Message::display(expired, Cell::Free));
            }
            TickOutcome::Moved
        };

        self.body.push_head(new_head);
        self.display_port.send(Message::display(new_head.position, Cell::Snake));
        debug!("tick {outcome:?}, length {}", self.body.len());

        outcome
    }

    /// Turns the snake when `requested` is on the other axis; otherwise a no-op.
    pub fn change_direction(&mut self, requested: Direction) {
        if direction_change_is_valid(self.direction, requested) {
            debug!("direction {:?} -> {requested:?}", self.direction);
            self.direction = requested;
        }
    }

    /// Handles a proposed food position.
    ///
    /// `clear_previous` is set for unsolicited relocations, whose old cell is
    /// on screen and must be freed. A proposal on the body is rejected with a
    /// new request. The proposal is recorded either way.
    pub fn relocate_food(&mut self, proposed: Position, clear_previous: bool) {
        if self.body.occupies(proposed) {
            warn!(
                "food proposed on the snake at ({}, {}), requesting another",
                proposed.x, proposed.y
            );
            self.food_port.send(Message::FoodRequest);
        } else {
            if clear_previous {
                self.display_port.send(Message::display(self.food, Cell::Free));
            }
            self.display_port.send(Message::display(proposed, Cell::Food));
        }
        self.food = proposed;
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn food(&self) -> Position {
        self.food
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }
}
