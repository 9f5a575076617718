use std::sync::mpsc::{self, Receiver, Sender};

use log::info;

use crate::board::Board;
use crate::config::{GridSize, InitialState, POINTS_PER_SPEED_LEVEL};
use crate::controller::Controller;
use crate::error::ControllerError;
use crate::food::FoodSupply;
use crate::input::GameInput;
use crate::message::{Cell, Message};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
    Victory,
}

pub type ChannelController = Controller<Sender<Message>, Sender<Message>, Sender<Message>>;

/// One play session: the controller plus the collaborators behind its ports.
pub struct GameState {
    pub board: Board,
    pub score: u32,
    pub speed_level: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    controller: ChannelController,
    display_rx: Receiver<Message>,
    food_rx: Receiver<Message>,
    score_rx: Receiver<Message>,
    food_supply: FoodSupply,
    initial: InitialState,
    seed: Option<u64>,
}

impl GameState {
    /// Starts a session from `initial`; `seed` fixes food placement.
    #[must_use]
    pub fn new(initial: InitialState, seed: Option<u64>) -> Self {
        let (display_tx, display_rx) = mpsc::channel();
        let (food_tx, food_rx) = mpsc::channel();
        let (score_tx, score_rx) = mpsc::channel();

        let mut board = Board::new(initial.bounds);
        for segment in initial.body.segments() {
            board.set(segment.position, Cell::Snake);
        }
        board.set(initial.food, Cell::Food);

        let controller =
            Controller::from_initial_state(display_tx, food_tx, score_tx, initial.clone());

        Self {
            board,
            score: 0,
            speed_level: 1,
            tick_count: 0,
            status: GameStatus::Playing,
            controller,
            display_rx,
            food_rx,
            score_rx,
            food_supply: FoodSupply::new(seed),
            initial,
            seed,
        }
    }

    /// Fresh session with the same starting state and seed.
    #[must_use]
    pub fn restarted(&self) -> Self {
        Self::new(self.initial.clone(), self.seed)
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.controller.bounds()
    }

    #[must_use]
    pub fn controller(&self) -> &ChannelController {
        &self.controller
    }

    #[must_use]
    pub fn is_start_screen(&self) -> bool {
        self.status == GameStatus::Paused && self.tick_count == 0 && self.score == 0
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> Result<(), ControllerError> {
        if self.status != GameStatus::Playing {
            return Ok(());
        }

        self.tick_count += 1;
        self.controller.receive(Message::Timeout)?;
        self.pump()?;

        if self.status == GameStatus::Playing {
            if let Some(relocation) = self.food_supply.on_tick(&self.board) {
                self.controller.receive(relocation)?;
                self.pump()?;
            }
        }

        Ok(())
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) -> Result<(), ControllerError> {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Playing {
                    self.controller.receive(Message::DirectionChange(direction))?;
                }
            }
            GameInput::Pause => {
                self.status = match self.status {
                    GameStatus::Playing => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Playing,
                    other => other,
                };
            }
            GameInput::Quit | GameInput::Confirm => {}
        }
        Ok(())
    }

    /// Delivers port traffic until the controller has nothing more to say.
    fn pump(&mut self) -> Result<(), ControllerError> {
        loop {
            for message in self.display_rx.try_iter() {
                self.board.apply(&message);
            }

            for message in self.score_rx.try_iter().collect::<Vec<_>>() {
                self.on_score(message);
            }

            let mut replies = Vec::new();
            for _ in self.food_rx.try_iter() {
                match self.food_supply.respond(&self.board) {
                    Some(reply) => replies.push(reply),
                    None => {
                        info!("no free cell left for food, snake fills the board");
                        self.status = GameStatus::Victory;
                    }
                }
            }

            if replies.is_empty() {
                return Ok(());
            }
            for reply in replies {
                self.controller.receive(reply)?;
            }
        }
    }

    fn on_score(&mut self, message: Message) {
        match message {
            Message::Score => {
                self.score += 1;
                self.speed_level = 1 + (self.score / POINTS_PER_SPEED_LEVEL);
            }
            Message::Lost => {
                info!("game over after {} ticks, score {}", self.tick_count, self.score);
                self.status = GameStatus::GameOver;
            }
            _ => {}
        }
    }
}
