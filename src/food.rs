use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::Board;
use crate::config::FOOD_RELOCATION_TICKS;
use crate::message::Message;

/// Host collaborator behind the food port.
///
/// Answers food requests with a random free cell and moves food that has
/// sat uneaten for [`FOOD_RELOCATION_TICKS`] ticks.
#[derive(Debug, Clone)]
pub struct FoodSupply {
    rng: StdRng,
    ticks_since_placed: u64,
}

impl FoodSupply {
    /// Creates a supply; a seed makes placement reproducible.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng,
            ticks_since_placed: 0,
        }
    }

    /// Answers a food request, or `None` when no free cell is left.
    pub fn respond(&mut self, board: &Board) -> Option<Message> {
        let position = board.random_free_position(&mut self.rng)?;
        self.ticks_since_placed = 0;
        debug!("offering food at ({}, {})", position.x, position.y);
        Some(Message::FoodResponse(position))
    }

    /// Counts one tick and returns a relocation push once the food is stale.
    pub fn on_tick(&mut self, board: &Board) -> Option<Message> {
        self.ticks_since_placed += 1;
        if self.ticks_since_placed < FOOD_RELOCATION_TICKS {
            return None;
        }

        let position = board.random_free_position(&mut self.rng)?;
        self.ticks_since_placed = 0;
        debug!("relocating stale food to ({}, {})", position.x, position.y);
        Some(Message::FoodArrived(position))
    }
}
