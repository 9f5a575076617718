use log::debug;
use rand::Rng;

use crate::config::GridSize;
use crate::message::{Cell, Message};
use crate::snake::Position;

/// Host-side picture of the play field, built only from display messages.
#[derive(Debug, Clone)]
pub struct Board {
    bounds: GridSize,
    cells: Vec<Cell>,
}

impl Board {
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self {
            bounds,
            cells: vec![Cell::Free; bounds.total_cells()],
        }
    }

    /// Applies a display message. Other messages and off-board cells are ignored.
    pub fn apply(&mut self, message: &Message) {
        if let Message::Display { x, y, cell } = *message {
            self.set(Position { x, y }, cell);
        }
    }

    /// Paints one cell; returns false when `position` is off the board.
    pub fn set(&mut self, position: Position, cell: Cell) -> bool {
        match self.index(position) {
            Some(index) => {
                self.cells[index] = cell;
                true
            }
            None => {
                debug!(
                    "ignoring {cell:?} outside the board at ({}, {})",
                    position.x, position.y
                );
                false
            }
        }
    }

    /// Returns the cell at `position`, or `None` off the board.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.index(position).map(|index| self.cells[index])
    }

    /// Iterates over every painted (non-free) cell.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.positions()
            .zip(self.cells.iter().copied())
            .filter(|(_, cell)| *cell != Cell::Free)
    }

    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&candidate| candidate == cell).count()
    }

    /// Picks a uniformly random free cell, or `None` when the board is full.
    #[must_use]
    pub fn random_free_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Position> {
        let candidates: Vec<Position> = self
            .positions()
            .zip(self.cells.iter())
            .filter(|(_, cell)| **cell == Cell::Free)
            .map(|(position, _)| position)
            .collect();

        if candidates.is_empty() {
            return None;
        }

        let index = rng.gen_range(0..candidates.len());
        Some(candidates[index])
    }

    fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = i32::from(self.bounds.width);
        (0..i32::from(self.bounds.height))
            .flat_map(move |y| (0..width).map(move |x| Position { x, y }))
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !position.is_within_bounds(self.bounds) {
            return None;
        }

        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        Some(y * usize::from(self.bounds.width) + x)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GridSize;
    use crate::message::{Cell, Message};
    use crate::snake::Position;

    use super::Board;

    fn small_board() -> Board {
        Board::new(GridSize {
            width: 4,
            height: 3,
        })
    }

    #[test]
    fn display_messages_paint_cells() {
        let mut board = small_board();

        board.apply(&Message::display(Position::new(1, 2), Cell::Snake));
        board.apply(&Message::display(Position::new(3, 0), Cell::Food));
        board.apply(&Message::Score);

        assert_eq!(board.cell(Position::new(1, 2)), Some(Cell::Snake));
        assert_eq!(board.cell(Position::new(3, 0)), Some(Cell::Food));
        assert_eq!(board.cell(Position::new(0, 0)), Some(Cell::Free));
        assert_eq!(board.count(Cell::Free), 10);

        let occupied: Vec<_> = board.occupied().collect();
        assert_eq!(
            occupied,
            vec![
                (Position::new(3, 0), Cell::Food),
                (Position::new(1, 2), Cell::Snake)
            ]
        );
    }

    #[test]
    fn off_board_updates_are_ignored() {
        let mut board = small_board();

        assert!(!board.set(Position::new(4, 0), Cell::Snake));
        assert!(!board.set(Position::new(0, -1), Cell::Snake));
        assert_eq!(board.cell(Position::new(4, 0)), None);
        assert_eq!(board.count(Cell::Snake), 0);
    }

    #[test]
    fn random_free_position_never_picks_painted_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = small_board();
        for x in 0..4 {
            board.set(Position::new(x, 0), Cell::Snake);
        }
        board.set(Position::new(2, 1), Cell::Food);

        for _ in 0..100 {
            let position = board
                .random_free_position(&mut rng)
                .expect("board has free cells");
            assert_eq!(board.cell(position), Some(Cell::Free));
        }
    }

    #[test]
    fn full_board_has_no_free_position() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = small_board();
        for y in 0..3 {
            for x in 0..4 {
                board.set(Position::new(x, y), Cell::Snake);
            }
        }

        assert_eq!(board.random_free_position(&mut rng), None);
    }
}
