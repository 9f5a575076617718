use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_SNAKE, GridSize};
use crate::game::{GameState, GameStatus};
use crate::message::Cell;
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

const SNAKE_HEAD: Color = Color::White;
const SNAKE_BODY: Color = Color::Green;
const FOOD: Color = Color::Red;
const BORDER_FG: Color = Color::White;
const BORDER_BG: Color = Color::DarkGray;

/// Renders the full game frame from the board mirror.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(BORDER_FG).bg(BORDER_BG));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_cells(frame, inner, state);

    if state.is_start_screen() {
        render_start_menu(frame, play_area);
        return;
    }

    match state.status {
        GameStatus::Paused => render_pause_menu(frame, play_area),
        GameStatus::GameOver | GameStatus::Victory => {
            render_game_over_menu(frame, play_area, state.score, state.status);
        }
        GameStatus::Playing => {}
    }
}

fn render_cells(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let bounds = state.bounds();
    let head = state.controller().body().head().position;

    let buffer = frame.buffer_mut();
    for (position, cell) in state.board.occupied() {
        let Some((x, y)) = logical_to_terminal(inner, bounds, position) else {
            continue;
        };

        let (glyph, style) = match cell {
            Cell::Snake if position == head => (
                GLYPH_SNAKE,
                Style::new().fg(SNAKE_HEAD).add_modifier(Modifier::BOLD),
            ),
            Cell::Snake => (GLYPH_SNAKE, Style::new().fg(SNAKE_BODY)),
            Cell::Food => (GLYPH_FOOD, Style::new().fg(FOOD)),
            Cell::Free => continue,
        };
        buffer.set_string(x, y, glyph, style);
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::config::GridSize;
    use crate::snake::Position;

    use super::logical_to_terminal;

    #[test]
    fn cells_map_into_inner_area() {
        let inner = Rect::new(2, 1, 10, 5);
        let bounds = GridSize {
            width: 10,
            height: 5,
        };

        assert_eq!(
            logical_to_terminal(inner, bounds, Position::new(0, 0)),
            Some((2, 1))
        );
        assert_eq!(
            logical_to_terminal(inner, bounds, Position::new(9, 4)),
            Some((11, 5))
        );
        assert_eq!(logical_to_terminal(inner, bounds, Position::new(10, 0)), None);
    }

    #[test]
    fn cells_clipped_by_small_terminal_are_skipped() {
        let inner = Rect::new(0, 0, 4, 2);
        let bounds = GridSize {
            width: 10,
            height: 5,
        };

        assert_eq!(logical_to_terminal(inner, bounds, Position::new(5, 1)), None);
    }
}
