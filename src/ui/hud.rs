use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::GameState;

const HUD_MARGIN_X: u16 = 1;

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let hud_area = inset_horizontal(hud_area, HUD_MARGIN_X);

    let bounds = state.bounds();
    frame.render_widget(
        Paragraph::new(Line::from(format!("{}x{}", bounds.width, bounds.height)))
            .alignment(Alignment::Left)
            .style(Style::default().fg(Color::DarkGray)),
        hud_area,
    );

    frame.render_widget(
        Paragraph::new(info_line(
            state.controller().body().len(),
            state.speed_level,
            state.score,
        ))
        .alignment(Alignment::Right),
        hud_area,
    );

    play_area
}

fn info_line(length: usize, level: u32, score: u32) -> Line<'static> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    Line::from(vec![
        Span::styled("Length ", label),
        Span::styled(length.to_string(), value),
        Span::styled("  Level ", label),
        Span::styled(level.to_string(), value),
        Span::styled("  Score ", label),
        Span::styled(score.to_string(), value),
    ])
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}
