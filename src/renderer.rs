use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::config::{CELL_COLUMNS, GLYPH_CELL, GridSize, THEME};
use crate::game::GameStatus;
use crate::scene::Scene;
use crate::snake::Position;
use crate::ui::hud::{HUD_HEIGHT, render_hud};
use crate::ui::overlay::render_overlay;

/// Renders the full game frame from a scene snapshot.
pub fn render(frame: &mut Frame<'_>, scene: &Scene) {
    let area = frame.area();
    let board_width = scene
        .bounds
        .width
        .saturating_mul(CELL_COLUMNS)
        .saturating_add(2);
    let board_height = scene.bounds.height.saturating_add(2);
    let total_height = board_height.saturating_add(HUD_HEIGHT);

    if area.width < board_width || area.height < total_height {
        render_too_small(frame, area, board_width, total_height);
        return;
    }

    let [column] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(area);
    let [board_area, hud_area] = Layout::vertical([
        Constraint::Length(board_height),
        Constraint::Length(HUD_HEIGHT),
    ])
    .flex(Flex::Center)
    .areas(column);

    let block = Block::bordered()
        .border_style(Style::new().fg(THEME.border_fg))
        .style(Style::new().bg(THEME.play_bg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let modifier = board_modifier(scene.status);
    if let Some(food) = scene.food {
        let style = Style::new().fg(THEME.food).add_modifier(modifier);
        draw_cell(frame, inner, scene.bounds, food, style);
    }
    render_snake(frame, inner, scene, modifier);

    render_hud(frame, hud_area, scene);

    if let Some(text) = scene.overlay.as_deref() {
        render_overlay(frame, board_area, text);
    }
}

/// The board is dimmed whenever the snake is not moving.
fn board_modifier(status: GameStatus) -> Modifier {
    match status {
        GameStatus::Running => Modifier::empty(),
        GameStatus::Paused | GameStatus::GameOver => Modifier::DIM,
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, scene: &Scene, modifier: Modifier) {
    let body_style = Style::new().fg(THEME.snake_body).add_modifier(modifier);
    for segment in &scene.body {
        draw_cell(frame, inner, scene.bounds, *segment, body_style);
    }

    // Head last so it stays visible if a collision left it on the body.
    draw_cell(
        frame,
        inner,
        scene.bounds,
        scene.head,
        Style::new()
            .fg(THEME.snake_head)
            .add_modifier(Modifier::BOLD | modifier),
    );
}

fn draw_cell(frame: &mut Frame<'_>, inner: Rect, bounds: GridSize, position: Position, style: Style) {
    let Some((x, y)) = logical_to_terminal(inner, bounds, position) else {
        return;
    };

    frame.buffer_mut().set_string(x, y, GLYPH_CELL, style);
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, width: u16, height: u16) {
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!(
            "need {width}x{height}, have {}x{}",
            area.width, area.height
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::new().fg(THEME.overlay_fg)),
        area,
    );
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
