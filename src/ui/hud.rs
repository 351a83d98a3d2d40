use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::config::THEME;
use crate::scene::Scene;

/// Rows taken by the HUD under the board.
pub const HUD_HEIGHT: u16 = 2;

const KEY_HINT: &str = "Arrows/WASD move  Space pause  R restart  Q quit";

/// Renders the score label and the key hint below the play area.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, scene: &Scene) {
    let [score_row, hint_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(scene.score_label.as_str()))
            .alignment(Alignment::Left)
            .style(
                Style::new()
                    .fg(THEME.hud_score)
                    .add_modifier(Modifier::BOLD),
            ),
        score_row,
    );

    // The hint is dropped when it does not fit rather than wrapped.
    if usize::from(hint_row.width) >= KEY_HINT.chars().count() {
        frame.render_widget(
            Paragraph::new(Line::from(KEY_HINT))
                .alignment(Alignment::Center)
                .style(Style::new().fg(THEME.hud_hint)),
            hint_row,
        );
    }
}
