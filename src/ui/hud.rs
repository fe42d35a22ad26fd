use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::Game;
use crate::session::GameReport;

/// Rows the HUD occupies below the arena.
pub const HUD_HEIGHT: u16 = 2;

/// Supplemental values displayed around the arena.
#[derive(Debug, Clone)]
pub struct HudInfo<'a> {
    pub high_score: u32,
    pub theme: &'a Theme,
    /// Set once the game has ended; shows the game-over popup.
    pub report: Option<GameReport>,
}

/// Renders the score line and key hints into `area`.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, game: &Game, info: &HudInfo<'_>) {
    let [score_area, hint_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(score_line(game.state.score, info.high_score, info.theme)),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from("w/a/s/d move  x quit"))
            .style(Style::default().fg(info.theme.hud_muted)),
        hint_area,
    );
}

fn score_line(score: u32, high_score: u32, theme: &Theme) -> Line<'static> {
    let value = Style::default()
        .fg(theme.hud_score)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(theme.hud_muted);

    Line::from(vec![
        Span::styled("Score: ", label),
        Span::styled(score.to_string(), value),
        Span::styled(" | ", label),
        Span::styled("High Score: ", label),
        Span::styled(high_score.to_string(), value),
    ])
}

#[cfg(test)]
mod tests {
    use crate::config::THEME_CLASSIC;

    use super::score_line;

    #[test]
    fn score_line_reads_like_the_classic_status_bar() {
        let line = score_line(120, 340, &THEME_CLASSIC);
        let text = line
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<String>();

        assert_eq!(text, "Score: 120 | High Score: 340");
    }
}
