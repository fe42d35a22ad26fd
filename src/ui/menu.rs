use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::game::EndReason;
use crate::session::GameReport;

const POPUP_WIDTH: u16 = 30;
const POPUP_HEIGHT: u16 = 10;

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    report: &GameReport,
    theme: &Theme,
) {
    let popup = centered_popup(area, POPUP_WIDTH, POPUP_HEIGHT);
    frame.render_widget(Clear, popup);

    let mut lines = vec![
        Line::from("GAME OVER").style(
            Style::default()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Final Score: {}", report.score)),
        Line::from(format!("High Score: {}", report.high_score)),
        Line::from(cause_text(report.reason)),
    ];
    if report.new_high_score {
        lines.push(Line::from("New High Score!").style(Style::default().fg(theme.menu_title)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Play again? (y/n)").style(Style::default().fg(theme.menu_footer)));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn cause_text(reason: EndReason) -> &'static str {
    match reason {
        EndReason::WallCollision => "Cause: hit wall",
        EndReason::SelfCollision => "Cause: hit yourself",
        EndReason::Quit => "Cause: quit",
    }
}

/// Centers a fixed-size popup in `area`, shrinking it when `area` is smaller.
fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
