use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    BORDER_HASH, GLYPH_FRUIT, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD, GridSize, Theme,
};
use crate::game::Game;
use crate::snake::Position;
use crate::ui::hud::{HUD_HEIGHT, HudInfo, render_hud};
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, game: &Game, hud_info: &HudInfo<'_>) {
    let area = frame.area();
    let play_area = arena_rect(area, game.bounds());
    let hud_area = Rect {
        x: area.x,
        y: play_area.bottom(),
        width: area.width,
        height: HUD_HEIGHT.min(area.bottom().saturating_sub(play_area.bottom())),
    };
    render_hud(frame, hud_area, game, hud_info);

    let theme = hud_info.theme;
    let block = Block::bordered()
        .border_set(BORDER_HASH)
        .border_style(Style::new().fg(theme.border_fg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_fruit(frame, inner, game, theme);
    render_snake(frame, inner, game, theme);

    if let Some(report) = hud_info.report {
        render_game_over_menu(frame, area, &report, theme);
    }
}

/// Returns the walled arena: the grid plus a one-cell border, clipped to
/// `area` minus the HUD rows below it.
fn arena_rect(area: Rect, bounds: GridSize) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: bounds.width.saturating_add(2).min(area.width),
        height: bounds
            .height
            .saturating_add(2)
            .min(area.height.saturating_sub(HUD_HEIGHT)),
    }
}

fn render_fruit(frame: &mut Frame<'_>, inner: Rect, game: &Game, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, game.bounds(), game.fruit.position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FRUIT, Style::new().fg(theme.fruit));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, game: &Game, theme: &Theme) {
    let bounds = game.bounds();
    let buffer = frame.buffer_mut();

    for segment in game.snake.body() {
        let Some((x, y)) = logical_to_terminal(inner, bounds, *segment) else {
            continue;
        };
        buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
    }

    // Head last so it wins over a segment sharing its cell.
    if let Some((x, y)) = logical_to_terminal(inner, bounds, game.snake.head()) {
        buffer.set_string(
            x,
            y,
            GLYPH_SNAKE_HEAD,
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD),
        );
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
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    use crate::config::{GridSize, THEME_CLASSIC};
    use crate::fruit::Fruit;
    use crate::game::{EndReason, Game};
    use crate::session::GameReport;
    use crate::snake::{Position, Snake};
    use crate::ui::hud::HudInfo;

    use super::render;

    const GRID: GridSize = GridSize {
        width: 6,
        height: 4,
    };

    fn sample_game() -> Game {
        Game::with_parts(
            GRID,
            Snake::from_parts(
                Position { x: 2, y: 1 },
                vec![Position { x: 1, y: 1 }, Position { x: 0, y: 1 }],
                None,
            ),
            Fruit::at(Position { x: 4, y: 3 }),
            0,
        )
    }

    fn draw(game: &Game, info: &HudInfo<'_>, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        terminal
            .draw(|frame| render(frame, game, info))
            .expect("draw should succeed");
        terminal.backend().buffer().clone()
    }

    fn symbol(buffer: &Buffer, x: u16, y: u16) -> &str {
        buffer[(x, y)].symbol()
    }

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| symbol(buffer, x, y))
            .collect::<String>()
    }

    #[test]
    fn draws_walls_snake_and_fruit() {
        let game = sample_game();
        let info = HudInfo {
            high_score: 0,
            theme: &THEME_CLASSIC,
            report: None,
        };

        let buffer = draw(&game, &info, 30, 10);

        assert_eq!(&row(&buffer, 0)[..8], "########");
        assert_eq!(symbol(&buffer, 0, 2), "#");
        assert_eq!(symbol(&buffer, 7, 2), "#");
        // Grid cell (x, y) sits at terminal (x + 1, y + 1).
        assert_eq!(symbol(&buffer, 3, 2), "O");
        assert_eq!(symbol(&buffer, 2, 2), "o");
        assert_eq!(symbol(&buffer, 1, 2), "o");
        assert_eq!(symbol(&buffer, 5, 4), "F");
    }

    #[test]
    fn hud_shows_score_and_high_score() {
        let mut game = sample_game();
        game.state.score = 30;
        let info = HudInfo {
            high_score: 70,
            theme: &THEME_CLASSIC,
            report: None,
        };

        let buffer = draw(&game, &info, 40, 10);
        let text = (0..buffer.area.height)
            .map(|y| row(&buffer, y))
            .collect::<Vec<_>>()
            .join("\n");

        assert!(text.contains("Score: 30 | High Score: 70"), "{text}");
    }

    #[test]
    fn game_over_popup_announces_new_high_score() {
        let mut game = sample_game();
        game.state.score = 20;
        game.state.end(EndReason::SelfCollision);
        let report = GameReport {
            score: 20,
            high_score: 20,
            new_high_score: true,
            reason: EndReason::SelfCollision,
        };
        let info = HudInfo {
            high_score: 20,
            theme: &THEME_CLASSIC,
            report: Some(report),
        };

        let buffer = draw(&game, &info, 60, 30);
        let text = (0..buffer.area.height)
            .map(|y| row(&buffer, y))
            .collect::<Vec<_>>()
            .join("\n");

        assert!(text.contains("GAME OVER"), "{text}");
        assert!(text.contains("Final Score: 20"), "{text}");
        assert!(text.contains("New High Score!"), "{text}");
        assert!(text.contains("(y/n)"), "{text}");
    }

    #[test]
    fn tiny_terminal_clips_without_panicking() {
        let game = sample_game();
        let info = HudInfo {
            high_score: 0,
            theme: &THEME_CLASSIC,
            report: None,
        };

        let _ = draw(&game, &info, 3, 2);
    }
}
