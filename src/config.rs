use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

/// Arena width in cells.
pub const GRID_WIDTH: u16 = 20;

/// Arena height in cells.
pub const GRID_HEIGHT: u16 = 20;

/// Default arena used by the binary.
pub const DEFAULT_GRID: GridSize = GridSize {
    width: GRID_WIDTH,
    height: GRID_HEIGHT,
};

/// Fixed delay between two running ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Score awarded per fruit eaten.
pub const POINTS_PER_FRUIT: u32 = 10;

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub fruit: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on the terminal's own background.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    fruit: Color::Red,
    border_fg: Color::White,
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::Yellow,
    menu_footer: Color::DarkGray,
};

/// Wall drawn entirely with `#`.
pub const BORDER_HASH: border::Set = border::Set {
    top_left: "#",
    top_right: "#",
    bottom_left: "#",
    bottom_right: "#",
    vertical_left: "#",
    vertical_right: "#",
    horizontal_top: "#",
    horizontal_bottom: "#",
};

pub const GLYPH_SNAKE_HEAD: &str = "O";
pub const GLYPH_SNAKE_BODY: &str = "o";
pub const GLYPH_FRUIT: &str = "F";

