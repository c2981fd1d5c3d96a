use ratatui::layout::Rect;

use crate::constants::{
    BANNER_ROW, CELL_HEIGHT, CELL_WIDTH, EXIT_ROW, MENU_X, MOVES_ROW, NEW_GAME_ROW,
    SWATCH_HEIGHT, SWATCH_SPACING, SWATCH_WIDTH,
};
use crate::game::{Game, Outcome, PaletteColor};

/// A solid rectangle of one palette color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Paint {
    pub area: Rect,
    pub color: PaletteColor,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Label {
    pub x: u16,
    pub y: u16,
    pub text: String,
    pub blink: bool,
}

/// Everything drawn in one frame, in paint order.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FrameLayout {
    pub paints: Vec<Paint>,
    pub labels: Vec<Label>,
}

pub fn cell_rect(x: usize, y: usize) -> Rect {
    let column = u16::try_from(x).unwrap_or(u16::MAX).saturating_mul(CELL_WIDTH);
    let row = u16::try_from(y).unwrap_or(u16::MAX).saturating_mul(CELL_HEIGHT);
    Rect::new(column, row, CELL_WIDTH, CELL_HEIGHT)
}

pub fn swatch_rect(color: PaletteColor) -> Rect {
    let slot = color.index() as u16;
    Rect::new(MENU_X, 1 + SWATCH_SPACING * slot, SWATCH_WIDTH, SWATCH_HEIGHT)
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.x <= column
        && column < rect.x.saturating_add(rect.width)
        && rect.y <= row
        && row < rect.y.saturating_add(rect.height)
}

/// Resolves a click to the color of the region under it. Palette swatches
/// are checked before board cells; a click outside both selects nothing.
pub fn hit_test(game: &Game, column: u16, row: u16) -> Option<PaletteColor> {
    if let Some(color) = PaletteColor::all().find(|&c| contains(swatch_rect(c), column, row)) {
        return Some(color);
    }

    game.board()
        .cells()
        .find(|&(x, y, _)| contains(cell_rect(x, y), column, row))
        .map(|(_, _, color)| color)
}

fn label(x: u16, y: u16, text: impl Into<String>) -> Label {
    Label {
        x,
        y,
        text: text.into(),
        blink: false,
    }
}

pub fn frame(game: &Game) -> FrameLayout {
    let mut layout = FrameLayout::default();

    for (x, y, color) in game.board().cells() {
        layout.paints.push(Paint {
            area: cell_rect(x, y),
            color,
        });
    }

    layout.labels.push(label(MENU_X, NEW_GAME_ROW, "New : Space"));
    layout.labels.push(label(MENU_X, EXIT_ROW, "Exit : Q"));

    for color in PaletteColor::all() {
        let area = swatch_rect(color);
        layout.paints.push(Paint { area, color });
        layout.labels.push(label(
            area.x + area.width,
            area.y + area.height - 1,
            format!(" : {}", color.index()),
        ));
    }

    layout.labels.push(label(
        MENU_X,
        MOVES_ROW,
        format!("{} / {}", game.moves_used(), game.rules().max_moves),
    ));

    let banner = match game.outcome() {
        Outcome::Won => Some((MENU_X - 1, "* You win *")),
        Outcome::Lost => Some((MENU_X - 2, "* You lose *")),
        Outcome::InProgress => None,
    };
    if let Some((x, text)) = banner {
        layout.labels.push(Label {
            blink: true,
            ..label(x, BANNER_ROW, text)
        });
    }

    layout
}
