use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::game::Game;
use crate::ui::layout::{frame, Label, Paint};

pub fn ui(f: &mut Frame, game: &Game) {
    let size = f.size();
    f.render_widget(Clear, size);

    // Board cells first, then the side panel swatches
    let layout = frame(game);
    for paint in &layout.paints {
        render_paint(f, paint, size);
    }

    // Help text, swatch numbers, move counter and the end-of-game banner
    for label in &layout.labels {
        render_label(f, label, size);
    }
}

fn render_paint(f: &mut Frame, paint: &Paint, bounds: Rect) {
    // Anything past the frame edge is clipped
    let area = paint.area.intersection(bounds);
    if area.area() == 0 {
        return;
    }

    let color = paint.color.terminal_color();
    let block = Block::default().style(Style::default().fg(color).bg(color));
    f.render_widget(block, area);
}

fn render_label(f: &mut Frame, label: &Label, bounds: Rect) {
    let area = Rect::new(label.x, label.y, label.text.chars().count() as u16, 1).intersection(bounds);
    if area.area() == 0 {
        return;
    }

    let mut style = Style::default();
    if label.blink {
        style = style.add_modifier(Modifier::SLOW_BLINK | Modifier::BOLD);
    }
    f.render_widget(Paragraph::new(Span::styled(label.text.as_str(), style)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BANNER_ROW, MENU_X, MIN_HEIGHT, MIN_WIDTH, MOVES_ROW};
    use crate::game::{Board, PaletteColor};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw(game: &Game, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui(f, game)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, x: u16, y: u16, len: u16) -> String {
        (x..x + len).map(|cx| buffer.get(cx, y).symbol()).collect()
    }

    #[test]
    fn test_board_cells_are_painted() {
        let game = Game::with_seed(8);
        let buffer = draw(&game, MIN_WIDTH, MIN_HEIGHT);

        for (x, y, color) in game.board().cells().take(20) {
            let cell = buffer.get(x as u16 * 4 + 1, y as u16 * 2 + 1);
            assert_eq!(cell.bg, color.terminal_color());
        }
    }

    #[test]
    fn test_side_panel_text() {
        let game = Game::with_seed(8);
        let buffer = draw(&game, MIN_WIDTH, MIN_HEIGHT);

        assert_eq!(row_text(&buffer, MENU_X, 0, 11), "New : Space");
        assert_eq!(row_text(&buffer, MENU_X, 2, 8), "Exit : Q");
        assert_eq!(row_text(&buffer, MENU_X, MOVES_ROW, 6), "0 / 25");
        assert_eq!(row_text(&buffer, MENU_X + 3, 5, 4), " : 1");

        let swatch = buffer.get(MENU_X, 4);
        assert_eq!(swatch.bg, PaletteColor::new(1).unwrap().terminal_color());
    }

    #[test]
    fn test_win_banner_blinks() {
        let mut game = Game::from_board(Board::from_rows(&[&[1, 1], &[2, 1]]).unwrap(), 5);
        game.select_color(PaletteColor::new(2).unwrap());
        let buffer = draw(&game, MIN_WIDTH, MIN_HEIGHT);

        assert_eq!(row_text(&buffer, MENU_X - 1, BANNER_ROW, 11), "* You win *");
        assert!(buffer
            .get(MENU_X - 1, BANNER_ROW)
            .modifier
            .contains(Modifier::SLOW_BLINK));
        assert_eq!(row_text(&buffer, MENU_X, MOVES_ROW, 6), "1 / 5 ");
    }

    #[test]
    fn test_small_frame_does_not_panic() {
        let game = Game::with_seed(8);
        let buffer = draw(&game, 20, 5);
        assert_eq!(buffer.area().width, 20);
    }
}
