use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use log::trace;

use crate::game::{Game, PaletteColor, SelectOutcome};
use crate::ui::layout::hit_test;

/// What a single terminal event asks the game to do.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Action {
    Quit,
    NewGame,
    Select(PaletteColor),
    Click { column: u16, row: u16 },
    None,
}

pub fn translate_event(event: &Event) -> Action {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        _ => Action::None,
    }
}

fn translate_key(key: &KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char(' ') => Action::NewGame,
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| PaletteColor::new(digit as u8))
            .map_or(Action::None, Action::Select),
        _ => Action::None,
    }
}

fn translate_mouse(mouse: &MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::Click {
            column: mouse.column,
            row: mouse.row,
        },
        _ => Action::None,
    }
}

/// Applies an action to the game. Returns the selection result when the
/// action picked a color.
pub fn apply_action(game: &mut Game, action: Action) -> Option<SelectOutcome> {
    match action {
        Action::Quit => {
            game.request_quit();
            None
        }
        Action::NewGame => {
            game.reset();
            None
        }
        Action::Select(color) => Some(game.select_color(color)),
        Action::Click { column, row } => match hit_test(game, column, row) {
            Some(color) => Some(game.select_color(color)),
            None => {
                trace!("click at ({}, {}) hit nothing", column, row);
                None
            }
        },
        Action::None => None,
    }
}

pub fn handle_input(game: &mut Game, event: &Event) -> Option<SelectOutcome> {
    apply_action(game, translate_event(event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Board;
    use crate::ui::layout::{cell_rect, swatch_rect};
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn color(index: u8) -> PaletteColor {
        PaletteColor::new(index).unwrap()
    }

    fn game() -> Game {
        Game::from_board(Board::from_rows(&[&[1, 2], &[3, 4]]).unwrap(), 5)
    }

    #[test]
    fn test_translate_keys() {
        assert_eq!(translate_event(&key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(translate_event(&key(KeyCode::Char('Q'))), Action::Quit);
        assert_eq!(translate_event(&key(KeyCode::Char(' '))), Action::NewGame);
        assert_eq!(translate_event(&key(KeyCode::Char('1'))), Action::Select(color(1)));
        assert_eq!(translate_event(&key(KeyCode::Char('6'))), Action::Select(color(6)));
        assert_eq!(translate_event(&key(KeyCode::Char('0'))), Action::None);
        assert_eq!(translate_event(&key(KeyCode::Char('7'))), Action::None);
        assert_eq!(translate_event(&key(KeyCode::Enter)), Action::None);

        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate_event(&ctrl_c), Action::Quit);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = Event::Key(KeyEvent::new_with_kind_and_state(
            KeyCode::Char('2'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        ));
        assert_eq!(translate_event(&release), Action::None);
    }

    #[test]
    fn test_translate_mouse() {
        assert_eq!(translate_event(&click(5, 9)), Action::Click { column: 5, row: 9 });

        let right = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate_event(&right), Action::None);
    }

    #[test]
    fn test_number_key_selects() {
        let mut game = game();
        assert_eq!(
            handle_input(&mut game, &key(KeyCode::Char('2'))),
            Some(SelectOutcome::Filled { cells: 1 })
        );
        assert_eq!(game.moves_used(), 1);
        assert_eq!(game.board().seed_color(), color(2));
    }

    #[test]
    fn test_swatch_click_selects() {
        let mut game = game();
        let area = swatch_rect(color(3));
        handle_input(&mut game, &click(area.x + 1, area.y));
        assert_eq!(game.moves_used(), 1);
        assert_eq!(game.board().seed_color(), color(3));
    }

    #[test]
    fn test_board_click_selects_cell_color() {
        let mut game = game();
        let area = cell_rect(1, 1);
        handle_input(&mut game, &click(area.x, area.y));
        assert_eq!(game.board().seed_color(), color(4));
        assert_eq!(game.moves_used(), 1);
    }

    #[test]
    fn test_clicking_active_color_is_free() {
        let mut game = game();
        let area = swatch_rect(color(1));
        assert_eq!(
            handle_input(&mut game, &click(area.x, area.y)),
            Some(SelectOutcome::Unchanged)
        );
        assert_eq!(
            handle_input(&mut game, &click(0, 0)),
            Some(SelectOutcome::Unchanged)
        );
        assert_eq!(game.moves_used(), 0);
    }

    #[test]
    fn test_click_outside_is_noop() {
        let mut game = game();
        let before = game.board().clone();
        assert_eq!(handle_input(&mut game, &click(40, 27)), None);
        assert_eq!(game.board(), &before);
        assert_eq!(game.moves_used(), 0);
    }

    #[test]
    fn test_quit_and_new_game() {
        let mut game = Game::with_seed(12);
        game.select_color(color(if game.board().seed_color() == color(1) { 2 } else { 1 }));
        assert_eq!(game.moves_used(), 1);

        handle_input(&mut game, &key(KeyCode::Char(' ')));
        assert_eq!(game.moves_used(), 0);
        assert!(!game.should_quit());

        handle_input(&mut game, &key(KeyCode::Char('q')));
        assert!(game.should_quit());
    }
}
