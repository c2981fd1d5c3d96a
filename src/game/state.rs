use log::{debug, info, trace};
use rand::{rngs::StdRng, SeedableRng};

use crate::constants::{BOARD_SIZE, MAX_BOARD_SIZE, MAX_MOVES};
use crate::game::board::{Board, PaletteColor};
use crate::game::flood::flood_fill;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Over,
}

/// How a finished or running session should be presented.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Result of a single color selection.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SelectOutcome {
    /// The session is over, nothing happened.
    Ignored,
    /// The color was already the seed color; no move was spent.
    Unchanged,
    Filled { cells: usize },
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GameRules {
    pub board_size: usize,
    pub max_moves: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            max_moves: MAX_MOVES,
        }
    }
}

pub struct Game {
    board: Board,
    rules: GameRules,
    moves_used: u32,
    is_won: bool,
    is_over: bool,
    fill_color: PaletteColor,
    game_state: GameState,
    quit: bool,
    rng: StdRng,
}

impl Game {
    pub fn new() -> Self {
        Self::from_rng(GameRules::default(), StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rules(GameRules::default(), seed)
    }

    pub fn with_rules(rules: GameRules, seed: u64) -> Self {
        Self::from_rng(rules, StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rules: GameRules, mut rng: StdRng) -> Self {
        rules.board_size = rules.board_size.clamp(1, MAX_BOARD_SIZE);
        let board = Board::random_of_size(rules.board_size, &mut rng);
        let mut game = Self {
            fill_color: board.seed_color(),
            board,
            rules,
            moves_used: 0,
            is_won: false,
            is_over: false,
            game_state: GameState::Playing,
            quit: false,
            rng,
        };
        game.recompute();
        game
    }

    /// Starts a session on a fixed board, mainly for scenarios and tests.
    pub fn from_board(board: Board, max_moves: u32) -> Self {
        let rules = GameRules {
            board_size: board.size(),
            max_moves,
        };
        let mut game = Self::from_rng(rules, StdRng::seed_from_u64(0));
        game.fill_color = board.seed_color();
        game.board = board;
        game.recompute();
        game
    }

    pub fn select_color(&mut self, color: PaletteColor) -> SelectOutcome {
        if self.game_state == GameState::Over {
            trace!("selection of color {} ignored, game is over", color.index());
            return SelectOutcome::Ignored;
        }

        self.fill_color = color;
        let cells = flood_fill(&mut self.board, color);
        if cells == 0 {
            trace!("color {} is already active", color.index());
            return SelectOutcome::Unchanged;
        }

        self.moves_used += 1;
        self.recompute();
        debug!(
            "move {}/{}: filled {} cells with color {}",
            self.moves_used,
            self.rules.max_moves,
            cells,
            color.index()
        );

        SelectOutcome::Filled { cells }
    }

    fn recompute(&mut self) {
        self.is_won = self.board.all_same_color();
        self.is_over = self.is_won || self.moves_used >= self.rules.max_moves;

        let next = if self.is_over {
            GameState::Over
        } else {
            GameState::Playing
        };
        if next == GameState::Over && self.game_state == GameState::Playing {
            info!("game over: {:?} after {} moves", self.outcome(), self.moves_used);
        }
        self.game_state = next;
    }

    pub fn reset(&mut self) {
        self.board.randomize(&mut self.rng);
        self.fill_color = self.board.seed_color();
        self.moves_used = 0;
        self.is_won = false;
        self.is_over = false;
        self.game_state = GameState::Playing;
        self.recompute();
        info!("new game started");
    }

    pub fn request_quit(&mut self) {
        info!("quit requested");
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn moves_used(&self) -> u32 {
        self.moves_used
    }

    pub fn is_won(&self) -> bool {
        self.is_won
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// Last color picked, or the seed color right after a reset.
    pub fn fill_color(&self) -> PaletteColor {
        self.fill_color
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    pub fn outcome(&self) -> Outcome {
        if self.is_won {
            Outcome::Won
        } else if self.is_over {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }
}
