pub mod board;
pub mod flood;
pub mod state;

pub use board::{Board, PaletteColor};
pub use state::{Game, GameState, Outcome, SelectOutcome};
