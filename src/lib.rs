//! Flood-it on the terminal: unify a 14x14 board into one color within
//! 25 moves by flooding outward from the top-left cell.

pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod ui;
