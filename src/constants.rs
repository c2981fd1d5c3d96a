pub const BOARD_SIZE: usize = 14;
// Upper bound for custom rules; cell coordinates must stay within u16
pub const MAX_BOARD_SIZE: usize = 64;
pub const NUM_COLORS: u8 = 6;
pub const MAX_MOVES: u32 = 25;

// Smallest terminal the fixed layout fits into
pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 28;
pub const MIN_COLORS: u16 = 8;

// Board cells are drawn as CELL_WIDTH x CELL_HEIGHT blocks starting at the origin
pub const CELL_WIDTH: u16 = 4;
pub const CELL_HEIGHT: u16 = 2;

// Side panel
pub const MENU_X: u16 = 64;
pub const SWATCH_WIDTH: u16 = 3;
pub const SWATCH_HEIGHT: u16 = 2;
pub const SWATCH_SPACING: u16 = 3;
pub const NEW_GAME_ROW: u16 = 0;
pub const EXIT_ROW: u16 = 2;
pub const MOVES_ROW: u16 = 23;
pub const BANNER_ROW: u16 = 26;
