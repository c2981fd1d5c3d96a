use rand::Rng;
use ratatui::style::Color;

use crate::constants::{BOARD_SIZE, NUM_COLORS};

/// One of the `NUM_COLORS` palette entries, numbered from 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PaletteColor(u8);

impl PaletteColor {
    pub fn new(index: u8) -> Option<Self> {
        if (1..=NUM_COLORS).contains(&index) {
            Some(Self(index))
        } else {
            None
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(1..=NUM_COLORS))
    }

    pub fn all() -> impl Iterator<Item = PaletteColor> {
        (1..=NUM_COLORS).map(Self)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn terminal_color(self) -> Color {
        match self.0 {
            1 => Color::Yellow,
            2 => Color::Cyan,
            3 => Color::Red,
            4 => Color::Magenta,
            5 => Color::Green,
            _ => Color::White,
        }
    }
}

/// Square grid of palette colors, stored row-major (`y * size + x`).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<PaletteColor>,
}

impl Board {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::random_of_size(BOARD_SIZE, rng)
    }

    pub fn random_of_size<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let size = size.max(1);
        let cells = (0..size * size).map(|_| PaletteColor::random(rng)).collect();
        Self { size, cells }
    }

    /// Builds a board from rows listed top to bottom. Returns `None` unless
    /// the rows form a non-empty square of valid palette indices.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let size = rows.len();
        if size == 0 || rows.iter().any(|row| row.len() != size) {
            return None;
        }

        let cells = rows
            .iter()
            .flat_map(|row| row.iter())
            .map(|&index| PaletteColor::new(index))
            .collect::<Option<Vec<_>>>()?;

        Some(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.size && y < self.size {
            Some(y * self.size + x)
        } else {
            None
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<PaletteColor> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, color: PaletteColor) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = color;
                true
            }
            None => false,
        }
    }

    /// Color of the anchor cell at (0, 0).
    pub fn seed_color(&self) -> PaletteColor {
        self.cells[0]
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = PaletteColor::random(rng);
        }
    }

    pub fn all_same_color(&self) -> bool {
        let seed = self.seed_color();
        self.cells.iter().all(|&cell| cell == seed)
    }

    pub fn distinct_colors(&self) -> usize {
        PaletteColor::all()
            .filter(|color| self.cells.contains(color))
            .count()
    }

    /// Iterates `(x, y, color)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, PaletteColor)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &color)| (i % self.size, i / self.size, color))
    }
}
