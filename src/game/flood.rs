use crate::game::board::{Board, PaletteColor};

// down, up, left, right
const NEIGHBORS: [(isize, isize); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

/// Recolors the 4-connected region around (0, 0) that shares the seed's
/// current color. Returns the number of cells recolored; zero when `target`
/// already is the seed color.
pub fn flood_fill(board: &mut Board, target: PaletteColor) -> usize {
    let old = board.seed_color();
    if old == target {
        return 0;
    }

    let size = board.size() as isize;
    let mut recolored = 0;
    let mut stack = vec![(0usize, 0usize)];

    while let Some((x, y)) = stack.pop() {
        // Recolored cells no longer match, which doubles as the visited check
        if board.get(x, y) != Some(old) {
            continue;
        }
        board.set(x, y, target);
        recolored += 1;

        for (dx, dy) in NEIGHBORS {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx < 0 || ny < 0 || nx >= size || ny >= size {
                continue;
            }
            stack.push((nx as usize, ny as usize));
        }
    }

    recolored
}
