//! Reference engine: direct enumeration of the L1 ball around each source.

use crate::grid::{Grid, Pos, offset};

/// Coverage mask of every cell within Manhattan distance `n` of any source.
///
/// For each source, walks the exact-distance shells d = 0..=n: a fixed
/// `dr` in [-d, d] leaves a budget of d - |dr| for `dc`, so each `(dr, dc)`
/// with |dr| + |dc| == d is emitted once, and the union over d is the closed
/// L1 ball of radius n with no offset derived twice for a single source.
///
/// O(sources * n^2) offset work. Kept independent of the BFS engine so the
/// two can cross-check each other.
pub fn neighborhood(grid: &Grid<i32>, sources: &[Pos], n: usize) -> Grid<bool> {
    let mut mask = Grid::new(grid.rows, grid.cols);
    let n = n as i64;
    for &(sr, sc) in sources {
        for d in 0..=n {
            for dr in -d..=d {
                let rem = d - dr.abs();
                for dc in -rem..=rem {
                    if let Some((r, c)) = offset(sr, sc, dr, dc, grid.rows, grid.cols) {
                        mask.set(r, c, true);
                    }
                }
            }
        }
    }
    mask
}
