//! Production engine: multi-source BFS over the 4-connected grid graph.

use std::collections::VecDeque;

use crate::grid::{Grid, Pos, neighbors4};

/// Coverage mask of every cell within Manhattan distance `n` of any source.
///
/// Unit-weight BFS seeded from all sources at once, each marked visited on
/// enqueue so overlapping neighborhoods never re-enqueue a cell. Shortest
/// grid-path length equals Manhattan distance, so a cell is visited at the
/// L1 distance of its nearest source; a cell popped at distance n is
/// terminal (counted, not expanded).
///
/// Each cell is enqueued at most once: O(grid area).
pub fn neighborhood(grid: &Grid<i32>, sources: &[Pos], n: usize) -> Grid<bool> {
    let mut visited: Grid<bool> = Grid::new(grid.rows, grid.cols);
    let mut queue: VecDeque<(Pos, usize)> = VecDeque::new();

    for &(r, c) in sources {
        visited.set(r, c, true);
        queue.push_back(((r, c), 0));
    }

    while let Some(((r, c), dist)) = queue.pop_front() {
        if dist == n {
            continue;
        }
        for (nr, nc) in neighbors4(r, c, grid.rows, grid.cols) {
            if !visited.get(nr, nc) {
                visited.set(nr, nc, true);
                queue.push_back(((nr, nc), dist + 1));
            }
        }
    }
    visited
}
