pub mod bfs;
pub mod diamond;
pub mod error;
pub mod grid;

use std::time::{Duration, Instant};

use serde::Serialize;

pub use error::{Error, Result};
use grid::{Grid, Pos};

/// Engine selection. Both produce identical neighborhood sets for every
/// valid input; `Bfs` is the production path, `Diamond` the brute-force
/// reference it is cross-checked against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    Diamond,
    #[default]
    Bfs,
}

/// Outcome of one neighborhood computation. Immutable once built.
#[derive(Clone, Debug, Serialize)]
pub struct NeighborhoodResult {
    /// Size of the neighborhood set.
    pub count: usize,
    /// Covered cells, unique, listed in row-major order.
    pub neighborhood_cells: Vec<Pos>,
    /// Positive cells in row-major scan order.
    pub source_cells: Vec<Pos>,
    /// Wall time spent on the computation. Informational only.
    pub computation_time: Duration,
}

/// Compute every cell within Manhattan distance `n` of any positive cell.
///
/// Validates the grid shape, rejects negative `n` with
/// [`Error::NegativeRadius`], then runs the selected engine. Source cells
/// are always part of their own neighborhood (distance 0), and a grid with
/// no positive cells yields an empty result for any `n`.
pub fn compute_neighborhood(
    rows: &[Vec<i32>],
    n: i64,
    method: Method,
) -> Result<NeighborhoodResult> {
    let start = Instant::now();

    let grid = Grid::from_rows(rows)?;
    if n < 0 {
        return Err(Error::NegativeRadius(n));
    }
    let n = n as usize;

    let sources = grid.sources();
    let mask = match method {
        Method::Diamond => diamond::neighborhood(&grid, &sources, n),
        Method::Bfs => bfs::neighborhood(&grid, &sources, n),
    };

    // Read the mask out in row-major order: a canonical representation of
    // the set, so identical inputs produce identical cell lists.
    let mut neighborhood_cells = Vec::new();
    for r in 0..grid.rows {
        for c in 0..grid.cols {
            if mask.get(r, c) {
                neighborhood_cells.push((r, c));
            }
        }
    }

    Ok(NeighborhoodResult {
        count: neighborhood_cells.len(),
        neighborhood_cells,
        source_cells: sources,
        computation_time: start.elapsed(),
    })
}
