use crate::error::{Error, Result};

/// Cell coordinate as (row, col), 0-indexed from the top-left.
pub type Pos = (usize, usize);

/// Row-major flat grid. No per-cell objects.
#[derive(Clone, Debug)]
pub struct Grid<T> {
    pub data: Vec<T>,
    pub rows: usize,
    pub cols: usize,
}

impl<T: Copy + Default> Grid<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::default(); rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn idx(&self, r: usize, c: usize) -> usize {
        debug_assert!(r < self.rows && c < self.cols);
        r * self.cols + c
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> T {
        self.data[self.idx(r, c)]
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize, v: T) {
        let i = self.idx(r, c);
        self.data[i] = v;
    }
}

impl Grid<i32> {
    /// Build a grid from caller-supplied rows, enforcing the rectangular
    /// invariant: at least one row, a non-empty first row, all rows the
    /// same length.
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(Error::EmptyGrid);
        };
        let cols = first.len();
        if cols == 0 {
            return Err(Error::EmptyGrid);
        }
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::RaggedRow {
                    row: r,
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// All cells holding a strictly positive value, in row-major scan order.
    /// Display layers list sources in this order, so the ordering is part of
    /// the contract.
    pub fn sources(&self) -> Vec<Pos> {
        let mut out = Vec::new();
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.get(r, c) > 0 {
                    out.push((r, c));
                }
            }
        }
        out
    }
}

/// Apply a (dr, dc) offset with bounds checking. Offsets landing outside the
/// grid are dropped, never wrapped or clamped.
#[inline]
pub fn offset(r: usize, c: usize, dr: i64, dc: i64, rows: usize, cols: usize) -> Option<Pos> {
    let nr = r as i64 + dr;
    let nc = c as i64 + dc;
    if nr < 0 || nr >= rows as i64 || nc < 0 || nc >= cols as i64 {
        return None;
    }
    Some((nr as usize, nc as usize))
}

/// 4-connected neighbors, clipped at the grid boundary.
pub fn neighbors4(r: usize, c: usize, rows: usize, cols: usize) -> impl Iterator<Item = Pos> {
    let offsets: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
    let mut out = [(0usize, 0usize); 4];
    let mut n = 0;
    for (dr, dc) in offsets {
        if let Some(pos) = offset(r, c, dr, dc, rows, cols) {
            out[n] = pos;
            n += 1;
        }
    }
    out.into_iter().take(n)
}

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}
