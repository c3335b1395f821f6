//! Dense grid of classified cells with bounds-checked lookup.

use nalgebra::DMatrix;
use tracing::debug;

use super::coords::Extent;
use super::error::NetworkError;
use super::types::{Direction, ElementRecord, Glyph, Pos, SolveCfg};

/// Rectangular `rows × cols` grid; every in-range cell holds a glyph
/// (possibly `Empty`). Read-only once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: DMatrix<Glyph>,
}

impl Grid {
    /// All-empty grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: DMatrix::from_element(rows, cols, Glyph::Empty),
        }
    }

    /// Build from visual records.
    ///
    /// Computes the extent first, then transforms and places every record.
    /// Later records overwrite earlier ones at the same cell. Fails on an
    /// unknown identifier, a grid larger than `cfg.max_cells`, or more than
    /// one surviving source.
    pub fn from_records(records: &[ElementRecord], cfg: SolveCfg) -> Result<Self, NetworkError> {
        let Some(extent) = Extent::of(records) else {
            return Ok(Self::new(0, 0));
        };
        let fits = |rows: usize, cols: usize| {
            rows.checked_mul(cols).is_some_and(|n| n <= cfg.max_cells)
        };
        let (rows, cols) = match (extent.rows(), extent.cols()) {
            (Some(rows), Some(cols)) if fits(rows, cols) => (rows, cols),
            // An overflowing dimension is reported as `usize::MAX`.
            (rows, cols) => {
                return Err(NetworkError::GridTooLarge {
                    rows: rows.unwrap_or(usize::MAX),
                    cols: cols.unwrap_or(usize::MAX),
                    max_cells: cfg.max_cells,
                })
            }
        };
        // Validate every identifier before allocating.
        let glyphs = records
            .iter()
            .map(|r| {
                Glyph::classify(r.ident).ok_or(NetworkError::UnknownIdentifier {
                    ident: r.ident,
                    at: Some((r.x, r.y)),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut grid = Self::new(rows, cols);
        for (r, g) in records.iter().zip(glyphs) {
            let p = extent.place(r);
            grid.cells[(p.row, p.col)] = g;
        }
        grid.check_single_source()?;
        debug!(rows, cols, records = records.len(), "grid built");
        Ok(grid)
    }

    fn check_single_source(&self) -> Result<(), NetworkError> {
        let mut sources = self
            .cells()
            .filter(|(_, g)| *g == Glyph::Source)
            .map(|(p, _)| p);
        match (sources.next(), sources.next()) {
            (Some(first), Some(second)) => Err(NetworkError::MultipleSources { first, second }),
            _ => Ok(()),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Bounds-checked lookup: `None` is out of bounds, `Some(Glyph::Empty)` an empty cell.
    #[inline]
    pub fn get(&self, p: Pos) -> Option<Glyph> {
        self.cells.get((p.row, p.col)).copied()
    }

    /// The four axis neighbours of `p` that lie inside the grid, tagged with
    /// the direction from `p` toward them.
    pub fn neighbors(&self, p: Pos) -> impl Iterator<Item = (Direction, Pos)> + '_ {
        Direction::ALL.into_iter().filter_map(move |d| {
            let q = p.step(d)?;
            (q.row < self.rows() && q.col < self.cols()).then_some((d, q))
        })
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Glyph)> + '_ {
        let cols = self.cols();
        (0..self.rows()).flat_map(move |row| {
            (0..cols).map(move |col| (Pos { row, col }, self.cells[(row, col)]))
        })
    }

    /// Text picture of the grid, top row first, empty cells as spaces.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..self.rows() {
            let line: String = (0..self.cols())
                .map(|col| self.cells[(row, col)].ident())
                .collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}
