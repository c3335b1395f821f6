//! Visual → internal coordinates.
//!
//! Visual coordinates put y=0 on the bottom row; the grid is row-major with
//! row 0 on top, so the row index mirrors y around the global maximum. The
//! extent must therefore be computed over *all* records before any of them is
//! transformed.

use super::types::{ElementRecord, Pos};

/// Largest visual coordinates over a record set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extent {
    pub max_x: usize,
    pub max_y: usize,
}

impl Extent {
    /// First pass over the records; `None` when there are none.
    pub fn of(records: &[ElementRecord]) -> Option<Extent> {
        records.iter().fold(None, |acc, r| {
            Some(match acc {
                None => Extent {
                    max_x: r.x,
                    max_y: r.y,
                },
                Some(e) => Extent {
                    max_x: e.max_x.max(r.x),
                    max_y: e.max_y.max(r.y),
                },
            })
        })
    }

    /// `max_y + 1`, or `None` when that overflows.
    #[inline]
    pub fn rows(&self) -> Option<usize> {
        self.max_y.checked_add(1)
    }

    /// `max_x + 1`, or `None` when that overflows.
    #[inline]
    pub fn cols(&self) -> Option<usize> {
        self.max_x.checked_add(1)
    }

    /// Transform a record's coordinates into this extent's grid.
    #[inline]
    pub fn place(&self, r: &ElementRecord) -> Pos {
        to_internal(self.max_y, r.x, r.y)
    }
}

/// `row = max_y - y`, `col = x`.
///
/// `y <= max_y` holds by construction when `max_y` comes from `Extent::of`;
/// `abs_diff` keeps the function total regardless.
#[inline]
pub fn to_internal(max_y: usize, x: usize, y: usize) -> Pos {
    Pos {
        row: max_y.abs_diff(y),
        col: x,
    }
}
