use std::fmt;

use super::types::Pos;

/// Errors surfaced while building a grid or solving a network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Identifier is not `*`, a letter, a space, or one of the ten pipe glyphs.
    /// `at` carries the visual `(x, y)` when the identifier came from a record.
    UnknownIdentifier {
        ident: char,
        at: Option<(usize, usize)>,
    },
    /// More than one `*` cell survived grid construction.
    MultipleSources { first: Pos, second: Pos },
    /// `rows × cols` exceeds `SolveCfg::max_cells` (or overflows).
    GridTooLarge {
        rows: usize,
        cols: usize,
        max_cells: usize,
    },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::UnknownIdentifier { ident, at: None } => {
                write!(f, "unknown identifier {ident:?}")
            }
            NetworkError::UnknownIdentifier {
                ident,
                at: Some((x, y)),
            } => write!(f, "unknown identifier {ident:?} at visual ({x}, {y})"),
            NetworkError::MultipleSources { first, second } => write!(
                f,
                "network has more than one source: cells {first} and {second}"
            ),
            NetworkError::GridTooLarge {
                rows,
                cols,
                max_cells,
            } => write!(
                f,
                "grid of {rows}×{cols} cells exceeds the limit of {max_cells} cells"
            ),
        }
    }
}

impl std::error::Error for NetworkError {}
