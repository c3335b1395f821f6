//! Pipe network engine: glyph directions, adjacency, grid, and reachability.
//!
//! Pipeline
//! - Records arrive in visual coordinates (y grows upward). `coords` computes
//!   the global extent in a first pass, then maps each record to `(row, col)`
//!   with row 0 at the top.
//! - `grid` places classified glyphs into a dense `rows × cols` matrix.
//!   Unknown identifiers are rejected here, before any traversal.
//! - `bfs` walks from the source `*`, following an edge only when both
//!   endpoints open toward each other, and collects the lettered sinks it hits.
//!
//! Split
//! - `types.rs` (data types), `model.rs` (direction table + adjacency rule),
//!   `coords.rs` (visual → internal), `grid.rs` (storage + neighbors),
//!   `bfs.rs` (search + `solve`), `error.rs`.

mod bfs;
mod coords;
mod error;
mod grid;
mod model;
mod types;

pub use bfs::{reachable_sinks, search, solve, solve_with_cfg, Reach};
pub use coords::{to_internal, Extent};
pub use error::NetworkError;
pub use grid::Grid;
pub use model::{connected, directions, PIPE_GLYPHS};
pub use types::{DirSet, Direction, ElementRecord, Glyph, Pos, SolveCfg};
