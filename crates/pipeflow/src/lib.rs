//! Pipe network connectivity on a 2-D grid.
//!
//! A network is a set of element records `(identifier, x, y)` in visual
//! coordinates (origin bottom-left). The engine places them on a row-major
//! grid, models each glyph's open directions, and runs a breadth-first search
//! from the single source `*` to find which lettered sinks it reaches.
//!
//! Layout
//! - `network`: direction model, adjacency rule, coordinate transform, grid, search.
//! - `input`: line-oriented reader/writer for the text record format.
//! - `rand`: seeded random networks for benchmarks and property tests.

pub mod api;
pub mod input;
pub mod network;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use network::{solve, solve_with_cfg, ElementRecord, NetworkError, SolveCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::input::{format_records, parse_records, solve_text, ParseError, ParseMode};
    pub use crate::network::{
        connected, directions, reachable_sinks, search, solve, solve_with_cfg, DirSet, Direction,
        ElementRecord, Glyph, Grid, NetworkError, Pos, Reach, SolveCfg,
    };
    pub use crate::rand::{draw_network, NetworkCfg, ReplayToken};
}
