//! Curated API surface for callers (CLI, benches, experiments).
//!
//! Prefer these re-exports over reaching into submodules; the internal module
//! split may change.

// Records and text format
pub use crate::input::{
    format_records, parse_line, parse_records, solve_text, ParseError, ParseMode, SolveTextError,
};
// Core engine
pub use crate::network::{
    connected, directions, reachable_sinks, search, solve, solve_with_cfg, to_internal, Extent,
    Grid, NetworkError, Reach, SolveCfg,
};
pub use crate::network::{DirSet, Direction, ElementRecord, Glyph, Pos, PIPE_GLYPHS};
// Random networks
pub use crate::rand::{draw_network, NetworkCfg, ReplayToken};
