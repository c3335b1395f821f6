//! Random pipe networks (reproducible via replay tokens).
//!
//! Model
//! - Shuffle all cells of a `cols × rows` visual rectangle.
//! - The first cell becomes the source, the next `sinks` cells become sinks
//!   lettered `A..Z, a..z` (cycling), and every remaining cell holds a uniformly
//!   drawn pipe glyph with probability `pipe_density`.
//! - Records come out in shuffled order and never share a coordinate, so any
//!   permutation of them describes the same grid.

use ::rand::rngs::StdRng;
use ::rand::seq::SliceRandom;
use ::rand::{Rng, SeedableRng};

use crate::network::{ElementRecord, PIPE_GLYPHS};

const SINK_LETTERS: &[u8; 52] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Network sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct NetworkCfg {
    /// Visual height (distinct y values).
    pub rows: usize,
    /// Visual width (distinct x values).
    pub cols: usize,
    /// Probability that a non-terminal cell holds a pipe. Clamped to [0, 1];
    /// NaN counts as 0.
    pub pipe_density: f64,
    /// Number of sink cells; capped at `rows * cols - 1`.
    pub sinks: usize,
}

impl Default for NetworkCfg {
    fn default() -> Self {
        Self {
            rows: 16,
            cols: 16,
            pipe_density: 0.7,
            sinks: 6,
        }
    }
}

/// Replay token: `(seed, index)` selects one draw of a stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Next token in the same stream.
    #[inline]
    pub fn advance(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }

    fn rng(self) -> StdRng {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(key)
    }
}

/// Letter for the `k`-th sink.
#[inline]
pub fn sink_letter(k: usize) -> char {
    SINK_LETTERS[k % SINK_LETTERS.len()] as char
}

/// Draw one network. Empty when the rectangle has no cells.
pub fn draw_network(cfg: &NetworkCfg, tok: ReplayToken) -> Vec<ElementRecord> {
    let mut rng = tok.rng();
    let mut cells: Vec<(usize, usize)> = (0..cfg.cols)
        .flat_map(|x| (0..cfg.rows).map(move |y| (x, y)))
        .collect();
    if cells.is_empty() {
        return Vec::new();
    }
    cells.shuffle(&mut rng);

    let density = if cfg.pipe_density.is_nan() {
        0.0
    } else {
        cfg.pipe_density.clamp(0.0, 1.0)
    };
    let sinks = cfg.sinks.min(cells.len() - 1);
    let mut out = Vec::with_capacity(cells.len());
    for (k, &(x, y)) in cells.iter().enumerate() {
        let ident = match k {
            0 => '*',
            k if k <= sinks => sink_letter(k - 1),
            _ if rng.gen_bool(density) => PIPE_GLYPHS[rng.gen_range(0..PIPE_GLYPHS.len())],
            _ => continue,
        };
        out.push(ElementRecord::new(ident, x, y));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn draws_are_replayable() {
        let cfg = NetworkCfg::default();
        let tok = ReplayToken::new(7, 3);
        assert_eq!(draw_network(&cfg, tok), draw_network(&cfg, tok));
        assert_ne!(draw_network(&cfg, tok), draw_network(&cfg, tok.advance()));
    }

    #[test]
    fn one_source_requested_sinks_distinct_cells() {
        let cfg = NetworkCfg {
            rows: 5,
            cols: 7,
            pipe_density: 0.5,
            sinks: 4,
        };
        let recs = draw_network(&cfg, ReplayToken::new(11, 0));
        let sources = recs.iter().filter(|r| r.ident == '*').count();
        let sinks: Vec<char> = recs
            .iter()
            .filter(|r| r.ident.is_alphabetic())
            .map(|r| r.ident)
            .collect();
        assert_eq!(sources, 1);
        assert_eq!(sinks.len(), 4);
        let coords: HashSet<(usize, usize)> = recs.iter().map(|r| (r.x, r.y)).collect();
        assert_eq!(coords.len(), recs.len());
        assert!(recs.iter().all(|r| r.x < 7 && r.y < 5));
    }

    #[test]
    fn full_density_fills_every_cell_and_sinks_are_capped() {
        let cfg = NetworkCfg {
            rows: 2,
            cols: 2,
            pipe_density: 1.0,
            sinks: 10,
        };
        let recs = draw_network(&cfg, ReplayToken::default());
        assert_eq!(recs.len(), 4);
        assert_eq!(recs.iter().filter(|r| r.ident.is_alphabetic()).count(), 3);
        let empty = NetworkCfg { rows: 0, ..cfg };
        assert!(draw_network(&empty, ReplayToken::default()).is_empty());
    }

    #[test]
    fn out_of_range_density_is_clamped_and_nan_places_no_pipes() {
        let cfg = NetworkCfg {
            rows: 3,
            cols: 3,
            pipe_density: f64::NAN,
            sinks: 2,
        };
        let recs = draw_network(&cfg, ReplayToken::new(1, 0));
        assert_eq!(recs.len(), 3);
        assert!(recs.iter().all(|r| !PIPE_GLYPHS.contains(&r.ident)));

        let low = NetworkCfg {
            pipe_density: f64::NEG_INFINITY,
            ..cfg
        };
        assert_eq!(draw_network(&low, ReplayToken::new(1, 0)).len(), 3);
        let high = NetworkCfg {
            pipe_density: f64::INFINITY,
            ..cfg
        };
        assert_eq!(draw_network(&high, ReplayToken::new(1, 0)).len(), 9);
    }

    #[test]
    fn sink_letters_cycle_through_both_cases() {
        assert_eq!(sink_letter(0), 'A');
        assert_eq!(sink_letter(25), 'Z');
        assert_eq!(sink_letter(26), 'a');
        assert_eq!(sink_letter(52), 'A');
    }
}
