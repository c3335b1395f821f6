//! Breadth-first reachability from the source, and the `solve` entry points.

use std::collections::{BTreeSet, HashSet, VecDeque};

use tracing::debug;

use super::error::NetworkError;
use super::grid::Grid;
use super::types::{ElementRecord, Glyph, Pos, SolveCfg};

/// Outcome of one search run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reach {
    /// Source cell, if the grid has one.
    pub source: Option<Pos>,
    /// Visited cells in discovery order (source first).
    pub visited: Vec<Pos>,
    /// Reachable sink cells with their letters, row-major.
    pub sinks: Vec<(Pos, char)>,
}

impl Reach {
    /// Distinct reachable sink letters, ascending.
    pub fn sink_letters(&self) -> BTreeSet<char> {
        self.sinks.iter().map(|&(_, c)| c).collect()
    }

    /// Sink letters concatenated in ascending order, each once.
    pub fn sink_string(&self) -> String {
        self.sink_letters().into_iter().collect()
    }
}

/// Search runner carrying the frontier and the visited set.
struct BfsRunner<'a> {
    grid: &'a Grid,
    seen: HashSet<Pos>,
    order: Vec<Pos>,
    queue: VecDeque<Pos>,
}

impl<'a> BfsRunner<'a> {
    fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            seen: HashSet::new(),
            order: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    fn visit(&mut self, p: Pos) {
        if self.seen.insert(p) {
            self.order.push(p);
            self.queue.push_back(p);
        }
    }

    fn run(mut self, source: Pos) -> (Vec<Pos>, HashSet<Pos>) {
        let grid = self.grid;
        self.visit(source);
        while let Some(cur) = self.queue.pop_front() {
            let Some(here) = grid.get(cur) else {
                continue;
            };
            for (dir, next) in grid.neighbors(cur) {
                let Some(there) = grid.get(next) else {
                    continue;
                };
                if there.is_empty() || !here.connects_to(there, dir) {
                    continue;
                }
                self.visit(next);
            }
        }
        (self.order, self.seen)
    }
}

/// Run the search over `grid`.
///
/// One pass locates the source and the sinks; without a source the result is
/// empty. Each cell enters the frontier at most once, so the walk is bounded
/// by `rows × cols`.
pub fn search(grid: &Grid) -> Reach {
    let mut source = None;
    let mut sinks = Vec::new();
    for (p, g) in grid.cells() {
        match g {
            Glyph::Source => source = Some(p),
            Glyph::Sink(c) => sinks.push((p, c)),
            _ => {}
        }
    }
    let Some(src) = source else {
        debug!(sinks = sinks.len(), "no source; nothing reachable");
        return Reach::default();
    };

    let (visited, seen) = BfsRunner::new(grid).run(src);
    sinks.retain(|(p, _)| seen.contains(p));
    debug!(
        source = %src,
        visited = visited.len(),
        reachable_sinks = sinks.len(),
        "search finished"
    );
    Reach {
        source: Some(src),
        visited,
        sinks,
    }
}

/// Distinct letters of the sinks reachable from the source.
pub fn reachable_sinks(grid: &Grid) -> BTreeSet<char> {
    search(grid).sink_letters()
}

/// Reachable sink letters, sorted ascending and deduplicated, as one string.
pub fn solve(records: &[ElementRecord]) -> Result<String, NetworkError> {
    solve_with_cfg(records, SolveCfg::default())
}

/// `solve` with an explicit configuration.
pub fn solve_with_cfg(records: &[ElementRecord], cfg: SolveCfg) -> Result<String, NetworkError> {
    let grid = Grid::from_records(records, cfg)?;
    Ok(search(&grid).sink_string())
}
