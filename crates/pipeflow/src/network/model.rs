//! Direction model (glyph → open directions) and the adjacency rule.

use super::error::NetworkError;
use super::types::{DirSet, Direction, Glyph};

use super::types::Direction::{Down, Left, Right, Up};

/// Open directions of the ten pipe glyphs: straights, corners, and T-junctions.
const PIPE_TABLE: [(char, DirSet); 10] = [
    ('═', DirSet::of(&[Left, Right])),
    ('║', DirSet::of(&[Up, Down])),
    ('╔', DirSet::of(&[Down, Right])),
    ('╗', DirSet::of(&[Down, Left])),
    ('╚', DirSet::of(&[Up, Right])),
    ('╝', DirSet::of(&[Up, Left])),
    ('╠', DirSet::of(&[Up, Down, Right])),
    ('╣', DirSet::of(&[Up, Down, Left])),
    ('╦', DirSet::of(&[Down, Left, Right])),
    ('╩', DirSet::of(&[Up, Left, Right])),
];

/// The ten pipe glyphs, in table order.
pub const PIPE_GLYPHS: [char; 10] = {
    let mut out = [' '; 10];
    let mut i = 0;
    while i < PIPE_TABLE.len() {
        out[i] = PIPE_TABLE[i].0;
        i += 1;
    }
    out
};

fn pipe_dirs(c: char) -> Option<DirSet> {
    PIPE_TABLE
        .iter()
        .find_map(|&(g, dirs)| (g == c).then_some(dirs))
}

impl Glyph {
    /// Classify an identifier; `None` for anything outside the accepted alphabet.
    pub fn classify(c: char) -> Option<Glyph> {
        match c {
            ' ' => Some(Glyph::Empty),
            '*' => Some(Glyph::Source),
            c if c.is_alphabetic() => Some(Glyph::Sink(c)),
            c => pipe_dirs(c).map(|_| Glyph::Pipe(c)),
        }
    }

    /// Open directions of this cell. Source and sinks open all four ways.
    pub fn directions(self) -> DirSet {
        match self {
            Glyph::Empty => DirSet::EMPTY,
            Glyph::Source | Glyph::Sink(_) => DirSet::ALL,
            // Pipe glyphs are only constructed through `classify`.
            Glyph::Pipe(c) => pipe_dirs(c).unwrap_or(DirSet::EMPTY),
        }
    }

    /// True iff `self` opens toward `dir` and `other` opens back toward `self`.
    #[inline]
    pub fn connects_to(self, other: Glyph, dir: Direction) -> bool {
        self.directions().contains(dir) && other.directions().contains(dir.opposite())
    }
}

/// Open directions for an identifier.
///
/// `*` and alphabetic identifiers open all four ways; pipe glyphs use the fixed
/// table; space (empty cell) opens none. Anything else is `UnknownIdentifier`.
pub fn directions(ident: char) -> Result<DirSet, NetworkError> {
    Glyph::classify(ident)
        .map(Glyph::directions)
        .ok_or(NetworkError::UnknownIdentifier { ident, at: None })
}

/// Adjacency rule: is `a` connected to `b`, where `dir` points from `a` toward `b`?
///
/// Evaluated in one direction only; callers wanting symmetric adjacency test
/// both `(a, b, dir)` and `(b, a, dir.opposite())`.
pub fn connected(a: char, b: char, dir: Direction) -> Result<bool, NetworkError> {
    Ok(directions(a)?.contains(dir) && directions(b)?.contains(dir.opposite()))
}
