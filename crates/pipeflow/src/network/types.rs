//! Data types for the pipe network and its search.
//!
//! Kept small and explicit so `model`, `grid` and `bfs` stay easy to read.

use std::fmt;

/// Compass direction on the grid, in internal orientation (UP = row - 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four axis directions, in exploration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Fixed involution: UP↔DOWN, LEFT↔RIGHT.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// `(d_row, d_col)` step for this direction.
    #[inline]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            Direction::Up => 0b0001,
            Direction::Down => 0b0010,
            Direction::Left => 0b0100,
            Direction::Right => 0b1000,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(s)
    }
}

/// Set of directions as a 4-bit mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirSet(u8);

impl DirSet {
    pub const EMPTY: DirSet = DirSet(0);
    pub const ALL: DirSet = DirSet(0b1111);

    /// Build a set from a list of directions (usable in `const` tables).
    pub const fn of(dirs: &[Direction]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < dirs.len() {
            bits |= dirs[i].bit();
            i += 1;
        }
        DirSet(bits)
    }

    #[inline]
    pub fn contains(self, d: Direction) -> bool {
        self.0 & d.bit() != 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in `Direction::ALL` order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

/// One input element: identifier plus visual coordinates (y grows upward).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementRecord {
    pub ident: char,
    pub x: usize,
    pub y: usize,
}

impl ElementRecord {
    #[inline]
    pub fn new(ident: char, x: usize, y: usize) -> Self {
        Self { ident, x, y }
    }
}

/// Internal grid position; row 0 is the top row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step one cell in `dir`; `None` when the step leaves the non-negative quadrant.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.offset();
        Some(Pos {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Classified cell content.
///
/// Invariants:
/// - `Sink` holds an alphabetic char.
/// - `Pipe` holds one of the ten box-drawing glyphs of the direction table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Glyph {
    #[default]
    Empty,
    Source,
    Sink(char),
    Pipe(char),
}

impl Glyph {
    /// The identifier character this glyph was built from (space for `Empty`).
    #[inline]
    pub fn ident(self) -> char {
        match self {
            Glyph::Empty => ' ',
            Glyph::Source => '*',
            Glyph::Sink(c) | Glyph::Pipe(c) => c,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Glyph::Empty)
    }
}

/// Engine configuration.
#[derive(Clone, Copy, Debug)]
pub struct SolveCfg {
    /// Upper bound on `rows × cols` accepted before the grid is allocated.
    pub max_cells: usize,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self { max_cells: 1 << 24 }
    }
}
