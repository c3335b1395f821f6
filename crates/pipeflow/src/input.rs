//! Text record format: one `identifier x y` element per line.
//!
//! Blank lines are ignored. Coordinates are non-negative base-10 integers in
//! visual orientation (y grows upward). Whether an identifier is a *known*
//! glyph is not decided here; that is the grid's job, so an unknown glyph in a
//! well-formed line still reaches the engine and fails there.

use std::fmt;

use tracing::warn;

use crate::network::{solve_with_cfg, ElementRecord, NetworkError, SolveCfg};

/// How malformed lines are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Skip malformed lines with a warning.
    #[default]
    Lenient,
    /// Abort on the first malformed line.
    Strict,
}

/// A malformed input line (line numbers are 1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    WrongTokenCount { line: usize, found: usize },
    BadIdentifier { line: usize, token: String },
    BadCoordinate { line: usize, token: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongTokenCount { line, found } => {
                write!(f, "line {line}: expected 3 tokens, found {found}")
            }
            Self::BadIdentifier { line, token } => {
                write!(f, "line {line}: identifier {token:?} is not a single character")
            }
            Self::BadCoordinate { line, token } => {
                write!(f, "line {line}: coordinate {token:?} is not a non-negative integer")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Failure of `solve_text`: either the text or the network was bad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveTextError {
    Parse(ParseError),
    Network(NetworkError),
}

impl fmt::Display for SolveTextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::Network(e) => write!(f, "network error: {e}"),
        }
    }
}

impl std::error::Error for SolveTextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Network(e) => Some(e),
        }
    }
}

impl From<ParseError> for SolveTextError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<NetworkError> for SolveTextError {
    fn from(e: NetworkError) -> Self {
        Self::Network(e)
    }
}

/// Parse one line. `Ok(None)` for a blank line.
pub fn parse_line(text: &str, line: usize) -> Result<Option<ElementRecord>, ParseError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let &[ident, x, y] = tokens.as_slice() else {
        if tokens.is_empty() {
            return Ok(None);
        }
        return Err(ParseError::WrongTokenCount {
            line,
            found: tokens.len(),
        });
    };
    let mut chars = ident.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(ParseError::BadIdentifier {
            line,
            token: ident.to_string(),
        });
    };
    let coord = |t: &str| {
        t.parse::<usize>().map_err(|_| ParseError::BadCoordinate {
            line,
            token: t.to_string(),
        })
    };
    Ok(Some(ElementRecord::new(c, coord(x)?, coord(y)?)))
}

/// Parse a whole document. A leading UTF-8 byte order mark is ignored.
pub fn parse_records(text: &str, mode: ParseMode) -> Result<Vec<ElementRecord>, ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut out = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        match parse_line(raw, i + 1) {
            Ok(Some(r)) => out.push(r),
            Ok(None) => {}
            Err(e) if mode == ParseMode::Lenient => warn!(%e, "skipping malformed line"),
            Err(e) => return Err(e),
        }
    }
    Ok(out)
}

/// Write records back in the input format, one per line.
pub fn format_records(records: &[ElementRecord]) -> String {
    records
        .iter()
        .map(|r| format!("{} {} {}\n", r.ident, r.x, r.y))
        .collect()
}

/// Parse `text` and solve it.
pub fn solve_text(text: &str, mode: ParseMode, cfg: SolveCfg) -> Result<String, SolveTextError> {
    let records = parse_records(text, mode)?;
    Ok(solve_with_cfg(&records, cfg)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_box_glyphs_and_skips_blank_lines() {
        let text = "* 0 0\n\n═ 1 0\r\nA 2 0\n   \n";
        let recs = parse_records(text, ParseMode::Strict).unwrap();
        assert_eq!(
            recs,
            vec![
                ElementRecord::new('*', 0, 0),
                ElementRecord::new('═', 1, 0),
                ElementRecord::new('A', 2, 0),
            ]
        );
    }

    #[test]
    fn lenient_skips_and_strict_rejects_malformed_lines() {
        let text = "* 0 0\nA 1\nB 2 0 7\nC x 1\nDD 3 3\nE 1 0\n";
        let recs = parse_records(text, ParseMode::Lenient).unwrap();
        assert_eq!(
            recs,
            vec![ElementRecord::new('*', 0, 0), ElementRecord::new('E', 1, 0)]
        );
        let err = parse_records(text, ParseMode::Strict).unwrap_err();
        assert_eq!(err, ParseError::WrongTokenCount { line: 2, found: 2 });
    }

    #[test]
    fn line_errors_name_the_offending_token() {
        assert!(matches!(
            parse_line("A -1 0", 4),
            Err(ParseError::BadCoordinate { line: 4, ref token }) if token == "-1"
        ));
        assert!(matches!(
            parse_line("AB 1 0", 5),
            Err(ParseError::BadIdentifier { line: 5, ref token }) if token == "AB"
        ));
        assert_eq!(parse_line("", 1), Ok(None));
    }

    #[test]
    fn unknown_glyph_is_not_a_parse_error() {
        let recs = parse_records("? 0 0\n", ParseMode::Strict).unwrap();
        assert_eq!(recs, vec![ElementRecord::new('?', 0, 0)]);
        let err = solve_text("* 0 0\n? 1 0\n", ParseMode::Strict, SolveCfg::default()).unwrap_err();
        assert!(matches!(
            err,
            SolveTextError::Network(NetworkError::UnknownIdentifier { ident: '?', .. })
        ));
    }

    #[test]
    fn format_then_parse_preserves_records() {
        let recs = vec![
            ElementRecord::new('*', 0, 2),
            ElementRecord::new('╣', 10, 0),
            ElementRecord::new('z', 3, 7),
        ];
        let text = format_records(&recs);
        assert_eq!(text, "* 0 2\n╣ 10 0\nz 3 7\n");
        assert_eq!(parse_records(&text, ParseMode::Strict).unwrap(), recs);
    }

    #[test]
    fn solve_text_end_to_end() {
        let out = solve_text("* 0 0\n═ 1 0\nA 2 0\n", ParseMode::default(), SolveCfg::default());
        assert_eq!(out.unwrap(), "A");
    }

    #[test]
    fn byte_order_mark_does_not_hide_the_first_record() {
        let text = "\u{feff}* 0 0\n═ 1 0\nA 2 0\n";
        let recs = parse_records(text, ParseMode::Strict).unwrap();
        assert_eq!(recs[0], ElementRecord::new('*', 0, 0));
        let out = solve_text(text, ParseMode::Lenient, SolveCfg::default());
        assert_eq!(out.unwrap(), "A");
    }
}
