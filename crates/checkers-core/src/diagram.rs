//! Text diagrams of board contents.
//!
//! A diagram lists the six rows from row 0 to row 5, separated by `/`.
//! Each row has six characters: `_` for an unplayable cell, `.` for an empty
//! playable cell, `b`/`w` for men and `B`/`W` for kings.

use crate::{Cell, Square, BOARD_SIZE};
use thiserror::Error;

/// Errors that can occur when parsing diagrams.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiagramError {
    #[error("invalid diagram: expected 6 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("row {row} has {len} cells, expected 6")]
    InvalidRowLength { row: usize, len: usize },

    #[error("invalid character '{ch}' in row {row}")]
    InvalidCharacter { ch: char, row: usize },

    #[error("cell {0} does not match the board's unplayable pattern")]
    ParityMismatch(Square),
}

/// Parsed diagram: one cell state per square, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    cells: [Cell; Square::COUNT],
}

impl Diagram {
    /// The standard starting position.
    pub const STARTPOS: &'static str = "_w_w_w/w_w_w_/_._._./._._._/_b_b_b/b_b_b_";

    /// Parses a diagram string.
    ///
    /// Surrounding whitespace is ignored and newlines may be used instead of `/`.
    pub fn parse(text: &str) -> Result<Self, DiagramError> {
        let rows: Vec<&str> = text
            .trim()
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE as usize {
            return Err(DiagramError::InvalidRowCount(rows.len()));
        }

        let mut cells = [Cell::Unplayable; Square::COUNT];
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != BOARD_SIZE as usize {
                return Err(DiagramError::InvalidRowLength { row, len });
            }

            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::from_char(ch).ok_or(DiagramError::InvalidCharacter { ch, row })?;
                let Some(sq) = Square::new(row as u8, col as u8) else {
                    continue;
                };
                if sq.is_playable() == (cell == Cell::Unplayable) {
                    return Err(DiagramError::ParityMismatch(sq));
                }
                cells[sq.index()] = cell;
            }
        }

        Ok(Diagram { cells })
    }

    /// Builds a diagram from cell states.
    pub const fn from_cells(cells: [Cell; Square::COUNT]) -> Self {
        Diagram { cells }
    }

    /// Returns the parsed cell states, row-major.
    pub const fn cells(&self) -> &[Cell; Square::COUNT] {
        &self.cells
    }

    /// Converts the diagram back to its string form.
    pub fn to_diagram(&self) -> String {
        self.cells
            .chunks(BOARD_SIZE as usize)
            .map(|row| row.iter().map(|cell| cell.to_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for Diagram {
    fn default() -> Self {
        let mut cells = [Cell::Unplayable; Square::COUNT];
        for sq in Square::all().filter(|sq| sq.is_playable()) {
            cells[sq.index()] = Cell::Empty;
        }
        Diagram { cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_startpos() {
        let diagram = Diagram::parse(Diagram::STARTPOS).unwrap();
        let cells = diagram.cells();
        assert_eq!(cells[1], Cell::WhiteMan);
        assert_eq!(cells[0], Cell::Unplayable);
        assert_eq!(cells.iter().filter(|c| **c == Cell::WhiteMan).count(), 6);
        assert_eq!(cells.iter().filter(|c| **c == Cell::BlackMan).count(), 6);
        assert_eq!(cells.iter().filter(|c| **c == Cell::Empty).count(), 6);
    }

    #[test]
    fn roundtrip() {
        let original = "_._._./._B_._/_w_w_./._._._/_w_w_./._._._";
        let parsed = Diagram::parse(original).unwrap();
        assert_eq!(parsed.to_diagram(), original);
    }

    #[test]
    fn accepts_newline_rows() {
        let text = "
            _w_w_w
            w_w_w_
            _._._.
            ._._._
            _b_b_b
            b_b_b_
        ";
        assert_eq!(
            Diagram::parse(text).unwrap(),
            Diagram::parse(Diagram::STARTPOS).unwrap()
        );
    }

    #[test]
    fn invalid_row_count() {
        assert_eq!(
            Diagram::parse("_w_w_w/w_w_w_"),
            Err(DiagramError::InvalidRowCount(2))
        );
    }

    #[test]
    fn invalid_row_length() {
        assert_eq!(
            Diagram::parse("_w_w_w/w_w_w/_._._./._._._/_b_b_b/b_b_b_"),
            Err(DiagramError::InvalidRowLength { row: 1, len: 5 })
        );
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            Diagram::parse("_w_w_w/w_w_w_/_._x_./._._._/_b_b_b/b_b_b_"),
            Err(DiagramError::InvalidCharacter { ch: 'x', row: 2 })
        );
    }

    #[test]
    fn piece_on_unplayable_cell() {
        assert_eq!(
            Diagram::parse("bw_w_w/w_w_w_/_._._./._._._/_b_b_b/b_b_b_"),
            Err(DiagramError::ParityMismatch(Square::new(0, 0).unwrap()))
        );
    }

    #[test]
    fn default_is_empty_board() {
        let diagram = Diagram::default();
        assert_eq!(diagram.to_diagram(), "_._._./._._._/_._._./._._._/_._._./._._._");
    }

    #[test]
    fn error_display() {
        let err = DiagramError::InvalidRowCount(3);
        assert!(format!("{}", err).contains('3'));

        let err = DiagramError::InvalidCharacter { ch: 'q', row: 4 };
        assert!(format!("{}", err).contains('q'));

        let err = DiagramError::ParityMismatch(Square::new(0, 0).unwrap());
        assert!(format!("{}", err).contains("(0,0)"));
    }
}
