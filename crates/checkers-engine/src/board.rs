//! Board representation.

use std::fmt;

use checkers_core::{Cell, Diagram, DiagramError, PieceKind, Side, Square, BOARD_SIZE};

/// A 6×6 checkers board.
///
/// Boards are small `Copy` values. Every transformation produces a new board,
/// so search branches derived from the same ancestor never share state.
/// Equality and hashing cover the full cell contents, which is what
/// repetition detection keys on.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; Square::COUNT],
}

impl Board {
    /// Creates a board with every playable cell empty.
    pub fn empty() -> Self {
        Board {
            cells: *Diagram::default().cells(),
        }
    }

    /// Creates the standard starting position: Black men on rows 4-5,
    /// White men on rows 0-1.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for sq in Square::all().filter(|sq| sq.is_playable()) {
            match sq.row() {
                0 | 1 => board.set(sq, Cell::WhiteMan),
                4 | 5 => board.set(sq, Cell::BlackMan),
                _ => {}
            }
        }
        board
    }

    /// Creates a board from a text diagram.
    pub fn from_diagram(text: &str) -> Result<Self, DiagramError> {
        let diagram = Diagram::parse(text)?;
        Ok(Board {
            cells: *diagram.cells(),
        })
    }

    /// Returns the board as a text diagram.
    pub fn to_diagram(&self) -> String {
        Diagram::from_cells(self.cells).to_diagram()
    }

    /// Returns the state of a cell.
    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.index()]
    }

    /// Returns a copy of the board with `cell` placed on `sq`.
    ///
    /// Unplayable squares are left untouched.
    pub fn with(mut self, sq: Square, cell: Cell) -> Self {
        if sq.is_playable() {
            self.set(sq, cell);
        }
        self
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, cell: Cell) {
        debug_assert!(sq.is_playable() && cell != Cell::Unplayable);
        self.cells[sq.index()] = cell;
    }

    /// Iterates over the pieces of `side` in row-major order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Cell)> + '_ {
        Square::all()
            .map(|sq| (sq, self.get(sq)))
            .filter(move |(_, cell)| cell.belongs_to(side))
    }

    /// Returns the number of pieces `side` has on the board.
    pub fn count(&self, side: Side) -> usize {
        self.pieces(side).count()
    }

    /// Returns the number of pieces of a given side and kind.
    pub fn count_kind(&self, side: Side, kind: PieceKind) -> usize {
        let target = Cell::piece(side, kind);
        self.cells.iter().filter(|cell| **cell == target).count()
    }

    /// Returns true if `side` has at least one piece.
    pub fn has_pieces(&self, side: Side) -> bool {
        self.cells.iter().any(|cell| cell.belongs_to(side))
    }

    /// Crowns every man standing on its promotion row.
    pub(crate) fn promote_men(&mut self) {
        for side in Side::ALL {
            for col in 0..BOARD_SIZE {
                let Some(sq) = Square::new(side.promotion_row(), col) else {
                    continue;
                };
                let cell = self.get(sq);
                if cell == Cell::piece(side, PieceKind::Man) {
                    self.cells[sq.index()] = cell.promoted();
                }
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

/// Returns the standard starting position.
pub fn initial_board() -> Board {
    Board::initial()
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_diagram())
    }
}

/// Renders the grid with row and column coordinates.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{}", row)?;
            for col in 0..BOARD_SIZE {
                let symbol = match Square::new(row, col).map(|sq| self.get(sq)) {
                    Some(Cell::Unplayable) | None => ' ',
                    Some(cell) => cell.to_char(),
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn initial_position() {
        let board = Board::initial();
        assert_eq!(board.to_diagram(), Diagram::STARTPOS);
        assert_eq!(board.count(Side::Black), 6);
        assert_eq!(board.count(Side::White), 6);
        assert_eq!(board.count_kind(Side::Black, PieceKind::King), 0);
        assert_eq!(board.get(sq(4, 1)), Cell::BlackMan);
        assert_eq!(board.get(sq(1, 0)), Cell::WhiteMan);
        assert_eq!(board.get(sq(2, 1)), Cell::Empty);
    }

    #[test]
    fn diagram_roundtrip() {
        let text = "_._._./._B_._/_w_w_./._._._/_w_w_./._._._";
        let board = Board::from_diagram(text).unwrap();
        assert_eq!(board.to_diagram(), text);
        assert_eq!(board.get(sq(1, 2)), Cell::BlackKing);
    }

    #[test]
    fn with_ignores_unplayable_squares() {
        let board = Board::empty().with(sq(0, 0), Cell::BlackMan);
        assert_eq!(board.get(sq(0, 0)), Cell::Unplayable);
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn with_is_copy_on_write() {
        let original = Board::empty();
        let changed = original.with(sq(3, 2), Cell::WhiteKing);
        assert_eq!(original.get(sq(3, 2)), Cell::Empty);
        assert_eq!(changed.get(sq(3, 2)), Cell::WhiteKing);
    }

    #[test]
    fn pieces_in_row_major_order() {
        let board = Board::empty()
            .with(sq(4, 3), Cell::BlackMan)
            .with(sq(1, 2), Cell::BlackKing)
            .with(sq(2, 1), Cell::WhiteMan);
        let black: Vec<_> = board.pieces(Side::Black).collect();
        assert_eq!(
            black,
            vec![(sq(1, 2), Cell::BlackKing), (sq(4, 3), Cell::BlackMan)]
        );
        assert!(board.has_pieces(Side::White));
        assert!(!Board::empty().has_pieces(Side::White));
    }

    #[test]
    fn promote_men_on_back_rows() {
        let mut board = Board::empty()
            .with(sq(0, 1), Cell::BlackMan)
            .with(sq(5, 0), Cell::WhiteMan)
            .with(sq(0, 3), Cell::WhiteMan)
            .with(sq(5, 2), Cell::BlackMan);
        board.promote_men();
        assert_eq!(board.get(sq(0, 1)), Cell::BlackKing);
        assert_eq!(board.get(sq(5, 0)), Cell::WhiteKing);
        // Men on their own back row stay men.
        assert_eq!(board.get(sq(0, 3)), Cell::WhiteMan);
        assert_eq!(board.get(sq(5, 2)), Cell::BlackMan);
    }

    #[test]
    fn boards_hash_by_contents() {
        use std::collections::HashSet;
        let mut seen = HashSet::new();
        seen.insert(Board::initial());
        assert!(seen.contains(&Board::from_diagram(Diagram::STARTPOS).unwrap()));
        assert!(!seen.contains(&Board::empty()));
    }

    #[test]
    fn display_grid() {
        let rendered = Board::initial().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "  0 1 2 3 4 5");
        assert_eq!(lines[1], "0   w   w   w");
        assert_eq!(lines[3], "2   .   .   .");
        assert_eq!(lines[6], "5 b   b   b  ");
    }
}
