//! Capture-chain enumeration.

use super::piece_directions;
use crate::Board;
use checkers_core::{Cell, Square};

/// A single jump, identified by the cell jumped over and the landing cell.
type Jump = (Square, Square);

/// Enumerates every maximal capture chain `piece` can make from `origin`.
///
/// Each chain lists the visited cells, origin first, so a chain with `n`
/// cells captures `n - 1` pieces. A piece with no capture contributes nothing.
///
/// Chains are explored depth-first on hypothetical boards where each jumped
/// piece has been removed. The piece keeps its kind for the whole chain, even
/// if it passes over its promotion row. Jumps already taken are remembered only
/// along the current chain, so sibling branches may yield identical chains;
/// those duplicates are kept.
pub fn enumerate_captures(board: &Board, origin: Square, piece: Cell) -> Vec<Vec<Square>> {
    let mut chains = Vec::new();
    if piece.side().is_none() {
        return chains;
    }

    let mut path = vec![origin];
    let mut used = Vec::new();
    extend_chain(board, piece, &mut path, &mut used, &mut chains);
    chains
}

fn extend_chain(
    board: &Board,
    piece: Cell,
    path: &mut Vec<Square>,
    used: &mut Vec<Jump>,
    chains: &mut Vec<Vec<Square>>,
) {
    let Some(side) = piece.side() else {
        return;
    };
    let from = path[path.len() - 1];

    for &dir in piece_directions(piece) {
        let (Some(over), Some(land)) = (from.offset(dir, 1), from.offset(dir, 2)) else {
            continue;
        };
        if !board.get(over).belongs_to(side.opposite()) || board.get(land) != Cell::Empty {
            continue;
        }
        let jump = (over, land);
        if used.contains(&jump) {
            continue;
        }

        let mut next = *board;
        next.set(from, Cell::Empty);
        next.set(over, Cell::Empty);
        next.set(land, piece);

        path.push(land);
        used.push(jump);

        let found = chains.len();
        extend_chain(&next, piece, path, used, chains);
        if chains.len() == found {
            // No further jump from here: the chain is maximal.
            chains.push(path.clone());
        }

        path.pop();
        used.pop();
    }
}
