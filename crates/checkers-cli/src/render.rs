//! Text rendering for terminal play.

use checkers_engine::{Board, GameResult, Move, MoveList, Side};
use std::fmt::Write;

/// Renders the board followed by whose turn it is.
pub fn position(board: &Board, side_to_move: Side) -> String {
    format!("{}{} to move", board, side_to_move)
}

/// Renders moves as a numbered list, one per line.
pub fn move_list(moves: &MoveList) -> String {
    let mut out = String::new();
    for (i, mv) in moves.iter().enumerate() {
        let _ = writeln!(out, "{:>3}: {} ({})", i, mv, move_kind(mv));
    }
    out
}

/// Describes a played move, optionally with the nodes searched for it.
pub fn played_move(side: Side, agent: &str, mv: &Move, nodes: Option<u64>) -> String {
    match nodes {
        Some(nodes) => format!("{} ({}) plays {}  [nodes: {}]", side, agent, mv, nodes),
        None => format!("{} ({}) plays {}", side, agent, mv),
    }
}

/// Announces the end of a game.
pub fn game_over(result: GameResult) -> String {
    format!("Game over: {}", result)
}

fn move_kind(mv: &Move) -> &'static str {
    if mv.is_capture() {
        "capture"
    } else {
        "step"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_engine::{generate_moves, DrawReason, Square};

    #[test]
    fn move_list_is_numbered_in_generation_order() {
        let moves = generate_moves(&Board::initial(), Side::Black);
        let text = move_list(&moves);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "  0: (4,1)->(3,0) (step)");
        assert_eq!(lines[4], "  4: (4,5)->(3,4) (step)");
    }

    #[test]
    fn captures_are_labelled() {
        let sq = |r, c| Square::new(r, c).unwrap();
        let mut moves = MoveList::new();
        moves.push(Move::capture(vec![sq(4, 1), sq(2, 3)]));
        assert_eq!(move_list(&moves), "  0: (4,1)x(2,3) (capture)\n");
    }

    #[test]
    fn position_ends_with_turn() {
        let text = position(&Board::initial(), Side::White);
        assert!(text.starts_with("  0 1 2 3 4 5\n"));
        assert!(text.ends_with("White to move"));
    }

    #[test]
    fn played_move_with_and_without_nodes() {
        let sq = |r, c| Square::new(r, c).unwrap();
        let mv = Move::step(sq(4, 1), sq(3, 0));
        assert_eq!(
            played_move(Side::Black, "minimax", &mv, Some(77)),
            "Black (minimax) plays (4,1)->(3,0)  [nodes: 77]"
        );
        assert_eq!(
            played_move(Side::White, "random", &mv, None),
            "White (random) plays (4,1)->(3,0)"
        );
    }

    #[test]
    fn game_over_text() {
        assert_eq!(
            game_over(GameResult::Draw(DrawReason::Repetition)),
            "Game over: Draw by repetition"
        );
    }
}
