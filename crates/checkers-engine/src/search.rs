//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Black is the maximizing side and White the minimizing side; scores come
//! from an [`Evaluator`] and are always from Black's point of view. A terminal
//! position scores [`SCORE_INFINITY`] for a Black win and `-SCORE_INFINITY`
//! for a White win, whatever depth remains.

use crate::eval::{Evaluator, Material};
use crate::movegen::{apply_move, generate_moves};
use crate::rules::terminal_state;
use crate::Board;
use checkers_core::{Move, Side};

/// Score of a won position for Black; its negation is a won position for White.
pub const SCORE_INFINITY: i32 = i32::MAX;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 3;

/// Search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Depth in plies, counting the root move.
    pub depth: u32,
    /// Prune with alpha-beta. Turning this off gives plain minimax: the same
    /// scores, more nodes.
    pub alpha_beta: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            alpha_beta: true,
        }
    }
}

/// Outcome of a root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move, or `None` if the side had no legal move.
    pub best_move: Option<Move>,
    /// Score of the chosen move, from Black's point of view.
    pub score: i32,
    /// Search nodes visited below the root.
    pub nodes: u64,
}

/// Returns the score of a position won by `winner`.
#[inline]
pub const fn win_score(winner: Side) -> i32 {
    match winner {
        Side::Black => SCORE_INFINITY,
        Side::White => -SCORE_INFINITY,
    }
}

/// Search state for one root search.
pub struct Searcher<'e> {
    evaluator: &'e dyn Evaluator,
    nodes: u64,
}

impl<'e> Searcher<'e> {
    pub fn new(evaluator: &'e dyn Evaluator) -> Self {
        Searcher {
            evaluator,
            nodes: 0,
        }
    }

    /// Nodes visited so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Alpha-beta minimax from `board` with `side` to move.
    pub fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u32,
        side: Side,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if let Some(winner) = terminal_state(board) {
            return win_score(winner);
        }
        if depth == 0 {
            return self.evaluator.evaluate(board);
        }

        let moves = generate_moves(board, side);
        match side {
            Side::Black => {
                let mut best = -SCORE_INFINITY;
                for mv in &moves {
                    let next = apply_move(board, mv, side);
                    best = best.max(self.alpha_beta(&next, depth - 1, Side::White, alpha, beta));
                    alpha = alpha.max(best);
                    if beta <= alpha {
                        break;
                    }
                }
                best
            }
            Side::White => {
                let mut best = SCORE_INFINITY;
                for mv in &moves {
                    let next = apply_move(board, mv, side);
                    best = best.min(self.alpha_beta(&next, depth - 1, Side::Black, alpha, beta));
                    beta = beta.min(best);
                    if beta <= alpha {
                        break;
                    }
                }
                best
            }
        }
    }

    /// Plain minimax without pruning.
    pub fn minimax(&mut self, board: &Board, depth: u32, side: Side) -> i32 {
        self.nodes += 1;

        if let Some(winner) = terminal_state(board) {
            return win_score(winner);
        }
        if depth == 0 {
            return self.evaluator.evaluate(board);
        }

        let scores = generate_moves(board, side)
            .into_iter()
            .map(|mv| {
                let next = apply_move(board, &mv, side);
                self.minimax(&next, depth - 1, side.opposite())
            })
            .collect::<Vec<_>>();

        match side {
            Side::Black => scores.into_iter().max().unwrap_or(-SCORE_INFINITY),
            Side::White => scores.into_iter().min().unwrap_or(SCORE_INFINITY),
        }
    }

    /// Scores every root move and keeps the first one reaching the best score.
    ///
    /// Each root move is searched with a full window, so the score of every
    /// candidate is exact and ties fall to generation order.
    pub fn search_root(
        &mut self,
        board: &Board,
        side: Side,
        config: &SearchConfig,
    ) -> SearchResult {
        let moves = generate_moves(board, side);
        let child_depth = config.depth.max(1) - 1;
        let mut best: Option<(Move, i32)> = None;

        for mv in moves {
            let next = apply_move(board, &mv, side);
            let score = if config.alpha_beta {
                self.alpha_beta(
                    &next,
                    child_depth,
                    side.opposite(),
                    -SCORE_INFINITY,
                    SCORE_INFINITY,
                )
            } else {
                self.minimax(&next, child_depth, side.opposite())
            };

            let improves = match &best {
                None => true,
                Some((_, best_score)) => match side {
                    Side::Black => score > *best_score,
                    Side::White => score < *best_score,
                },
            };
            if improves {
                best = Some((mv, score));
            }
        }

        match best {
            Some((best_move, score)) => SearchResult {
                best_move: Some(best_move),
                score,
                nodes: self.nodes,
            },
            None => SearchResult {
                best_move: None,
                score: win_score(side.opposite()),
                nodes: 0,
            },
        }
    }
}

/// Searches with the given configuration and evaluator.
pub fn search(
    board: &Board,
    side: Side,
    config: &SearchConfig,
    evaluator: &dyn Evaluator,
) -> SearchResult {
    let mut searcher = Searcher::new(evaluator);
    let result = searcher.search_root(board, side, config);
    tracing::debug!(
        side = %side,
        depth = config.depth,
        alpha_beta = config.alpha_beta,
        evaluator = evaluator.name(),
        nodes = result.nodes,
        score = result.score,
        best_move = ?result.best_move,
        "search finished"
    );
    result
}

/// Picks a move for `side` with an alpha-beta search of `depth` plies using
/// the material evaluator.
///
/// Returns no move, and zero nodes, when `side` has no legal move.
pub fn choose_move(board: &Board, side: Side, depth: u32) -> SearchResult {
    let config = SearchConfig {
        depth,
        alpha_beta: true,
    };
    search(board, side, &config, &Material)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Positional;
    use checkers_core::{Cell, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn startpos_search() {
        let result = choose_move(&Board::initial(), Side::Black, 3);
        assert_eq!(result.best_move, Some(Move::step(sq(4, 1), sq(3, 0))));
        assert_eq!(result.score, 0);
        assert_eq!(result.nodes, 77);
    }

    #[test]
    fn startpos_node_counts_by_depth() {
        let board = Board::initial();
        assert_eq!(choose_move(&board, Side::Black, 1).nodes, 5);
        assert_eq!(choose_move(&board, Side::Black, 2).nodes, 30);
        assert_eq!(choose_move(&board, Side::Black, 4).nodes, 261);
    }

    #[test]
    fn unpruned_search_visits_more_nodes() {
        let board = Board::initial();
        let config = SearchConfig {
            depth: 3,
            alpha_beta: false,
        };
        let plain = search(&board, Side::Black, &config, &Material);
        let pruned = choose_move(&board, Side::Black, 3);
        assert_eq!(plain.nodes, 136);
        assert_eq!(plain.best_move, pruned.best_move);
        assert_eq!(plain.score, pruned.score);
    }

    #[test]
    fn no_moves_returns_none() {
        let board = Board::empty().with(sq(3, 2), Cell::WhiteMan);
        let result = choose_move(&board, Side::Black, 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
        assert_eq!(result.score, -SCORE_INFINITY);
    }

    #[test]
    fn takes_winning_capture() {
        let board = Board::empty()
            .with(sq(4, 1), Cell::BlackMan)
            .with(sq(3, 2), Cell::WhiteMan)
            .with(sq(1, 4), Cell::WhiteMan);
        let result = choose_move(&board, Side::Black, 3);
        assert_eq!(
            result.best_move,
            Some(Move::capture(vec![sq(4, 1), sq(2, 3), sq(0, 5)]))
        );
        assert_eq!(result.score, SCORE_INFINITY);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn ties_go_to_first_generated_move() {
        let board = Board::empty()
            .with(sq(4, 1), Cell::BlackMan)
            .with(sq(3, 2), Cell::WhiteMan)
            .with(sq(1, 2), Cell::WhiteMan)
            .with(sq(1, 4), Cell::WhiteMan);
        let result = choose_move(&board, Side::Black, 3);
        assert_eq!(
            result.best_move,
            Some(Move::capture(vec![sq(4, 1), sq(2, 3), sq(0, 1)]))
        );
        assert_eq!(result.score, 2);
        assert_eq!(result.nodes, 11);
    }

    #[test]
    fn returns_a_move_even_when_every_move_loses() {
        // White's only piece can step to (4,1) or (4,3) and both lose to the
        // Black king; a move must still be chosen.
        let board = Board::empty()
            .with(sq(3, 2), Cell::WhiteMan)
            .with(sq(5, 2), Cell::BlackKing);
        let result = choose_move(&board, Side::White, 2);
        assert!(result.best_move.is_some());
        assert_eq!(result.score, SCORE_INFINITY);
    }

    #[test]
    fn depth_zero_searches_one_ply() {
        let board = Board::initial();
        assert_eq!(
            choose_move(&board, Side::Black, 0),
            choose_move(&board, Side::Black, 1)
        );
    }

    #[test]
    fn search_is_deterministic() {
        let board = Board::initial();
        let first = search(&board, Side::White, &SearchConfig::default(), &Positional);
        let second = search(&board, Side::White, &SearchConfig::default(), &Positional);
        assert_eq!(first, second);
    }

    #[test]
    fn searcher_counts_nodes() {
        let mut searcher = Searcher::new(&Material);
        let score = searcher.alpha_beta(
            &Board::initial(),
            1,
            Side::Black,
            -SCORE_INFINITY,
            SCORE_INFINITY,
        );
        assert_eq!(score, 0);
        assert_eq!(searcher.nodes(), 6);
    }
}
