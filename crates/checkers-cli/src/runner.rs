//! Game and match execution between agents.
//!
//! [`GameRunner`] plays one game between two [`Agent`]s, optionally narrating
//! it to a writer. [`run_match`] plays a series of games and aggregates the
//! outcomes into a [`MatchSummary`].

use crate::agent::{Agent, AgentKind};
use crate::config::CheckersConfig;
use crate::render;
use checkers_engine::{Game, GameError, GameResult, Side};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur while running a game.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// Writing the game narration failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
    /// An agent returned a move the game rejected.
    #[error("game error: {0}")]
    Game(#[from] GameError),
}

/// The outcome of one finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub result: GameResult,
    /// Moves in coordinate notation.
    pub moves: Vec<String>,
    /// Search nodes spent by both sides.
    pub nodes: u64,
}

impl GameRecord {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// Plays a game between two agents.
pub struct GameRunner<'a> {
    black: &'a mut dyn Agent,
    white: &'a mut dyn Agent,
    show_nodes: bool,
}

impl<'a> GameRunner<'a> {
    pub fn new(black: &'a mut dyn Agent, white: &'a mut dyn Agent) -> Self {
        Self {
            black,
            white,
            show_nodes: true,
        }
    }

    /// Whether narration includes node counts for searching agents.
    pub fn show_nodes(mut self, show: bool) -> Self {
        self.show_nodes = show;
        self
    }

    /// Plays a game from `game` to its end, narrating to `out`.
    ///
    /// An agent that returns no move resigns.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Io`] if narration cannot be written, or
    /// [`RunnerError::Game`] if an agent plays an illegal move.
    pub fn play(
        &mut self,
        mut game: Game,
        out: &mut dyn Write,
    ) -> Result<GameRecord, RunnerError> {
        let mut nodes = 0;

        let result = loop {
            if let Some(result) = game.result() {
                break result;
            }
            let side = game.side_to_move();
            writeln!(out, "\n{}", render::position(game.board(), side))?;

            let agent: &mut dyn Agent = match side {
                Side::Black => &mut *self.black,
                Side::White => &mut *self.white,
            };

            let Some(mv) = agent.select_move(&game) else {
                writeln!(out, "{} ({}) resigns", side, agent.name())?;
                game.resign()?;
                continue;
            };

            let searched = agent.last_nodes();
            nodes += searched.unwrap_or(0);
            let shown = searched.filter(|_| self.show_nodes);
            writeln!(out, "{}", render::played_move(side, agent.name(), &mv, shown))?;

            game.make_move(&mv)?;
        };

        writeln!(out, "\n{}{}", game.board(), render::game_over(result))?;

        Ok(GameRecord {
            result,
            moves: game
                .move_history()
                .iter()
                .map(|m| m.notation.clone())
                .collect(),
            nodes,
        })
    }
}

/// Aggregate results of a match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub black: String,
    pub white: String,
    pub games: u32,
    pub black_wins: u32,
    pub white_wins: u32,
    pub draws: u32,
    pub average_plies: f64,
    pub average_nodes: f64,
}

impl MatchSummary {
    fn new(black: &str, white: &str) -> Self {
        MatchSummary {
            black: black.to_string(),
            white: white.to_string(),
            games: 0,
            black_wins: 0,
            white_wins: 0,
            draws: 0,
            average_plies: 0.0,
            average_nodes: 0.0,
        }
    }

    fn record(&mut self, game: &GameRecord) {
        let n = f64::from(self.games);
        self.average_plies = (self.average_plies * n + game.plies() as f64) / (n + 1.0);
        self.average_nodes = (self.average_nodes * n + game.nodes as f64) / (n + 1.0);
        self.games += 1;
        match game.result {
            GameResult::BlackWins => self.black_wins += 1,
            GameResult::WhiteWins => self.white_wins += 1,
            GameResult::Draw(_) => self.draws += 1,
        }
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (Black) vs {} (White), {} games", self.black, self.white, self.games)?;
        writeln!(f, "Black wins:    {}", self.black_wins)?;
        writeln!(f, "White wins:    {}", self.white_wins)?;
        writeln!(f, "Draws:         {}", self.draws)?;
        writeln!(f, "Average plies: {:.1}", self.average_plies)?;
        write!(f, "Average nodes: {:.1}", self.average_nodes)
    }
}

/// Plays `games` games between fresh agents of the given kinds.
pub fn run_match(
    black: AgentKind,
    white: AgentKind,
    games: u32,
    config: &CheckersConfig,
) -> Result<MatchSummary, RunnerError> {
    let mut black_agent = black.build(config);
    let mut white_agent = white.build(config);
    let mut summary = MatchSummary::new(black_agent.name(), white_agent.name());

    for i in 1..=games {
        let mut runner = GameRunner::new(black_agent.as_mut(), white_agent.as_mut());
        let record = runner.play(Game::new(), &mut std::io::sink())?;
        tracing::info!(
            game = i,
            result = %record.result,
            plies = record.plies(),
            nodes = record.nodes,
            "game finished"
        );
        summary.record(&record);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{HumanAgent, MinimaxAgent, RandomAgent};
    use checkers_engine::{Board, Cell, Material, SearchConfig, Square};
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn minimax_finishes_a_won_position() {
        let board = Board::empty()
            .with(sq(4, 1), Cell::BlackMan)
            .with(sq(3, 2), Cell::WhiteMan)
            .with(sq(1, 4), Cell::WhiteMan);
        let mut black = MinimaxAgent::new(SearchConfig::default(), &Material);
        let mut white = RandomAgent::seeded(1);
        let mut out = Vec::new();

        let record = GameRunner::new(&mut black, &mut white)
            .play(Game::from_board(board, Side::Black), &mut out)
            .unwrap();

        assert_eq!(record.result, GameResult::BlackWins);
        assert_eq!(record.moves, vec!["(4,1)x(2,3)x(0,5)".to_string()]);
        assert_eq!(record.nodes, 1);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Black (minimax) plays (4,1)x(2,3)x(0,5)  [nodes: 1]"));
        assert!(text.ends_with("Game over: Black wins\n"));
    }

    #[test]
    fn nodes_can_be_hidden() {
        let board = Board::empty()
            .with(sq(4, 1), Cell::BlackMan)
            .with(sq(3, 2), Cell::WhiteMan);
        let mut black = MinimaxAgent::new(SearchConfig::default(), &Material);
        let mut white = RandomAgent::seeded(1);
        let mut out = Vec::new();

        GameRunner::new(&mut black, &mut white)
            .show_nodes(false)
            .play(Game::from_board(board, Side::Black), &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("nodes"));
    }

    #[test]
    fn human_resignation_ends_the_game() {
        let mut black = HumanAgent::new(Cursor::new("q\n"), Vec::new());
        let mut white = RandomAgent::seeded(3);
        let record = GameRunner::new(&mut black, &mut white)
            .play(Game::new(), &mut std::io::sink())
            .unwrap();
        assert_eq!(record.result, GameResult::WhiteWins);
        assert_eq!(record.plies(), 0);
    }

    #[test]
    fn two_humans_share_one_input() {
        let input = Rc::new(RefCell::new(Cursor::new("0\n0\nq\n")));
        let mut black = HumanAgent::shared(Rc::clone(&input), Vec::new());
        let mut white = HumanAgent::shared(Rc::clone(&input), Vec::new());
        let mut out = Vec::new();

        let record = GameRunner::new(&mut black, &mut white)
            .play(Game::new(), &mut out)
            .unwrap();

        assert_eq!(record.plies(), 2);
        assert_eq!(record.moves[0], "(4,1)->(3,0)");
        assert_eq!(record.result, GameResult::WhiteWins);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("White (human) plays"));
        assert!(text.contains("Black (human) resigns"));
    }

    #[test]
    fn random_games_terminate() {
        for seed in 0..5 {
            let mut black = RandomAgent::seeded(seed);
            let mut white = RandomAgent::seeded(seed + 100);
            let record = GameRunner::new(&mut black, &mut white)
                .play(Game::new(), &mut std::io::sink())
                .unwrap();
            assert!(record.plies() > 0);
            assert_eq!(record.nodes, 0);
        }
    }

    #[test]
    fn match_summary_counts_every_game() {
        let config = CheckersConfig {
            depth: 2,
            ..CheckersConfig::default()
        };
        let summary = run_match(AgentKind::Minimax, AgentKind::Random, 3, &config).unwrap();
        assert_eq!(summary.games, 3);
        assert_eq!(summary.black_wins + summary.white_wins + summary.draws, 3);
        assert!(summary.average_plies > 0.0);
        assert!(summary.average_nodes > 0.0);
        assert_eq!(summary.black, "minimax");
        assert_eq!(summary.white, "random");
    }

    #[test]
    fn summary_averages() {
        let mut summary = MatchSummary::new("a", "b");
        summary.record(&GameRecord {
            result: GameResult::BlackWins,
            moves: vec!["x".to_string(); 10],
            nodes: 100,
        });
        summary.record(&GameRecord {
            result: GameResult::WhiteWins,
            moves: vec!["x".to_string(); 20],
            nodes: 300,
        });
        assert_eq!(summary.games, 2);
        assert_eq!(summary.black_wins, 1);
        assert_eq!(summary.white_wins, 1);
        assert_eq!(summary.average_plies, 15.0);
        assert_eq!(summary.average_nodes, 200.0);
    }

    #[test]
    fn summary_serializes_to_json() {
        let summary = MatchSummary::new("minimax", "random");
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["black"], "minimax");
        assert_eq!(json["black_wins"], 0);
        assert_eq!(json["average_plies"], 0.0);
    }
}
