//! Players that pick moves for one side of a game.

use crate::config::CheckersConfig;
use crate::render;
use checkers_engine::{search, Evaluator, Game, Move, SearchConfig};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

/// Something that chooses moves.
pub trait Agent {
    /// Short name used in output.
    fn name(&self) -> &str;

    /// Picks a move for the side to move, or `None` to resign.
    ///
    /// Only called while the game is running, so at least one legal move
    /// exists.
    fn select_move(&mut self, game: &Game) -> Option<Move>;

    /// Nodes searched for the most recent move, if the agent searches.
    fn last_nodes(&self) -> Option<u64> {
        None
    }
}

/// Agent kinds selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AgentKind {
    Minimax,
    Greedy,
    Random,
}

impl AgentKind {
    /// Builds a computer agent of this kind.
    pub fn build(self, config: &CheckersConfig) -> Box<dyn Agent> {
        match self {
            AgentKind::Minimax => Box::new(MinimaxAgent::from_config(config)),
            AgentKind::Greedy => Box::new(GreedyAgent),
            AgentKind::Random => Box::new(RandomAgent::new()),
        }
    }
}

/// Searches with alpha-beta (or plain) minimax.
pub struct MinimaxAgent {
    config: SearchConfig,
    evaluator: &'static dyn Evaluator,
    last_nodes: u64,
    total_nodes: u64,
}

impl MinimaxAgent {
    pub fn new(config: SearchConfig, evaluator: &'static dyn Evaluator) -> Self {
        MinimaxAgent {
            config,
            evaluator,
            last_nodes: 0,
            total_nodes: 0,
        }
    }

    pub fn from_config(config: &CheckersConfig) -> Self {
        Self::new(config.search_config(), config.evaluator.evaluator())
    }

    /// Nodes searched over every move so far.
    pub fn total_nodes(&self) -> u64 {
        self.total_nodes
    }
}

impl Agent for MinimaxAgent {
    fn name(&self) -> &str {
        "minimax"
    }

    fn select_move(&mut self, game: &Game) -> Option<Move> {
        let result = search(
            game.board(),
            game.side_to_move(),
            &self.config,
            self.evaluator,
        );
        self.last_nodes = result.nodes;
        self.total_nodes += result.nodes;
        result.best_move
    }

    fn last_nodes(&self) -> Option<u64> {
        Some(self.last_nodes)
    }
}

/// Plays the move that captures the most pieces, the first one on ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAgent;

impl Agent for GreedyAgent {
    fn name(&self) -> &str {
        "greedy"
    }

    fn select_move(&mut self, game: &Game) -> Option<Move> {
        // max_by_key keeps the last maximum, so scan from the back.
        game.legal_moves()
            .into_iter()
            .rev()
            .max_by_key(|mv| mv.captured().len())
    }
}

/// Plays a uniformly random legal move.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates an agent whose choices are reproducible.
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn select_move(&mut self, game: &Game) -> Option<Move> {
        game.legal_moves().as_slice().choose(&mut self.rng).cloned()
    }
}

/// Reads move choices from a person at the terminal.
///
/// The legal moves are listed with indices; the player answers with an index,
/// or `q` to resign. Anything else is rejected and the prompt repeats.
///
/// Two players at one terminal must read through the same buffer, so the
/// input sits behind a shared handle; see [`HumanAgent::shared`].
pub struct HumanAgent<R, W> {
    input: Rc<RefCell<R>>,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::shared(Rc::new(RefCell::new(input)), output)
    }

    /// Creates an agent reading from an input other agents also read from.
    pub fn shared(input: Rc<RefCell<R>>, output: W) -> Self {
        HumanAgent { input, output }
    }

    fn prompt(&mut self, game: &Game) -> std::io::Result<Option<Move>> {
        let moves = game.legal_moves();
        write!(self.output, "{}", render::move_list(&moves))?;

        loop {
            write!(self.output, "Select move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.borrow_mut().read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let answer = line.trim();
            if answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }

            match answer.parse::<usize>() {
                Ok(idx) if idx < moves.len() => return Ok(Some(moves[idx].clone())),
                _ => writeln!(
                    self.output,
                    "Enter a number from 0 to {}, or q to resign.",
                    moves.len() - 1
                )?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn name(&self) -> &str {
        "human"
    }

    fn select_move(&mut self, game: &Game) -> Option<Move> {
        match self.prompt(game) {
            Ok(mv) => mv,
            Err(e) => {
                tracing::error!("failed to read move: {}", e);
                None
            }
        }
    }
}
