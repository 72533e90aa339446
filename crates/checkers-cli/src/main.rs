use anyhow::Context;
use checkers_cli::agent::{Agent, AgentKind, HumanAgent, MinimaxAgent};
use checkers_cli::config::{CheckersConfig, EvaluatorKind};
use checkers_cli::runner::{run_match, GameRunner};
use checkers_engine::{Game, Side};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::cell::RefCell;
use std::io::{self, StdinLock};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "checkers")]
#[command(about = "6x6 checkers with a minimax opponent")]
struct Cli {
    /// Configuration file
    #[arg(long, default_value_os_t = CheckersConfig::config_path())]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play {
        /// Who plays whom
        #[arg(short, long, value_enum, default_value_t = Mode::HumanVsAi)]
        mode: Mode,
        /// Side for the human player (defaults from the mode)
        #[arg(short, long, value_enum)]
        color: Option<Color>,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Run a series of games between two computer agents
    Match {
        /// Agent playing Black
        #[arg(long, value_enum, default_value_t = AgentKind::Minimax)]
        black: AgentKind,
        /// Agent playing White
        #[arg(long, value_enum, default_value_t = AgentKind::Random)]
        white: AgentKind,
        /// Number of games to play
        #[arg(short, long, default_value = "10")]
        games: u32,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        search: SearchArgs,
    },
}

/// Search overrides for `checkers.toml`.
#[derive(Args)]
struct SearchArgs {
    /// Search depth in plies
    #[arg(short, long)]
    depth: Option<u32>,
    /// Search without alpha-beta pruning
    #[arg(long)]
    no_alpha_beta: bool,
    /// Static evaluator
    #[arg(long, value_enum)]
    evaluator: Option<EvaluatorKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    HumanVsAi,
    AiVsHuman,
    AiVsAi,
    HumanVsHuman,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Color {
    Black,
    White,
}

impl From<Color> for Side {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Side::Black,
            Color::White => Side::White,
        }
    }
}

/// Which sides a person controls.
fn human_sides(mode: Mode, color: Option<Color>) -> (bool, bool) {
    let human = match (mode, color) {
        (Mode::AiVsAi, _) => return (false, false),
        (Mode::HumanVsHuman, _) => return (true, true),
        (_, Some(color)) => Side::from(color),
        (Mode::HumanVsAi, None) => Side::Black,
        (Mode::AiVsHuman, None) => Side::White,
    };
    (human == Side::Black, human == Side::White)
}

fn load_config(path: &Path, search: &SearchArgs) -> anyhow::Result<CheckersConfig> {
    let mut config = CheckersConfig::load_from(path)
        .with_context(|| format!("loading {}", path.display()))?;
    config.apply_overrides(search.depth, search.no_alpha_beta, search.evaluator)?;
    Ok(config)
}

fn player(
    human: bool,
    stdin: &Rc<RefCell<StdinLock<'static>>>,
    config: &CheckersConfig,
) -> Box<dyn Agent> {
    if human {
        Box::new(HumanAgent::shared(Rc::clone(stdin), io::stdout()))
    } else {
        Box::new(MinimaxAgent::from_config(config))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            mode,
            color,
            search,
        } => {
            let config = load_config(&cli.config, &search)?;
            let (human_black, human_white) = human_sides(mode, color);
            tracing::info!(
                ?mode,
                depth = config.depth,
                alpha_beta = config.alpha_beta,
                evaluator = ?config.evaluator,
                "starting game"
            );

            let stdin = Rc::new(RefCell::new(io::stdin().lock()));
            let mut black = player(human_black, &stdin, &config);
            let mut white = player(human_white, &stdin, &config);
            let record = GameRunner::new(black.as_mut(), white.as_mut())
                .show_nodes(config.show_nodes)
                .play(Game::new(), &mut io::stdout())?;
            tracing::info!(result = %record.result, plies = record.plies(), "game finished");
        }
        Commands::Match {
            black,
            white,
            games,
            json,
            search,
        } => {
            let config = load_config(&cli.config, &search)?;
            tracing::info!(?black, ?white, games, depth = config.depth, "running match");

            let summary = run_match(black, white, games, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", summary);
            }
        }
    }

    Ok(())
}
