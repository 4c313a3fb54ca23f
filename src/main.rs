//! Gomoku: GUI, terminal play and self-play against the minimax AI

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gomoku::arena::run_match;
use gomoku::ui::{GameMode, GomokuApp};
use gomoku::{AIEngine, AgentKind, EngineConfig, Session, Snapshot, Stone, BOARD_SIZE};

#[derive(Args, Debug, Clone)]
struct EngineParams {
    /// AI variant
    #[arg(long, value_enum, global = true)]
    agent: Option<AgentKind>,

    /// Search depth in plies
    #[arg(short, long, global = true)]
    depth: Option<u8>,

    /// Candidate cells must lie within this many steps of a stone
    #[arg(long, global = true)]
    radius: Option<u8>,

    /// Seed for the random agent
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON engine configuration; command-line values override it
    #[arg(long, global = true, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,
}

impl EngineParams {
    fn resolve(&self) -> gomoku::GomokuResult<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_json_file(path)?,
            None => EngineConfig::default(),
        };
        if let Some(agent) = self.agent {
            config = config.with_agent(agent);
        }
        if let Some(depth) = self.depth {
            config = config.with_depth(depth);
        }
        if let Some(radius) = self.radius {
            config = config.with_radius(radius);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Gomoku on a 15x15 board against a minimax AI")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    #[command(flatten)]
    engine_params: EngineParams,

    /// Debug-level logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Native window (default)
    Gui {
        /// Hotseat game between two people, with AI hints
        #[arg(long)]
        pvp: bool,

        /// Play Black and move first
        #[arg(long)]
        human_first: bool,
    },
    /// Play in the terminal; enter moves as "row col"
    Play {
        /// Play Black and move first
        #[arg(long)]
        human_first: bool,

        /// Print the game state as JSON instead of a diagram
        #[arg(long)]
        json: bool,
    },
    /// Let the configured AI play a series of games against another agent
    Selfplay {
        #[arg(short, long, default_value_t = 10)]
        games: usize,

        /// Opponent variant
        #[arg(long, value_enum, default_value_t = AgentKind::Random)]
        opponent: AgentKind,

        /// Opponent search depth
        #[arg(long, default_value_t = 1)]
        opponent_depth: u8,
    },
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("gomoku=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gomoku=info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Cli) -> Result<(), Box<dyn Error>> {
    let config = args.engine_params.resolve()?;
    info!(?config, "engine configured");

    match args.command {
        None => run_gui(config, false, false),
        Some(SubCommands::Gui { pvp, human_first }) => run_gui(config, pvp, human_first),
        Some(SubCommands::Play { human_first, json }) => {
            play_in_terminal(config, human_first, json)
        }
        Some(SubCommands::Selfplay {
            games,
            opponent,
            opponent_depth,
        }) => {
            let opponent = EngineConfig::default()
                .with_agent(opponent)
                .with_depth(opponent_depth)
                .with_radius(config.neighbor_radius);
            let opponent = match config.seed {
                Some(seed) => opponent.with_seed(seed.wrapping_add(1_000)),
                None => opponent,
            };
            let summary = run_match(&config, &opponent, games)?;
            println!(
                "{} games: {:?} {} wins, {:?} {} wins, {} draws",
                summary.games(),
                config.agent,
                summary.a_wins,
                opponent.agent,
                summary.b_wins,
                summary.draws
            );
            Ok(())
        }
    }
}

fn run_gui(config: EngineConfig, pvp: bool, human_first: bool) -> Result<(), Box<dyn Error>> {
    let mode = if pvp {
        GameMode::PvP { show_suggestions: false }
    } else if human_first {
        GameMode::PvE { human_color: Stone::Black }
    } else {
        GameMode::default()
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, mode, config)))),
    )?;
    Ok(())
}

fn play_in_terminal(
    config: EngineConfig,
    human_first: bool,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let ai_side = if human_first { Stone::White } else { Stone::Black };
    let mut session = Session::with_engine(AIEngine::new(config)?, ai_side);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!(
        "You play {}. Enter moves as \"row col\" (0-{}), \"new\" or \"quit\".",
        session.human_side(),
        BOARD_SIZE - 1
    );

    let mut announced = None;
    loop {
        if session.is_ai_turn() {
            session.play_ai_turn();
        }
        if let Some(result) = session.last_ai_move() {
            if result.best_move != announced {
                announced = result.best_move;
                if let Some(pos) = announced {
                    println!(
                        "AI plays {pos} (score {}, {} nodes, {}ms)",
                        result.score, result.nodes, result.time_ms
                    );
                }
            }
        }

        let snapshot = session.snapshot();
        if json {
            println!("{}", snapshot.to_json()?);
        } else {
            print!("{}", render(&snapshot));
        }

        if let Some(winner) = session.state().winner() {
            let who = if winner == ai_side { "AI" } else { "You" };
            println!("{who} ({winner}) won.");
            break;
        }
        if session.state().board().is_full() {
            println!("Board full: draw.");
            break;
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        match line.trim() {
            "q" | "quit" | "exit" => break,
            "new" | "reset" => {
                session.reset();
                announced = None;
                continue;
            }
            input => match parse_move(input) {
                Some((row, col)) => {
                    let after = session.play_human_turn(row, col);
                    if after == snapshot {
                        println!("Move ({row}, {col}) rejected.");
                    }
                }
                None => println!("Could not read a move from {input:?}."),
            },
        }
    }
    Ok(())
}

/// Accepts "7 7", "7,7" or "(7, 7)"
fn parse_move(input: &str) -> Option<(i32, i32)> {
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == ',' || c == '(' || c == ')')
        .filter(|part| !part.is_empty())
        .map(str::parse::<i32>);
    let row = parts.next()?.ok()?;
    let col = parts.next()?.ok()?;
    parts.next().is_none().then_some((row, col))
}

fn render(snapshot: &Snapshot) -> String {
    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!("{col:>3}"));
    }
    out.push('\n');
    for (row, cells) in snapshot.board.iter().enumerate() {
        out.push_str(&format!("{row:>3}"));
        for &cell in cells {
            let glyph = match cell {
                1 => 'X',
                2 => 'O',
                _ => '.',
            };
            out.push_str(&format!("{glyph:>3}"));
        }
        out.push('\n');
    }
    out
}
