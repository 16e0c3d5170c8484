//! Command-line interface
//!
//! Settings resolve in order: defaults, then the `--config` JSON file, then
//! `--difficulty`, then per-command flags.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use chess_ai::constants::START_PLACEMENT;
use chess_ai::{
    apply_move, game_status, Board, ChessAi, Color, Difficulty, EngineConfig, GameStatus, Move,
    SearchStats,
};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use crate::render::render_board;

#[derive(Parser)]
#[command(version, about = "Fixed-depth alpha-beta chess AI")]
pub struct Cli {
    /// JSON file with engine settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// easy, medium or hard (2, 3 or 4 plies)
    #[arg(long, global = true)]
    pub difficulty: Option<Difficulty>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the engine's move for a position
    BestMove {
        /// Board placement, rank 8 first
        #[arg(long, default_value = START_PLACEMENT)]
        position: String,

        /// Side the engine plays
        #[arg(long)]
        color: Option<Color>,

        /// Search depth in plies
        #[arg(long)]
        depth: Option<u8>,
    },

    /// Let the engine play both sides from the starting position
    SelfPlay {
        /// Search depth in plies
        #[arg(long)]
        depth: Option<u8>,

        /// Stop after this many half-moves
        #[arg(long, default_value_t = 100)]
        max_plies: usize,
    },

    /// Play against the engine, entering moves such as `e2e4` on stdin
    Play {
        /// Side the engine plays, the human takes the other
        #[arg(long)]
        color: Option<Color>,

        /// Search depth in plies
        #[arg(long)]
        depth: Option<u8>,
    },
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let base = self.base_config()?;

        match self.command {
            Command::BestMove {
                position,
                color,
                depth,
            } => {
                let config = EngineConfig {
                    depth: depth.unwrap_or(base.depth),
                    color: color.unwrap_or(base.color),
                    ..base
                };
                best_move(&position, config)
            }
            Command::SelfPlay { depth, max_plies } => {
                let config = EngineConfig {
                    depth: depth.unwrap_or(base.depth),
                    ..base
                };
                self_play(config, max_plies)
            }
            Command::Play { color, depth } => {
                let config = EngineConfig {
                    depth: depth.unwrap_or(base.depth),
                    color: color.unwrap_or(base.color),
                    ..base
                };
                play(config, io::stdin().lock(), io::stdout().lock())
            }
        }
    }

    fn base_config(&self) -> anyhow::Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => EngineConfig::default(),
        };

        if let Some(difficulty) = self.difficulty {
            info!("difficulty: {difficulty}");
            config.depth = difficulty.depth();
        }
        Ok(config)
    }
}

fn best_move(position: &str, config: EngineConfig) -> anyhow::Result<()> {
    let mut board = Board::from_placement(position).context("parsing --position")?;
    let mut ai = ChessAi::from_config(config)?;

    match ai.get_best_move(&mut board) {
        Some(mv) => {
            println!("{mv}");
            print_stats(ai.last_search(), ai.last_score());
        }
        None => println!("no legal moves for {}", config.color),
    }
    Ok(())
}

fn self_play(config: EngineConfig, max_plies: usize) -> anyhow::Result<()> {
    let mut white = ChessAi::from_config(EngineConfig {
        color: Color::White,
        ..config
    })?;
    let mut black = ChessAi::from_config(EngineConfig {
        color: Color::Black,
        ..config
    })?;

    let mut board = Board::new();
    let mut to_move = Color::White;
    println!("{}", render_board(&board));

    for ply in 1..=max_plies {
        let status = game_status(&board, to_move);
        if status.is_over() {
            announce(status, to_move);
            return Ok(());
        }

        let ai = match to_move {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let Some(mv) = ai.get_best_move(&mut board) else {
            break;
        };
        debug!(ply, %mv, stats = ?ai.last_search(), "self-play move");
        apply_move(&mut board, mv, to_move).with_context(|| format!("ply {ply}: {mv}"))?;

        println!("{ply}. {to_move} plays {mv}");
        println!("{}", render_board(&board));
        to_move = to_move.opponent();
    }

    let status = game_status(&board, to_move);
    if status.is_over() {
        announce(status, to_move);
    } else {
        println!("stopped after {max_plies} plies");
    }
    Ok(())
}

fn announce(status: GameStatus, to_move: Color) {
    if let Some(text) = outcome(status, to_move) {
        println!("{text}");
    }
}

/// Result line for a finished game, `None` while it is still going
fn outcome(status: GameStatus, to_move: Color) -> Option<String> {
    match status {
        GameStatus::Checkmate => Some(format!("checkmate, {} wins", to_move.opponent())),
        GameStatus::Stalemate => Some("stalemate, draw".to_string()),
        GameStatus::Playing => None,
    }
}

/// Human against engine from the starting position
///
/// Unparseable or illegal input is reported and asked for again. End of
/// input or `quit` abandons the game.
fn play<R: BufRead, W: Write>(config: EngineConfig, input: R, mut out: W) -> anyhow::Result<()> {
    let mut ai = ChessAi::from_config(config)?;
    let human = config.color.opponent();
    let mut board = Board::new();
    let mut to_move = Color::White;
    let mut lines = input.lines();

    writeln!(out, "{}", render_board(&board))?;
    loop {
        let status = game_status(&board, to_move);
        if let Some(text) = outcome(status, to_move) {
            writeln!(out, "{text}")?;
            return Ok(());
        }

        if to_move == human {
            write!(out, "{human} to move: ")?;
            out.flush()?;
            let Some(line) = lines.next().transpose()? else {
                writeln!(out, "game abandoned")?;
                return Ok(());
            };
            let text = line.trim();
            if text.eq_ignore_ascii_case("quit") {
                writeln!(out, "game abandoned")?;
                return Ok(());
            }
            let mv = match text.parse::<Move>() {
                Ok(mv) => mv,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    continue;
                }
            };
            if let Err(err) = apply_move(&mut board, mv, human) {
                writeln!(out, "{err}")?;
                continue;
            }
        } else {
            let Some(mv) = ai.get_best_move(&mut board) else {
                break;
            };
            apply_move(&mut board, mv, to_move).with_context(|| format!("engine move {mv}"))?;
            writeln!(out, "{to_move} plays {mv}")?;
        }

        writeln!(out, "{}", render_board(&board))?;
        to_move = to_move.opponent();
    }
    Ok(())
}

fn print_stats(stats: SearchStats, score: Option<i32>) {
    println!(
        "score {} | nodes {} | cutoffs {} | tt hits {} | tt stores {} | root moves {}",
        score.unwrap_or_default(),
        stats.nodes,
        stats.cutoffs,
        stats.tt_hits,
        stats.tt_stores,
        stats.root_moves
    );
}
