//! # Chess AI - Fixed-Depth Alpha-Beta Search
//!
//! A small chess engine that picks a move for one side by searching a fixed
//! number of plies with minimax and alpha-beta pruning.
//!
//! ## Architecture
//!
//! - [`board`] - the [`SearchBoard`] contract the search runs against, and
//!   the [`Board`] that implements it
//! - `move_gen` - pseudo-legal generators, attack detection, legality
//! - [`evaluation`] - material count from one side's point of view
//! - `search` - root driver, recursive alpha-beta, move ordering, undo records
//! - [`tt`] - bounded transposition table keyed by Zobrist hashes ([`hash`])
//! - [`engine`] - [`ChessAi`], the public entry point
//! - [`game`] - checked move application and game-over detection for drivers
//!
//! ## Usage
//!
//! ```rust
//! use chess_ai::{Board, ChessAi, Color};
//!
//! let mut board = Board::from_placement("7k/8/8/8/8/8/8/K2P3r").unwrap();
//! let mut ai = ChessAi::new(1, Color::Black).unwrap();
//! assert_eq!(ai.get_best_move(&mut board).unwrap().to_string(), "h1d1");
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod hash;
mod move_gen;
mod search;
pub mod tt;
pub mod types;

pub use board::{Board, SearchBoard};
pub use config::{Difficulty, EngineConfig};
pub use engine::ChessAi;
pub use error::{ChessEngineError, ChessEngineResult};
pub use evaluation::evaluate;
pub use game::{apply_move, game_status, GameStatus};
pub use move_gen::{has_any_legal_move, legal_moves};
pub use search::{order_moves, SearchStats};
pub use types::{Color, Move, Piece, PieceKind, Square};
