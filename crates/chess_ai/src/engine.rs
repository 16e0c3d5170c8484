//! The chess AI player
//!
//! A [`ChessAi`] plays one color at a fixed search depth. It owns its
//! transposition table, so each instance searches independently and a
//! `&mut self` borrow is all the synchronization a search needs.
//!
//! ```rust
//! use chess_ai::{Board, ChessAi, Color};
//!
//! let mut board = Board::new();
//! let mut ai = ChessAi::new(2, Color::White).unwrap();
//!
//! let mv = ai.get_best_move(&mut board).unwrap();
//! assert_eq!(board, Board::new());
//! println!("white plays {mv}");
//! ```

use tracing::{debug, info};

use crate::board::SearchBoard;
use crate::config::{Difficulty, EngineConfig};
use crate::constants::SCORE_INF;
use crate::error::ChessEngineResult;
use crate::search::{alphabeta, search_root, SearchContext, SearchStats};
use crate::tt::TranspositionTable;
use crate::types::{Color, Move};

pub struct ChessAi {
    config: EngineConfig,
    tt: TranspositionTable,
    stats: SearchStats,
    last_score: Option<i32>,
}

impl ChessAi {
    /// Engine for `color` searching `depth` plies, rejecting depth 0
    pub fn new(depth: u8, color: Color) -> ChessEngineResult<Self> {
        Self::from_config(EngineConfig::new(depth, color))
    }

    pub fn from_difficulty(difficulty: Difficulty, color: Color) -> ChessEngineResult<Self> {
        Self::from_config(EngineConfig::from_difficulty(difficulty, color))
    }

    pub fn from_config(config: EngineConfig) -> ChessEngineResult<Self> {
        config.validate()?;
        debug!(
            depth = config.depth,
            color = %config.color,
            tt_capacity = config.tt_capacity,
            "creating chess AI"
        );
        Ok(ChessAi {
            tt: TranspositionTable::new(config.tt_capacity),
            config,
            stats: SearchStats::default(),
            last_score: None,
        })
    }

    /// Best move for the engine's color, `None` when it has no legal move
    ///
    /// The board is searched in place and handed back exactly as it came in.
    /// Among moves with equal scores the first in search order is returned.
    pub fn get_best_move<B: SearchBoard + ?Sized>(&mut self, board: &mut B) -> Option<Move> {
        self.tt.clear();
        let mut ctx = SearchContext::new(&mut self.tt, self.config.color);
        let best = search_root(board, &mut ctx, self.config.depth);
        self.stats = ctx.stats;
        self.last_score = best.map(|(_, score)| score);

        match best {
            Some((mv, score)) => info!(
                color = %self.config.color,
                depth = self.config.depth,
                %mv,
                score,
                nodes = self.stats.nodes,
                cutoffs = self.stats.cutoffs,
                tt_hits = self.stats.tt_hits,
                "best move chosen"
            ),
            None => info!(color = %self.config.color, "no legal moves"),
        }

        best.map(|(mv, _)| mv)
    }

    /// Minimax value of `board` at `depth`, from the engine's point of view
    ///
    /// `maximizing` says whether the engine's color is the one to move.
    /// A position where the side to move has no legal move is worth 0.
    pub fn search_value<B: SearchBoard + ?Sized>(
        &mut self,
        board: &mut B,
        depth: u8,
        maximizing: bool,
    ) -> i32 {
        self.tt.clear();
        let mut ctx = SearchContext::new(&mut self.tt, self.config.color);
        let value = alphabeta(board, &mut ctx, depth, -SCORE_INF, SCORE_INF, maximizing);
        self.stats = ctx.stats;
        value
    }

    /// Counters from the most recent search
    pub fn last_search(&self) -> SearchStats {
        self.stats
    }

    /// Score of the move returned by the most recent `get_best_move`
    pub fn last_score(&self) -> Option<i32> {
        self.last_score
    }

    pub fn color(&self) -> Color {
        self.config.color
    }

    pub fn depth(&self) -> u8 {
        self.config.depth
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::constants::NO_MOVE_SCORE;
    use crate::error::ChessEngineError;

    #[test]
    fn test_new_rejects_zero_depth() {
        assert_eq!(
            ChessAi::new(0, Color::White).err(),
            Some(ChessEngineError::InvalidDepth { depth: 0 })
        );
    }

    #[test]
    fn test_from_difficulty() {
        let ai = ChessAi::from_difficulty(Difficulty::Easy, Color::Black).unwrap();
        assert_eq!(ai.depth(), 2);
        assert_eq!(ai.color(), Color::Black);
    }

    #[test]
    fn test_best_move_belongs_to_engine() {
        let mut board = Board::new();
        let mut ai = ChessAi::new(2, Color::Black).unwrap();

        let mv = ai.get_best_move(&mut board).unwrap();

        let piece = board.get_piece(mv.from).unwrap();
        assert_eq!(piece.color, Color::Black);
        assert!(board.is_legal_move(mv.from, mv.to, Color::Black));
        assert_eq!(ai.last_search().root_moves, 20);
        assert!(ai.last_score().is_some());
    }

    #[test]
    fn test_no_moves_returns_none() {
        let mut board = Board::from_placement("7k/6Q1/5K2/8/8/8/8/8").unwrap();
        let mut ai = ChessAi::new(3, Color::Black).unwrap();

        assert_eq!(ai.get_best_move(&mut board), None);
        assert_eq!(ai.last_score(), None);
        assert_eq!(ai.search_value(&mut board, 3, true), NO_MOVE_SCORE);
    }

    #[test]
    fn test_repeated_calls_agree() {
        let mut board = Board::from_placement("r3k2r/ppp2ppp/2n5/3qp3/4P3/2N5/PPP2PPP/R2QK2R").unwrap();
        let mut ai = ChessAi::new(2, Color::White).unwrap();

        let first = ai.get_best_move(&mut board);
        let first_stats = ai.last_search();
        let second = ai.get_best_move(&mut board);

        assert_eq!(first, second);
        assert_eq!(first_stats, ai.last_search());
    }
}
