//! Fixed-depth alpha-beta search
//!
//! - `root` - tries every root move and keeps the first strictly best
//! - `alphabeta` - recursive minimax with alpha-beta pruning and table lookups
//! - `ordering` - most valuable victim first
//! - `make_unmake` - undo records used at every depth

mod alphabeta;
mod make_unmake;
mod ordering;
mod root;

pub(crate) use alphabeta::{alphabeta, SearchContext};
pub use ordering::order_moves;
pub(crate) use root::search_root;

/// Counters for one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Beta and alpha cutoffs
    pub cutoffs: u64,
    /// Nodes answered from the transposition table
    pub tt_hits: u64,
    /// Transposition table writes
    pub tt_stores: u64,
    /// Legal moves at the root
    pub root_moves: usize,
}
