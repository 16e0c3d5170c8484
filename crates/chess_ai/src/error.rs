//! Error types for the chess AI
//!
//! Covers engine construction, configuration loading and the text formats
//! used to describe squares and board layouts.

use thiserror::Error;

use crate::types::Square;

/// Errors that can occur in the chess AI
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Search depth must be at least one ply
    #[error("Invalid search depth: {depth} (must be at least 1)")]
    InvalidDepth { depth: u8 },

    /// Square coordinates out of bounds
    #[error("Invalid square: ({row}, {col}) (must be 0-7)")]
    InvalidSquare { row: u8, col: u8 },

    /// Square name that is not file a-h followed by rank 1-8
    #[error("Invalid square name: {name:?}")]
    InvalidSquareName { name: String },

    /// Board placement text could not be parsed
    #[error("Invalid board placement {placement:?}: {reason}")]
    InvalidPlacement { placement: String, reason: String },

    /// Engine configuration rejected
    #[error("Invalid engine configuration: {message}")]
    InvalidConfig { message: String },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: Square },

    /// Move rejected by the legality check
    #[error("Illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },
}

/// Result type alias for chess AI operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
