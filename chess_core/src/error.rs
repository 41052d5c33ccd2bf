//! Error types for the rules boundary
//!
//! The search itself never fails. Everything that can go wrong happens
//! when a position or move enters the crate from the outside.

use crate::logic::game::GameStatus;
use shakmaty::fen::ParseFenError;
use shakmaty::{Chess, PositionError};
use thiserror::Error;

/// Errors raised while setting up or advancing a game
#[derive(Error, Debug)]
pub enum GameError {
    /// The FEN string could not be parsed
    #[error("invalid FEN: {0}")]
    InvalidFen(#[from] ParseFenError),

    /// The FEN parsed but describes an impossible position
    #[error("illegal position: {0}")]
    IllegalPosition(#[from] PositionError<Chess>),

    /// The move is not legal in the current position
    #[error("illegal move: {uci}")]
    IllegalMove { uci: String },

    /// No further moves can be made
    #[error("game is already over ({status:?})")]
    GameOver { status: GameStatus },

    /// Nothing left to take back
    #[error("no move to undo")]
    NothingToUndo,
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
