use crate::logic::board::Board;
use serde::{Deserialize, Serialize};
use shakmaty::Move;

pub mod config;
pub mod eval;
pub mod move_list;
pub mod ordering;
pub mod search;


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u64,
    pub leaves: u64, // Calls to the evaluator
    pub time_ms: u64,
}

/// Outcome of a root search.
///
/// `best_move` is `None` when the root has no legal moves; `score` then holds
/// the terminal score (mated or stalemated) and there is nothing to play.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Move>,
    pub stats: SearchStats,
}

pub trait Evaluator {
    /// Static score of the position from the side to move's point of view.
    fn evaluate(&self, board: &Board) -> i32;
}

pub trait Searcher {
    fn search(&mut self, board: &mut Board, depth: u8) -> SearchResult;
}
