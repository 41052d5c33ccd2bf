//! Move ordering for alpha-beta pruning
//!
//! Checks first, then captures by victim value, then quiet moves by how
//! much they improve the piece's square. Castling gets a fixed priority.

use crate::engine::config::EngineConfig;
use crate::engine::move_list::MoveList;
use crate::logic::board::Board;
use crate::logic::eval_constants::get_pst_value;
use shakmaty::{Move, Role};
use std::sync::Arc;

pub struct MoveOrderer {
    config: Arc<EngineConfig>,
}

impl MoveOrderer {
    pub const fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }

    /// All legal moves, best first.
    pub fn order(&self, board: &Board) -> MoveList {
        let mut moves = MoveList::new();
        for mv in board.legal_moves() {
            let score = self.priority(board, &mv);
            moves.push(mv, score);
        }
        moves.sort_descending();
        moves
    }

    /// Legal captures in generation order, for quiescence search.
    pub fn captures(&self, board: &Board) -> Vec<Move> {
        board
            .legal_moves()
            .into_iter()
            .filter(|mv| board.is_capture(mv))
            .collect()
    }

    pub fn priority(&self, board: &Board, mv: &Move) -> i32 {
        if board.is_castling(mv) {
            return self.config.score_castle;
        }

        let mut score = 0;
        if board.gives_check(mv) {
            score += self.config.score_check;
        }

        if board.is_capture(mv) {
            // The en passant victim is not on the target square
            score += if board.is_en_passant(mv) {
                self.config.val_pawn
            } else {
                board
                    .piece_at(mv.to())
                    .map_or(0, |victim| self.config.piece_value(victim))
            };
        }

        // Always with the middlegame tables: ordering does not detect the phase
        let role = board.moved_role(mv);
        if role != Role::King {
            if let Some(from) = mv.from() {
                let turn = board.side_to_move();
                score += get_pst_value(role, turn, mv.to(), false)
                    - get_pst_value(role, turn, from, false);
            }
        }

        score
    }
}
