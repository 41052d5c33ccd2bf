use crate::engine::config::EngineConfig;
use crate::engine::Evaluator;
use crate::logic::board::Board;
use crate::logic::eval_constants::get_pst_value;
use shakmaty::{Color, Role};
use std::sync::Arc;

const NON_PAWN_ROLES: [Role; 4] = [Role::Knight, Role::Bishop, Role::Rook, Role::Queen];
const PIECE_ROLES: [Role; 5] = [
    Role::Knight,
    Role::Bishop,
    Role::Rook,
    Role::Queen,
    Role::King,
];

/// Material plus piece-square evaluation with a two-state game phase.
pub struct PositionalEvaluator {
    config: Arc<EngineConfig>,
}

impl PositionalEvaluator {
    pub const fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }

    /// Knights, bishops, rooks and queens of one side.
    pub fn non_pawn_material(&self, board: &Board, color: Color) -> i32 {
        NON_PAWN_ROLES
            .iter()
            .map(|&role| count(board, role, color) * self.config.piece_value(role))
            .sum()
    }

    /// A side without a queen, or short on non-pawn material, is in its endgame.
    fn side_in_endgame(&self, board: &Board, color: Color, material: i32) -> bool {
        count(board, Role::Queen, color) == 0 || material < self.config.endgame_material
    }

    /// The game is in its endgame once both sides are.
    pub fn is_endgame(&self, board: &Board) -> bool {
        let white = self.non_pawn_material(board, Color::White);
        let black = self.non_pawn_material(board, Color::Black);
        self.side_in_endgame(board, Color::White, white)
            && self.side_in_endgame(board, Color::Black, black)
    }

    fn table_sum(board: &Board, role: Role, color: Color, endgame: bool) -> i32 {
        board
            .pieces(role, color)
            .into_iter()
            .map(|sq| get_pst_value(role, color, sq, endgame))
            .sum()
    }

    /// Pawn table values are weighted up in the endgame. Applied once to the
    /// difference between the sides, then truncated toward zero.
    fn scale_pawns(&self, pawn_tables: i32, endgame: bool) -> i32 {
        if !endgame {
            return pawn_tables;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        {
            (pawn_tables as f32 * self.config.endgame_pawn_scale) as i32
        }
    }

    /// Sum of piece-square values of one side, pawns included.
    pub fn positional_score(&self, board: &Board, color: Color, endgame: bool) -> i32 {
        let pieces: i32 = PIECE_ROLES
            .iter()
            .map(|&role| Self::table_sum(board, role, color, endgame))
            .sum();
        pieces + self.scale_pawns(Self::table_sum(board, Role::Pawn, color, endgame), endgame)
    }

    /// Material and piece tables of one side, pawn tables left out.
    fn side_total(&self, board: &Board, color: Color, material: i32, endgame: bool) -> i32 {
        let pawns = count(board, Role::Pawn, color) * self.config.val_pawn;
        let tables: i32 = PIECE_ROLES
            .iter()
            .map(|&role| Self::table_sum(board, role, color, endgame))
            .sum();
        material + pawns + tables
    }
}

impl Evaluator for PositionalEvaluator {
    fn evaluate(&self, board: &Board) -> i32 {
        let white_material = self.non_pawn_material(board, Color::White);
        let black_material = self.non_pawn_material(board, Color::Black);

        let endgame = self.side_in_endgame(board, Color::White, white_material)
            && self.side_in_endgame(board, Color::Black, black_material);

        let us = board.side_to_move();
        let them = !us;
        let (our_material, their_material) = match us {
            Color::White => (white_material, black_material),
            Color::Black => (black_material, white_material),
        };

        let pawn_tables = Self::table_sum(board, Role::Pawn, us, endgame)
            - Self::table_sum(board, Role::Pawn, them, endgame);

        self.side_total(board, us, our_material, endgame)
            - self.side_total(board, them, their_material, endgame)
            + self.scale_pawns(pawn_tables, endgame)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn count(board: &Board, role: Role, color: Color) -> i32 {
    board.pieces(role, color).count() as i32
}
