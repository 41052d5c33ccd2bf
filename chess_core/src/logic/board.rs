use crate::error::GameResult;
use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{Bitboard, CastlingMode, Chess, Color, Move, MoveList, Position, Role, Square};
use std::ops::{Deref, DerefMut};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Chess position with a stack of previous positions.
///
/// Every `push` must be matched by exactly one `pop`. The search uses
/// [`Board::apply`], which returns a guard that pops when it goes out of
/// scope, so early returns cannot leave a move on the board.
#[derive(Debug, Clone, Default)]
pub struct Board {
    position: Chess,
    undo_stack: Vec<Chess>,
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fen(fen: &str) -> GameResult<Self> {
        let fen: Fen = fen.trim().parse()?;
        let position: Chess = fen.into_position(CastlingMode::Standard)?;
        Ok(Self::from_position(position))
    }

    pub fn from_position(position: Chess) -> Self {
        Self {
            position,
            undo_stack: Vec::new(),
        }
    }

    pub const fn position(&self) -> &Chess {
        &self.position
    }

    /// Number of moves currently pushed on top of the initial position.
    pub fn pushed_moves(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn legal_moves(&self) -> MoveList {
        self.position.legal_moves()
    }

    pub fn is_legal(&self, mv: &Move) -> bool {
        self.legal_moves().contains(mv)
    }

    /// Plays `mv`, which must be legal in the current position.
    pub fn push(&mut self, mv: &Move) {
        let previous = self.position.clone();
        self.position.play_unchecked(mv);
        self.undo_stack.push(previous);
    }

    /// Restores the position before the last `push`. Returns `false` if
    /// there was nothing to pop.
    pub fn pop(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(previous) => {
                self.position = previous;
                true
            }
            None => false,
        }
    }

    /// Scoped `push`: the move is taken back when the guard drops.
    pub fn apply(&mut self, mv: &Move) -> MoveGuard<'_> {
        self.push(mv);
        MoveGuard { board: self }
    }

    #[allow(clippy::unused_self)]
    pub fn is_capture(&self, mv: &Move) -> bool {
        mv.is_capture()
    }

    #[allow(clippy::unused_self)]
    pub fn is_castling(&self, mv: &Move) -> bool {
        mv.is_castle()
    }

    #[allow(clippy::unused_self)]
    pub fn is_en_passant(&self, mv: &Move) -> bool {
        mv.is_en_passant()
    }

    pub fn gives_check(&self, mv: &Move) -> bool {
        let mut next = self.position.clone();
        next.play_unchecked(mv);
        next.is_check()
    }

    pub fn piece_at(&self, square: Square) -> Option<Role> {
        self.position.board().role_at(square)
    }

    #[allow(clippy::unused_self)]
    pub fn moved_role(&self, mv: &Move) -> Role {
        mv.role()
    }

    pub fn pieces(&self, role: Role, color: Color) -> Bitboard {
        let board = self.position.board();
        board.by_role(role) & board.by_color(color)
    }

    pub fn is_in_check(&self) -> bool {
        self.position.is_check()
    }

    pub fn side_to_move(&self) -> Color {
        self.position.turn()
    }

    /// Looks up a legal move by its UCI text, e.g. `e2e4` or `e7e8q`.
    pub fn find_move(&self, uci: &str) -> Option<Move> {
        let uci = UciMove::from_ascii(uci.trim().as_bytes()).ok()?;
        uci.to_move(&self.position).ok()
    }
}

/// Takes back the move it was created for when dropped.
pub struct MoveGuard<'a> {
    board: &'a mut Board,
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        let restored = self.board.pop();
        debug_assert!(restored, "MoveGuard dropped with an empty undo stack");
    }
}

/// UCI text of a move. Castling is written as the king's two-square step.
pub fn move_to_uci(mv: &Move) -> String {
    mv.to_uci(CastlingMode::Standard).to_string()
}
