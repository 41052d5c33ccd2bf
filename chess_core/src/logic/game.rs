use crate::error::{GameError, GameResult};
use crate::logic::board::{move_to_uci, Board};
use serde::{Deserialize, Serialize};
use shakmaty::{Color, Move, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl From<Color> for Side {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Self::White,
            Color::Black => Self::Black,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Checkmate(Side), // Winner
    Stalemate,
    InsufficientMaterial,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRecord {
    pub uci: String,
    pub mover: Side,
    pub score: Option<i32>, // Engine evaluation, if the move came from a search
}

#[derive(Debug, Clone, Default)]
pub struct GameState {
    pub board: Board,
    pub history: Vec<MoveRecord>,
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fen(fen: &str) -> GameResult<Self> {
        Ok(Self {
            board: Board::from_fen(fen)?,
            history: Vec::new(),
        })
    }

    pub fn turn(&self) -> Side {
        self.board.side_to_move().into()
    }

    pub fn status(&self) -> GameStatus {
        let position = self.board.position();
        if position.legal_moves().is_empty() {
            if position.is_check() {
                return GameStatus::Checkmate((!position.turn()).into());
            }
            return GameStatus::Stalemate;
        }
        if position.is_insufficient_material() {
            return GameStatus::InsufficientMaterial;
        }
        GameStatus::Playing
    }

    pub fn make_move(&mut self, mv: &Move, score: Option<i32>) -> GameResult<()> {
        let status = self.status();
        if status != GameStatus::Playing {
            return Err(GameError::GameOver { status });
        }
        if !self.board.is_legal(mv) {
            return Err(GameError::IllegalMove {
                uci: move_to_uci(mv),
            });
        }

        let mover = self.turn();
        self.board.push(mv);
        self.history.push(MoveRecord {
            uci: move_to_uci(mv),
            mover,
            score,
        });
        Ok(())
    }

    pub fn make_uci_move(&mut self, uci: &str) -> GameResult<()> {
        let status = self.status();
        if status != GameStatus::Playing {
            return Err(GameError::GameOver { status });
        }
        let mv = self
            .board
            .find_move(uci)
            .ok_or_else(|| GameError::IllegalMove {
                uci: uci.to_string(),
            })?;
        self.make_move(&mv, None)
    }

    pub fn undo_move(&mut self) -> GameResult<MoveRecord> {
        let record = self.history.pop().ok_or(GameError::NothingToUndo)?;
        self.board.pop();
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_playing() {
        let game = GameState::new();
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.turn(), Side::White);
    }

    #[test]
    fn test_fools_mate() {
        let mut game = GameState::new();
        for uci in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            game.make_uci_move(uci).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Checkmate(Side::Black));
        assert_eq!(game.history.len(), 4);
        assert_eq!(game.history[3].mover, Side::Black);

        let err = game.make_uci_move("e2e4").unwrap_err();
        assert!(matches!(err, GameError::GameOver { .. }));
    }

    #[test]
    fn test_stalemate_and_insufficient_material() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(game.status(), GameStatus::Stalemate);

        let game = GameState::from_fen("8/8/4k3/8/8/3K4/8/8 w - - 0 1").unwrap();
        assert_eq!(game.status(), GameStatus::InsufficientMaterial);
    }

    #[test]
    fn test_illegal_move_rejected() {
        let mut game = GameState::new();
        let err = game.make_uci_move("e2e5").unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { .. }));
        assert!(game.history.is_empty());
    }

    #[test]
    fn test_finished_game_rejects_any_move_text() {
        let mut game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        game.make_uci_move("a1a8").unwrap();
        assert_eq!(game.status(), GameStatus::Checkmate(Side::White));

        for uci in ["g8h8", "h7h6", "xyz"] {
            let err = game.make_uci_move(uci).unwrap_err();
            assert!(
                matches!(err, GameError::GameOver { status: GameStatus::Checkmate(Side::White) }),
                "{uci}: {err:?}"
            );
        }
        assert_eq!(game.history.len(), 1);
    }

    #[test]
    fn test_undo_move() {
        let mut game = GameState::new();
        assert!(matches!(game.undo_move(), Err(GameError::NothingToUndo)));

        game.make_uci_move("d2d4").unwrap();
        let record = game.undo_move().unwrap();
        assert_eq!(record.uci, "d2d4");
        assert_eq!(game.turn(), Side::White);
        assert_eq!(game.board.pushed_moves(), 0);
    }
}
