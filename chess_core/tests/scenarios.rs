use chess_core::engine::config::EngineConfig;
use chess_core::engine::eval::PositionalEvaluator;
use chess_core::engine::search::AlphaBetaEngine;
use chess_core::engine::{Evaluator, SearchResult, Searcher};
use chess_core::logic::board::{move_to_uci, Board};
use chess_core::logic::eval_constants::MATE_VALUE;
use chess_core::logic::game::{GameState, GameStatus, Side};
use std::sync::Arc;

fn search_fen(fen: &str, depth: u8) -> SearchResult {
    let mut board = Board::from_fen(fen).expect("Invalid FEN");
    let mut engine = AlphaBetaEngine::new(Arc::new(EngineConfig::default()));
    let result = engine.search(&mut board, depth);
    println!(
        "{fen} depth {depth}: {:?} score {} ({} nodes)",
        result.best_move.as_ref().map(move_to_uci),
        result.score,
        result.stats.nodes
    );
    result
}

fn best_uci(result: &SearchResult) -> String {
    move_to_uci(result.best_move.as_ref().expect("No move found"))
}

#[test]
fn test_start_position() {
    let board = Board::new();
    let evaluator = PositionalEvaluator::new(Arc::new(EngineConfig::default()));
    assert_eq!(evaluator.evaluate(&board), 0);

    // Developing a knight gains 50 on the tables and Black has no capture
    let result = search_fen(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        1,
    );
    assert!(["b1c3", "g1f3"].contains(&best_uci(&result).as_str()));
    assert_eq!(result.score, 50);
}

#[test]
fn test_takes_free_queen() {
    let result = search_fen("6k1/8/8/3q4/8/8/8/3R2K1 w - - 0 1", 2);
    assert_eq!(best_uci(&result), "d1d5");
    assert!(result.score > 400);
}

#[test]
fn test_back_rank_mate_in_one() {
    let result = search_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 3);
    assert_eq!(best_uci(&result), "a1a8");
    assert_eq!(result.score, MATE_VALUE - 1);
}

#[test]
fn test_does_not_take_defended_pawn() {
    // Qxd5 loses the queen to cxd5
    for depth in [2, 3] {
        let result = search_fen("4k3/8/2p5/3p4/8/8/8/3QK3 w - - 0 1", depth);
        assert_ne!(best_uci(&result), "d1d5");
        assert!(result.score > 0);
    }
}

#[test]
fn test_recaptures_to_keep_material_even() {
    // The knight on d4 hangs to the e3 pawn
    let result = search_fen("4k3/8/8/8/3n4/4P3/8/4K3 w - - 0 1", 2);
    assert_eq!(best_uci(&result), "e3d4");
}

#[test]
fn test_stalemate_scores_zero() {
    let result = search_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", 2);
    assert_eq!(result.score, 0);
    assert!(result.best_move.is_none());
}

#[test]
fn test_avoids_stalemating_when_winning() {
    // Qf7 stalemates, Qf8 mates
    let result = search_fen("7k/8/6K1/8/8/8/5Q2/8 w - - 0 1", 2);
    assert_ne!(best_uci(&result), "f2f7");
    assert_eq!(result.score, MATE_VALUE - 1);
}

#[test]
fn test_repeated_searches_agree() {
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
    let first = search_fen(fen, 3);
    let second = search_fen(fen, 3);
    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.score, second.score);
    assert_eq!(first.stats.nodes, second.stats.nodes);
}

#[test]
fn test_engine_drives_a_game() {
    let mut game = GameState::new();
    let mut engine = AlphaBetaEngine::new(Arc::new(EngineConfig::default()));

    for _ in 0..6 {
        let result = engine.search(&mut game.board, 2);
        let mv = result.best_move.expect("No move found");
        game.make_move(&mv, Some(result.score)).unwrap();
    }

    assert_eq!(game.history.len(), 6);
    assert_eq!(game.board.pushed_moves(), 6);
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.turn(), Side::White);
    assert!(game.history.iter().all(|record| record.score.is_some()));

    let last = game.undo_move().unwrap();
    assert_eq!(last.mover, Side::Black);
    assert_eq!(game.turn(), Side::Black);
}

#[test]
fn test_engine_finishes_the_game() {
    let mut game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    let mut engine = AlphaBetaEngine::new(Arc::new(EngineConfig::default()));

    let result = engine.search(&mut game.board, 2);
    game.make_move(&result.best_move.unwrap(), Some(result.score))
        .unwrap();

    assert_eq!(game.status(), GameStatus::Checkmate(Side::White));
    let after = engine.search(&mut game.board, 2);
    assert!(after.best_move.is_none());
    assert_eq!(after.score, -MATE_VALUE);
}
