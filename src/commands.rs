use anyhow::{Context, Result};
use chess_core::engine::config::EngineConfig;
use chess_core::engine::eval::PositionalEvaluator;
use chess_core::engine::search::AlphaBetaEngine;
use chess_core::engine::{Evaluator, SearchStats, Searcher};
use chess_core::logic::board::{move_to_uci, Board};
use chess_core::logic::game::{GameState, GameStatus};
use serde::Serialize;
use shakmaty::Color;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Serialize)]
struct SearchReport {
    fen: String,
    best_move: Option<String>,
    score: i32,
    stats: SearchStats,
}

#[derive(Debug, Serialize)]
struct EvalReport {
    score: i32,
    endgame: bool,
    white_material: i32,
    black_material: i32,
}

fn load_config(path: Option<&Path>) -> Result<Arc<EngineConfig>> {
    let Some(path) = path else {
        return Ok(Arc::new(EngineConfig::default()));
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = EngineConfig::load_from_json(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    tracing::debug!(?config, "loaded engine config");
    Ok(Arc::new(config))
}

pub fn search(fen: &str, depth: u8, config: Option<&Path>, json: bool) -> Result<()> {
    let mut board = Board::from_fen(fen).with_context(|| format!("bad position: {fen}"))?;
    let mut engine = AlphaBetaEngine::new(load_config(config)?);

    let result = engine.search(&mut board, depth);
    let report = SearchReport {
        fen: fen.trim().to_string(),
        best_move: result.best_move.as_ref().map(move_to_uci),
        score: result.score,
        stats: result.stats,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match &report.best_move {
            Some(uci) => println!("bestmove {uci} score {}", report.score),
            None => println!("bestmove (none) score {}", report.score),
        }
        println!(
            "depth {} nodes {} leaves {} time {} ms",
            report.stats.depth, report.stats.nodes, report.stats.leaves, report.stats.time_ms
        );
    }
    Ok(())
}

pub fn play(fen: &str, depth: u8, plies: usize, config: Option<&Path>) -> Result<()> {
    let mut game = GameState::from_fen(fen).with_context(|| format!("bad position: {fen}"))?;
    let mut engine = AlphaBetaEngine::new(load_config(config)?);

    while game.history.len() < plies && game.status() == GameStatus::Playing {
        let result = engine.search(&mut game.board, depth);
        let Some(mv) = result.best_move else {
            break;
        };
        game.make_move(&mv, Some(result.score))?;

        tracing::info!(
            ply = game.history.len(),
            mv = %move_to_uci(&mv),
            score = result.score,
            nodes = result.stats.nodes,
            time_ms = result.stats.time_ms,
            "engine move"
        );
    }

    let moves: Vec<&str> = game.history.iter().map(|r| r.uci.as_str()).collect();
    println!("{}", moves.join(" "));
    match game.status() {
        GameStatus::Playing => println!("stopped after {} plies", game.history.len()),
        status => println!("{status:?}"),
    }
    Ok(())
}

pub fn eval(fen: &str, config: Option<&Path>) -> Result<()> {
    let board = Board::from_fen(fen).with_context(|| format!("bad position: {fen}"))?;
    let evaluator = PositionalEvaluator::new(load_config(config)?);

    let report = EvalReport {
        score: evaluator.evaluate(&board),
        endgame: evaluator.is_endgame(&board),
        white_material: evaluator.non_pawn_material(&board, Color::White),
        black_material: evaluator.non_pawn_material(&board, Color::Black),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
