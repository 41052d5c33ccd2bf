use crate::engine::config::EngineConfig;
use crate::engine::eval::PositionalEvaluator;
use crate::engine::ordering::MoveOrderer;
use crate::engine::{Evaluator, SearchResult, SearchStats, Searcher};
use crate::logic::board::{move_to_uci, Board};
use shakmaty::Move;
use std::sync::Arc;
use std::time::Instant;

/// Best move and score seen at the root of the current search.
#[derive(Debug, Clone, Default)]
pub struct RootBest {
    pub best_move: Option<Move>,
    pub best_eval: i32,
}

/// Fixed-depth negamax with fail-hard alpha-beta and a capture-only
/// quiescence extension at the horizon.
pub struct AlphaBetaEngine {
    config: Arc<EngineConfig>,
    evaluator: PositionalEvaluator,
    orderer: MoveOrderer,
    nodes: u64,
    leaves: u64,
}

impl AlphaBetaEngine {
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            evaluator: PositionalEvaluator::new(config.clone()),
            orderer: MoveOrderer::new(config.clone()),
            config,
            nodes: 0,
            leaves: 0,
        }
    }

    pub fn update_config(&mut self, config: Arc<EngineConfig>) {
        self.evaluator = PositionalEvaluator::new(config.clone());
        self.orderer = MoveOrderer::new(config.clone());
        self.config = config;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluator calls since the last root search started.
    pub const fn leaves(&self) -> u64 {
        self.leaves
    }

    fn evaluate(&mut self, board: &Board) -> i32 {
        self.leaves += 1;
        self.evaluator.evaluate(board)
    }

    /// Negamax value of `board` from the side to move's point of view.
    ///
    /// `ply` counts from the root; the horizon is `max_depth`, where the
    /// search hands over to [`Self::quiescence`]. Improvements at ply 0 are
    /// recorded in `root`.
    #[allow(clippy::too_many_arguments)]
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        ply: u8,
        max_depth: u8,
        mut alpha: i32,
        beta: i32,
        root: &mut RootBest,
    ) -> i32 {
        self.nodes += 1;

        if ply >= max_depth {
            return self.quiescence(board, alpha, beta);
        }

        let moves = self.orderer.order(board);
        if moves.is_empty() {
            return self.score_terminal(board, ply);
        }

        for scored in moves {
            let mv = scored.mv;
            let val = {
                let mut child = board.apply(&mv);
                -self.alpha_beta(&mut child, ply + 1, max_depth, -beta, -alpha, root)
            };

            if val >= beta {
                return beta;
            }
            if val > alpha {
                alpha = val;
                if ply == 0 {
                    log::trace!("root: {} now best at {val}", move_to_uci(&mv));
                    root.best_eval = val;
                    root.best_move = Some(mv);
                }
            }
        }

        alpha
    }

    /// Resolves pending captures so the horizon never cuts an exchange in
    /// half. Not bounded by depth: every capture removes material.
    pub fn quiescence(&mut self, board: &mut Board, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        let stand_pat = self.evaluate(board);
        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        for mv in self.orderer.captures(board) {
            let score = {
                let mut child = board.apply(&mv);
                -self.quiescence(&mut child, -beta, -alpha)
            };

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }

    /// Score of a node without legal moves: mated (nearer mates are worse
    /// for the loser) or stalemated.
    fn score_terminal(&self, board: &Board, ply: u8) -> i32 {
        if board.is_in_check() {
            -self.config.mate_value + i32::from(ply)
        } else {
            0
        }
    }
}

impl Searcher for AlphaBetaEngine {
    fn search(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        self.nodes = 0;
        self.leaves = 0;
        let start = Instant::now();

        let mut root = RootBest::default();
        let bound = self.config.search_bound;
        let value = self.alpha_beta(board, 0, depth, -bound, bound, &mut root);

        // Without a root move the recursion's own value is the only score
        // there is: terminal at depth >= 1, quiescence at depth 0.
        let score = if root.best_move.is_some() {
            root.best_eval
        } else {
            value
        };

        let stats = SearchStats {
            depth,
            nodes: self.nodes,
            leaves: self.leaves,
            time_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        };

        match &root.best_move {
            Some(mv) => log::debug!(
                "depth {depth}: {} scored {score} ({} nodes, {} leaves, {} ms)",
                move_to_uci(mv),
                stats.nodes,
                stats.leaves,
                stats.time_ms
            ),
            None => log::warn!("depth {depth}: no move found, score {score}"),
        }

        SearchResult {
            score,
            best_move: root.best_move,
            stats,
        }
    }
}
