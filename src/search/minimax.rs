//! Fixed-depth minimax with alpha-beta pruning.
//!
//! White maximizes and black minimizes the white-side score from
//! [`BoardScorer`]. Children are visited through [`ScopedMove`], so the game
//! state is restored on every return path including cutoffs.

use crate::game_state::chess_types::*;
use crate::move_generation::scoped_move::ScopedMove;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, MaterialPstScorer, MATE_SCORE};
use crate::search::move_ordering::order_moves;

/// Deepest search accepted; also the reference point for the mate bias.
pub const MAX_SEARCH_DEPTH: u32 = 100;

/// Initial alpha-beta window bound, larger than any reachable score.
pub const SCORE_INFINITY: i32 = 1_000_000;

/// Score for the side to move being checkmated with `depth` plies of search
/// left. Mates found nearer the root score further from zero.
#[inline]
pub fn mate_score(depth: u32, maximizing: bool) -> i32 {
    let bias = (MAX_SEARCH_DEPTH - depth.min(MAX_SEARCH_DEPTH)) as i32;
    let magnitude = MATE_SCORE - bias;
    if maximizing {
        -magnitude
    } else {
        magnitude
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

#[derive(Debug, Default)]
pub struct MinimaxSearch<S: BoardScorer = MaterialPstScorer> {
    scorer: S,
    nodes_searched: u64,
}

impl MinimaxSearch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: BoardScorer> MinimaxSearch<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            scorer,
            nodes_searched: 0,
        }
    }

    /// Nodes visited since the last [`MinimaxSearch::reset_nodes`].
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    pub fn reset_nodes(&mut self) {
        self.nodes_searched = 0;
    }

    /// Minimax value of `game_state` searched `depth` plies deep. The side to
    /// move is taken from `maximizing` (white when true), not from the state.
    pub fn minimax(
        &mut self,
        game_state: &mut GameState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        debug_assert!(depth <= MAX_SEARCH_DEPTH);
        self.nodes_searched += 1;

        if depth == 0 {
            return self.scorer.score(game_state.board());
        }

        let color = if maximizing { Color::White } else { Color::Black };
        let mut moves = game_state.all_legal_moves(color);
        if moves.is_empty() {
            return if game_state.is_in_check(color) {
                mate_score(depth, maximizing)
            } else {
                0
            };
        }
        order_moves(game_state.board(), &mut moves);

        let mut best = if maximizing {
            -SCORE_INFINITY
        } else {
            SCORE_INFINITY
        };
        for mv in moves {
            let Some(mut child) = ScopedMove::make(game_state, mv) else {
                continue;
            };
            let score = self.minimax(&mut child, depth - 1, alpha, beta, !maximizing);
            drop(child);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }

    /// Every legal root move of `color` with its minimax value, each searched
    /// `depth - 1` plies below the root with a full window. Root moves are
    /// visited in capture-first order.
    pub fn score_root_moves(
        &mut self,
        game_state: &mut GameState,
        depth: u32,
        color: Color,
    ) -> Vec<ScoredMove> {
        let mut moves = game_state.all_legal_moves(color);
        order_moves(game_state.board(), &mut moves);

        let child_maximizing = color == Color::Black;
        let child_depth = depth.saturating_sub(1);
        let mut scored = Vec::with_capacity(moves.len());
        for mv in moves {
            let Some(mut child) = ScopedMove::make(game_state, mv) else {
                continue;
            };
            let score = self.minimax(
                &mut child,
                child_depth,
                -SCORE_INFINITY,
                SCORE_INFINITY,
                child_maximizing,
            );
            scored.push(ScoredMove { mv, score });
        }
        scored
    }
}
