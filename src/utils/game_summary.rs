//! Finished-game summary handed to the persistence layer.
//!
//! Persistence only ever sees the result, the move count and a timestamp;
//! it never gets a reference into the engine state.

use chrono::{DateTime, Utc};

use crate::game_state::chess_types::{Color, GameResult, GameState};

/// Who the human was playing against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    Bot,
    Human,
}

/// A finished game from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerOutcome {
    Win,
    Loss,
    Draw,
    /// Hot-seat games are recorded but never counted as a win or loss.
    PlayerVsPlayer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub result: GameResult,
    pub detail: String,
    /// Committed plies.
    pub move_count: usize,
    pub finished_at: DateTime<Utc>,
}

impl GameSummary {
    /// `None` while the game is still running.
    pub fn from_game(game_state: &GameState) -> Option<Self> {
        Self::from_game_at(game_state, Utc::now())
    }

    pub fn from_game_at(game_state: &GameState, finished_at: DateTime<Utc>) -> Option<Self> {
        let result = game_state.game_result();
        if !result.is_terminal() {
            return None;
        }
        Some(Self {
            result,
            detail: result.as_str().to_owned(),
            move_count: game_state.move_count(),
            finished_at,
        })
    }

    /// Full moves, counting a trailing white move as one.
    pub fn full_moves(&self) -> usize {
        self.move_count.div_ceil(2)
    }

    pub fn outcome_for(&self, player: Color, opponent: Opponent) -> PlayerOutcome {
        match (self.result.winner(), opponent) {
            (None, _) => PlayerOutcome::Draw,
            (Some(_), Opponent::Human) => PlayerOutcome::PlayerVsPlayer,
            (Some(winner), Opponent::Bot) if winner == player => PlayerOutcome::Win,
            (Some(_), Opponent::Bot) => PlayerOutcome::Loss,
        }
    }
}
