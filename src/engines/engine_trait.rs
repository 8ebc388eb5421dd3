//! Engine abstraction shared by the AI player and the baseline engines.
//!
//! An engine is handed the live game state for the duration of one decision
//! and must give it back exactly as it found it.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::search::minimax::MAX_SEARCH_DEPTH;

/// Player-facing strength levels, each a fixed search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Easy = 1,
    Medium = 2,
    Hard = 3,
    Expert = 4,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    pub fn from_level(level: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|d| *d as u8 == level)
    }

    #[inline]
    pub const fn depth(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched from the root, clamped to `1..=MAX_SEARCH_DEPTH`.
    pub depth: u32,
    /// Root moves within this many centipawns of the best are picked at random.
    pub tolerance_cp: i32,
    pub use_book: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            tolerance_cp: 15,
            use_book: true,
        }
    }
}

impl SearchConfig {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            depth: difficulty.depth(),
            ..Self::default()
        }
    }
}

#[inline]
pub fn clamp_depth(depth: u32) -> u32 {
    depth.clamp(1, MAX_SEARCH_DEPTH)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// White-side score of the chosen move; `None` for book or random picks.
    pub score: Option<i32>,
    pub from_book: bool,
    pub nodes_searched: u64,
}

pub trait Engine {
    fn name(&self) -> &str;

    /// Pick a move for `color`. `best_move` is `None` only when `color` has
    /// no legal moves.
    fn choose_move(&mut self, game_state: &mut GameState, color: Color) -> EngineOutput;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_levels_map_to_depths() {
        assert_eq!(Difficulty::from_level(1), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_level(4).map(Difficulty::depth), Some(4));
        assert_eq!(Difficulty::from_level(0), None);
        assert_eq!(Difficulty::from_level(5), None);
        assert_eq!(SearchConfig::for_difficulty(Difficulty::Hard).depth, 3);
    }

    #[test]
    fn default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 2);
        assert_eq!(config.tolerance_cp, 15);
        assert!(config.use_book);
    }

    #[test]
    fn depth_is_clamped() {
        assert_eq!(clamp_depth(0), 1);
        assert_eq!(clamp_depth(3), 3);
        assert_eq!(clamp_depth(1_000), MAX_SEARCH_DEPTH);
    }
}
