//! Uniform random mover, used as a sparring partner and in tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::*;

pub struct RandomEngine<R = StdRng> {
    rng: R,
}

impl RandomEngine<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Default for RandomEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Engine for RandomEngine<R> {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, game_state: &mut GameState, color: Color) -> EngineOutput {
        let legal_moves = game_state.all_legal_moves(color);
        trace!(count = legal_moves.len(), "random engine choosing");
        EngineOutput {
            best_move: legal_moves.choose(&mut self.rng).copied(),
            ..EngineOutput::default()
        }
    }
}
