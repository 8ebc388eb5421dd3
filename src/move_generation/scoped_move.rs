//! Guard that plays a move on a borrowed game state and takes it back when
//! dropped, so every exit from a search frame (including an alpha-beta
//! cutoff) leaves the state exactly as it found it.

use std::ops::{Deref, DerefMut};

use crate::game_state::chess_types::GameState;
use crate::move_generation::legal_move_apply::TransientUndo;
use crate::moves::move_descriptions::Move;

pub struct ScopedMove<'a> {
    game_state: &'a mut GameState,
    mv: Move,
    undo: TransientUndo,
}

impl<'a> ScopedMove<'a> {
    /// `None` (state untouched) when the origin square of `mv` is empty.
    pub fn make(game_state: &'a mut GameState, mv: Move) -> Option<Self> {
        let undo = game_state.make_transient(mv)?;
        Some(Self {
            game_state,
            mv,
            undo,
        })
    }
}

impl Deref for ScopedMove<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.game_state
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.game_state
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.game_state.unmake_transient(self.mv, self.undo);
    }
}
