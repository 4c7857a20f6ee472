//! Global state machine.

use bevy::prelude::*;

/// Top-level game state. Gameplay systems only run while `InGame`; entities
/// tagged `DespawnOnExit(GameState::InGame)` are cleaned up on exit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}
