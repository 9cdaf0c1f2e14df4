//! Session resource owning the board

use crate::game::rules::Board;
use bevy::prelude::*;

/// The running session: board state plus its counters.
///
/// Systems never touch card state directly; every round mutation goes
/// through [`Board`] methods, so the transition rules live in one place and
/// stay testable without the ECS.
#[derive(Resource, Debug)]
pub struct GameSession {
    pub board: Board,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            board: Board::shuffled(&mut rand::rng()),
        }
    }
}
