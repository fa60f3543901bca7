mod movement;
mod spawn;

pub use movement::{player_movement, step_position};

use bevy::prelude::*;
use crate::shared::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn::spawn_player)
            .add_systems(
                Update,
                movement::player_movement.run_if(in_state(GameState::Playing)),
            );
    }
}
