use bevy::prelude::*;
use crate::shared::*;

/// Spawns the player at the origin tile. The player has no sprite of its
/// own — the farming render systems paint its cell through the view
/// projection, which puts the player marker above everything else.
pub fn spawn_player(mut commands: Commands, query: Query<(), With<Player>>) {
    if !query.is_empty() {
        return;
    }
    commands.spawn((Player, GridPosition::new(0, 0)));
    info!("[Player] Spawned at (0, 0)");
}
