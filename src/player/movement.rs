use bevy::prelude::*;
use crate::shared::*;

/// Core movement system — one grid step per key press, clamped to the plot.
///
/// Movement is discrete: the player token jumps whole tiles, there is no
/// pixel interpolation. The `GridPosition` component is the single source
/// of truth for where the player stands; rendering reads it through the
/// view projection.
pub fn player_movement(
    input: Res<PlayerInput>,
    config: Res<FarmConfig>,
    mut query: Query<&mut GridPosition, With<Player>>,
) {
    let Some(direction) = input.step else {
        return;
    };

    let Ok(mut grid_pos) = query.get_single_mut() else {
        return;
    };

    let next = step_position(*grid_pos, direction, &config);
    if next != *grid_pos {
        *grid_pos = next;
    }
}

/// Apply one step in `direction`, clamped to `[0, width-1] × [0, height-1]`.
/// A move into the boundary stays put; there is no error to report.
pub fn step_position(pos: GridPosition, direction: Direction, config: &FarmConfig) -> GridPosition {
    let (dx, dy) = direction.delta();
    GridPosition {
        x: (pos.x + dx).clamp(0, config.width as i32 - 1),
        y: (pos.y + dy).clamp(0, config.height as i32 - 1),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
