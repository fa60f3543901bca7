//! Crop planting.

use bevy::prelude::*;
use crate::shared::*;

/// Keyboard mirror of the Plant button.
pub fn detect_plant_input(
    input: Res<PlayerInput>,
    mut requests: EventWriter<PlantRequested>,
) {
    if input.plant {
        requests.send(PlantRequested);
    }
}

/// Plant a crop on the tile the player stands on. Anything other than
/// grass under the player absorbs the request silently — planting on a
/// growing crop must not restart it.
pub fn handle_plant_requested(
    mut requests: EventReader<PlantRequested>,
    mut farm_grid: ResMut<FarmGrid>,
    player_query: Query<&GridPosition, With<Player>>,
    mut planted_events: EventWriter<CropPlantedEvent>,
) {
    for _ in requests.read() {
        let Ok(pos) = player_query.get_single() else {
            continue;
        };

        if plant_at(&mut farm_grid, pos.x, pos.y) {
            info!("[Farm] Planted at ({}, {})", pos.x, pos.y);
            planted_events.send(CropPlantedEvent { x: pos.x, y: pos.y });
        }
    }
}

/// Replace grass at `(x, y)` with a freshly planted crop at growth 1.
/// Returns whether anything changed; no other cell is touched.
pub fn plant_at(grid: &mut FarmGrid, x: i32, y: i32) -> bool {
    if !grid.get(x, y).is_grass() {
        return false;
    }
    grid.set(x, y, Tile::crop(1));
    true
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
