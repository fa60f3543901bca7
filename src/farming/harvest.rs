//! Harvest — turning ripe crops back into grass.

use bevy::prelude::*;
use crate::shared::*;

/// Keyboard mirror of the Harvest button.
pub fn detect_harvest_input(
    input: Res<PlayerInput>,
    mut requests: EventWriter<HarvestRequested>,
) {
    if input.harvest {
        requests.send(HarvestRequested);
    }
}

/// Harvest the tile the player stands on. Only a harvest-ready tile
/// reacts; grass and still-growing crops absorb the request silently.
pub fn handle_harvest_requested(
    mut requests: EventReader<HarvestRequested>,
    mut farm_grid: ResMut<FarmGrid>,
    player_query: Query<&GridPosition, With<Player>>,
    mut harvested_events: EventWriter<CropHarvestedEvent>,
) {
    for _ in requests.read() {
        let Ok(pos) = player_query.get_single() else {
            continue;
        };

        if harvest_at(&mut farm_grid, pos.x, pos.y) {
            info!("[Farm] Harvested at ({}, {})", pos.x, pos.y);
            harvested_events.send(CropHarvestedEvent { x: pos.x, y: pos.y });
        }
    }
}

/// Replace a harvest-ready tile at `(x, y)` with grass. Returns whether a
/// harvest occurred; no other cell is touched.
pub fn harvest_at(grid: &mut FarmGrid, x: i32, y: i32) -> bool {
    if !grid.get(x, y).is_ready() {
        return false;
    }
    grid.set(x, y, Tile::grass());
    true
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
