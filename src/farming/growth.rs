//! Overnight crop growth.

use bevy::prelude::*;
use crate::shared::*;

/// Processes end-of-day farming logic: every planted crop gains one growth
/// stage, and crops that already reached the final stage turn harvest-ready.
/// The player's position plays no part here.
pub fn on_day_end(
    mut day_end_events: EventReader<DayEndEvent>,
    mut farm_grid: ResMut<FarmGrid>,
    config: Res<FarmConfig>,
) {
    for event in day_end_events.read() {
        let changed = advance_growth(&mut farm_grid, config.growth_stages_before_harvest);
        info!(
            "[Farm] Day {}: {} crop tile(s) advanced",
            event.day,
            changed.len()
        );
    }
}

/// Advance every crop by one day. Cells are independent: a crop below
/// `stages` gains one growth, a crop at `stages` becomes harvest-ready,
/// grass and harvest-ready tiles stay as they are. Returns the positions
/// that changed.
///
/// Growth observed on a planted tile is therefore 1, 2, .., `stages`, then
/// a kind change — never `stages + 1`.
pub fn advance_growth(grid: &mut FarmGrid, stages: u8) -> Vec<(i32, i32)> {
    let mut changed = Vec::new();

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let tile = grid.get(x, y);
            if tile.kind != TileKind::Crop {
                continue;
            }

            if tile.growth < stages {
                grid.set(x, y, Tile::crop(tile.growth + 1));
            } else {
                grid.set(x, y, Tile::ready_to_harvest());
            }
            changed.push((x, y));
        }
    }

    changed
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
