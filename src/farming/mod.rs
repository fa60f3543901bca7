//! Farming domain — planting, crop growth, harvest, and the grid view.
//!
//! Communicates with other domains exclusively through crate::shared
//! events/resources. All grid mutation funnels through three pure
//! transition functions (`plant_at`, `advance_growth`, `harvest_at`); the
//! systems here only decide when to call them and announce the result.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::shared::*;

pub mod growth;
pub mod harvest;
pub mod planting;
pub mod render;
pub mod view;

/// Marker component for the sprite entity of one farm cell.
#[derive(Component, Debug, Clone)]
pub struct FarmTileSprite {
    pub grid_x: i32,
    pub grid_y: i32,
}

/// Tracks which cell sprite entities exist keyed by grid position, so the
/// spawn system is idempotent across state re-entry.
#[derive(Resource, Default, Debug)]
pub struct FarmTileEntities {
    pub tiles: HashMap<(i32, i32), Entity>,
}

pub struct FarmingPlugin;

impl Plugin for FarmingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FarmTileEntities>()
            // One sprite per cell, spawned when gameplay starts
            .add_systems(OnEnter(GameState::Playing), render::spawn_tile_sprites)
            .add_systems(
                Update,
                (
                    // Keyboard mirrors of the action buttons
                    planting::detect_plant_input,
                    harvest::detect_harvest_input,
                    // The transitions themselves
                    planting::handle_plant_requested,
                    harvest::handle_harvest_requested,
                    // Overnight growth, fired by the calendar domain
                    growth::on_day_end,
                    // Session tallies for the HUD
                    track_play_stats,
                )
                    .run_if(in_state(GameState::Playing)),
            )
            // Visual sync — runs after all state mutations
            .add_systems(
                PostUpdate,
                render::sync_tile_sprites.run_if(in_state(GameState::Playing)),
            );
    }
}

/// Count successful plants and harvests for the HUD tally.
pub fn track_play_stats(
    mut planted: EventReader<CropPlantedEvent>,
    mut harvested: EventReader<CropHarvestedEvent>,
    mut stats: ResMut<PlayStats>,
) {
    for _ in planted.read() {
        stats.crops_planted += 1;
    }
    for _ in harvested.read() {
        stats.crops_harvested += 1;
    }
}

/// Convert a grid position to a world-space translation (centre of tile).
pub fn grid_to_world(x: i32, y: i32) -> Vec3 {
    Vec3::new(x as f32 * TILE_SIZE, y as f32 * TILE_SIZE, 1.0)
}
