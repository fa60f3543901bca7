//! Visual synchronisation — keep cell sprites in sync with the projected
//! view.

use bevy::prelude::*;
use crate::shared::*;
use super::{
    grid_to_world,
    view::{project_view, tile_view_color, TileView},
    FarmTileEntities, FarmTileSprite,
};

/// Spawn one flat-colour sprite per farm cell. Idempotent: cells already
/// tracked in `FarmTileEntities` are left alone.
pub fn spawn_tile_sprites(
    mut commands: Commands,
    mut farm_entities: ResMut<FarmTileEntities>,
    farm_grid: Res<FarmGrid>,
    config: Res<FarmConfig>,
) {
    for ((x, y), _) in farm_grid.iter() {
        if farm_entities.tiles.contains_key(&(x, y)) {
            continue;
        }

        let color = tile_view_color(TileView::Grass, config.growth_stages_before_harvest);
        let entity = commands
            .spawn((
                Sprite {
                    color,
                    custom_size: Some(Vec2::splat(TILE_SIZE - 2.0)),
                    ..default()
                },
                Transform::from_translation(grid_to_world(x, y)),
                FarmTileSprite { grid_x: x, grid_y: y },
            ))
            .id();
        farm_entities.tiles.insert((x, y), entity);
    }

    info!(
        "[Farm] Spawned {} cell sprites ({}×{})",
        farm_entities.tiles.len(),
        farm_grid.width(),
        farm_grid.height()
    );
}

/// Repaint every cell sprite from the projected view. The projection owns
/// the precedence rules (player above ready above crop above grass), so
/// this system is a straight colour lookup.
pub fn sync_tile_sprites(
    farm_grid: Res<FarmGrid>,
    config: Res<FarmConfig>,
    player_query: Query<&GridPosition, With<Player>>,
    mut tile_query: Query<(&FarmTileSprite, &mut Sprite)>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };

    let view = project_view(&farm_grid, *player);

    for (tile, mut sprite) in tile_query.iter_mut() {
        let cell = view.get(tile.grid_x, tile.grid_y);
        sprite.color = tile_view_color(cell, config.growth_stages_before_harvest);
    }
}
