//! View projection — the read-only mapping from farm state to display
//! descriptors. The renderer consumes this and nothing else; no logic
//! flows back.

use bevy::prelude::*;
use crate::shared::*;

/// What one cell should show. Precedence is baked in by `project_view`:
/// the player marker beats everything, then harvest-ready, then the crop
/// growth stage, then plain grass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileView {
    Player,
    ReadyToHarvest,
    Crop { stage: u8 },
    Grass,
}

/// A rectangular snapshot of display descriptors, same dimensions as the
/// grid it was projected from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewGrid {
    width: u32,
    height: u32,
    cells: Vec<TileView>,
}

impl ViewGrid {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: i32, y: i32) -> TileView {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return TileView::Grass;
        }
        self.cells[(y as u32 * self.width + x as u32) as usize]
    }
}

/// Project the current farm state to display descriptors. Pure: no hidden
/// state, identical output for identical input.
pub fn project_view(grid: &FarmGrid, player: GridPosition) -> ViewGrid {
    let cells = grid
        .iter()
        .map(|((x, y), tile)| {
            if x == player.x && y == player.y {
                TileView::Player
            } else {
                match tile.kind {
                    TileKind::ReadyToHarvest => TileView::ReadyToHarvest,
                    TileKind::Crop => TileView::Crop { stage: tile.growth },
                    TileKind::Grass => TileView::Grass,
                }
            }
        })
        .collect();

    ViewGrid {
        width: grid.width(),
        height: grid.height(),
        cells,
    }
}

/// Flat placeholder colour for a display descriptor.
pub fn tile_view_color(view: TileView, total_stages: u8) -> Color {
    match view {
        TileView::Player => Color::srgb(0.16, 0.35, 0.78),
        TileView::ReadyToHarvest => Color::srgb(0.72, 0.45, 0.12),
        TileView::Crop { stage } => crop_stage_color(stage, total_stages),
        TileView::Grass => Color::srgb(0.30, 0.62, 0.28),
    }
}

/// Colour ramp for a growing crop: pale seedling green towards golden as
/// the stage approaches ripeness.
pub fn crop_stage_color(stage: u8, total_stages: u8) -> Color {
    let denom = total_stages.max(1) as f32;
    let progress = (stage.saturating_sub(1) as f32 / denom).clamp(0.0, 1.0);
    let r = 0.50 + 0.35 * progress;
    let g = 0.68 + 0.04 * progress;
    let b = 0.25 * (1.0 - progress);
    Color::srgb(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
