//! Shared components, resources, events, and states for Sproutfield.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
}

// ═══════════════════════════════════════════════════════════════════════
// TILES & GRID
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TileKind {
    #[default]
    Grass,
    Crop,
    ReadyToHarvest,
}

/// One cell of the farm. `growth` is only meaningful while `kind == Crop`
/// (1..=stages once planted); grass and harvest-ready tiles keep it at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Tile {
    pub kind: TileKind,
    pub growth: u8,
}

impl Tile {
    pub fn grass() -> Self {
        Self { kind: TileKind::Grass, growth: 0 }
    }

    pub fn crop(growth: u8) -> Self {
        Self { kind: TileKind::Crop, growth }
    }

    pub fn ready_to_harvest() -> Self {
        Self { kind: TileKind::ReadyToHarvest, growth: 0 }
    }

    pub fn is_grass(&self) -> bool {
        self.kind == TileKind::Grass
    }

    pub fn is_ready(&self) -> bool {
        self.kind == TileKind::ReadyToHarvest
    }
}

/// The farm plot. Fixed dimensions for the whole session, every cell grass
/// at creation. Only the plant / advance-day / harvest transitions write to
/// it; everything else reads.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmGrid {
    width: u32,
    height: u32,
    /// Row-major: index = y * width + x.
    tiles: Vec<Tile>,
}

impl FarmGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::grass(); (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Out-of-bounds reads come back as grass; writes outside the plot are
    /// dropped. Callers that track the player position never hit either
    /// case because movement clamps first.
    pub fn get(&self, x: i32, y: i32) -> Tile {
        if !self.in_bounds(x, y) {
            return Tile::grass();
        }
        self.tiles[(y as u32 * self.width + x as u32) as usize]
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        Some(&mut self.tiles[idx])
    }

    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if let Some(cell) = self.get_mut(x, y) {
            *cell = tile;
        }
    }

    /// Iterate every cell as `((x, y), tile)`, row by row.
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), Tile)> + '_ {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &tile)| (((i as u32 % width) as i32, (i as u32 / width) as i32), tile))
    }
}

impl FromWorld for FarmGrid {
    fn from_world(world: &mut World) -> Self {
        let config = world
            .get_resource::<FarmConfig>()
            .copied()
            .unwrap_or_default();
        Self::new(config.width, config.height)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// CONFIGURATION
// ═══════════════════════════════════════════════════════════════════════

/// Initialization-time knobs. Registered before `FarmGrid` so the grid
/// picks the dimensions up; changing it mid-session has no effect on an
/// existing grid.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmConfig {
    pub width: u32,
    pub height: u32,
    /// A crop is planted at growth 1 and turns harvest-ready on the day
    /// advance after reaching this stage.
    pub growth_stages_before_harvest: u8,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            growth_stages_before_harvest: GROWTH_STAGES,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// CALENDAR
// ═══════════════════════════════════════════════════════════════════════

/// The day counter. Strictly increasing, starts at 1, advanced only by the
/// calendar domain when an `AdvanceDayRequested` comes in.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    pub day: u32,
}

impl Default for Calendar {
    fn default() -> Self {
        Self { day: 1 }
    }
}

impl Calendar {
    pub fn advance(&mut self) {
        self.day += 1;
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYER
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Grid delta for one step. +y is up, matching world space.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Component, Debug, Clone, Default)]
pub struct Player;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INPUT
// ═══════════════════════════════════════════════════════════════════════

/// Rebindable keys. Arrow keys always work for movement in addition to
/// these; see `input::reset_and_read_input`.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub move_up: KeyCode,
    pub move_down: KeyCode,
    pub move_left: KeyCode,
    pub move_right: KeyCode,
    pub plant: KeyCode,
    pub advance_day: KeyCode,
    pub harvest: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_up: KeyCode::KeyW,
            move_down: KeyCode::KeyS,
            move_left: KeyCode::KeyA,
            move_right: KeyCode::KeyD,
            plant: KeyCode::KeyF,
            advance_day: KeyCode::KeyB,
            harvest: KeyCode::Space,
        }
    }
}

/// The frame's digested input. Rebuilt every frame in PreUpdate; gameplay
/// systems read this, never raw key codes.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerInput {
    /// One discrete step per key press.
    pub step: Option<Direction>,
    pub plant: bool,
    pub advance_day: bool,
    pub harvest: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — cross-domain communication
// ═══════════════════════════════════════════════════════════════════════

/// Plant a crop at the player's tile. Sent by the input adapter and the
/// action-bar buttons.
#[derive(Event, Debug, Clone)]
pub struct PlantRequested;

/// End the day: bump the calendar, grow every crop.
#[derive(Event, Debug, Clone)]
pub struct AdvanceDayRequested;

/// Harvest the crop at the player's tile.
#[derive(Event, Debug, Clone)]
pub struct HarvestRequested;

/// Sent by the calendar after the day counter has advanced. Carries the new
/// day number.
#[derive(Event, Debug, Clone)]
pub struct DayEndEvent {
    pub day: u32,
}

#[derive(Event, Debug, Clone)]
pub struct CropPlantedEvent {
    pub x: i32,
    pub y: i32,
}

#[derive(Event, Debug, Clone)]
pub struct CropHarvestedEvent {
    pub x: i32,
    pub y: i32,
}

// ═══════════════════════════════════════════════════════════════════════
// SESSION STATS
// ═══════════════════════════════════════════════════════════════════════

/// Running session tallies, shown in the HUD.
#[derive(Resource, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayStats {
    pub crops_planted: u32,
    pub crops_harvested: u32,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const TILE_SIZE: f32 = 40.0;
pub const MAP_WIDTH: u32 = 10;
pub const MAP_HEIGHT: u32 = 6;
/// Growth stages a crop passes through before it turns harvest-ready.
pub const GROWTH_STAGES: u8 = 3;

pub const SCREEN_WIDTH: f32 = 640.0;
pub const SCREEN_HEIGHT: f32 = 480.0;
