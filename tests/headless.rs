//! Headless integration tests for Sproutfield.
//!
//! These tests exercise the game's ECS logic without a window or GPU.
//! They use Bevy's `MinimalPlugins` to tick the app, register only the
//! pure-logic systems (skipping all rendering/UI), and verify that the
//! request-event plumbing drives the farm state the way the pure
//! functions promise.
//!
//! Run with: `cargo test --test headless`

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use sproutfield::calendar::{process_advance_day, trigger_advance_day};
use sproutfield::farming::growth::on_day_end;
use sproutfield::farming::harvest::handle_harvest_requested;
use sproutfield::farming::planting::handle_plant_requested;
use sproutfield::farming::track_play_stats;
use sproutfield::farming::view::{project_view, TileView};
use sproutfield::player::step_position;
use sproutfield::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Test App Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Builds a minimal Bevy app with all shared resources and events
/// registered but NO rendering, windowing, or asset loading. The gameplay
/// handler systems are wired in the same relative order the real plugins
/// use.
fn build_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);

    // ── Game State ───────────────────────────────────────────────────────
    app.init_state::<GameState>();

    // ── Shared Resources (mirrors main.rs) ───────────────────────────────
    app.init_resource::<FarmConfig>()
        .init_resource::<FarmGrid>()
        .init_resource::<Calendar>()
        .init_resource::<PlayStats>()
        .init_resource::<PlayerInput>();

    // ── Shared Events (mirrors main.rs) ──────────────────────────────────
    app.add_event::<PlantRequested>()
        .add_event::<AdvanceDayRequested>()
        .add_event::<HarvestRequested>()
        .add_event::<DayEndEvent>()
        .add_event::<CropPlantedEvent>()
        .add_event::<CropHarvestedEvent>();

    // ── Gameplay systems, no run_if gating ───────────────────────────────
    app.add_systems(
        Update,
        (
            trigger_advance_day,
            process_advance_day,
            handle_plant_requested,
            handle_harvest_requested,
            on_day_end,
            track_play_stats,
        )
            .chain(),
    );

    app
}

/// Spawns the player entity at the given cell, as the player plugin would.
fn spawn_player_at(app: &mut App, x: i32, y: i32) {
    app.world_mut().spawn((Player, GridPosition::new(x, y)));
}

fn player_position(app: &mut App) -> GridPosition {
    let mut query = app.world_mut().query_filtered::<&GridPosition, With<Player>>();
    *query.single(app.world())
}

fn tile_at(app: &App, x: i32, y: i32) -> Tile {
    app.world().resource::<FarmGrid>().get(x, y)
}

/// Request one day advance and tick twice so the DayEndEvent written by
/// the calendar is consumed by the farming handler.
fn advance_one_day(app: &mut App) {
    app.world_mut().send_event(AdvanceDayRequested);
    app.update();
    app.update();
}

// ─────────────────────────────────────────────────────────────────────────────
// Boot smoke
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_headless_boot_smoke() {
    let mut app = build_test_app();

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Playing);
    app.update();

    let state = app.world().resource::<State<GameState>>();
    assert_eq!(state.get(), &GameState::Playing);

    // Fresh session: all-grass grid, day 1.
    let grid = app.world().resource::<FarmGrid>();
    assert_eq!(grid.width(), MAP_WIDTH);
    assert_eq!(grid.height(), MAP_HEIGHT);
    assert!(grid.iter().all(|(_, tile)| tile == Tile::grass()));
    assert_eq!(app.world().resource::<Calendar>().day, 1);

    // Smoke: run a small frame budget without panic.
    for _ in 0..60 {
        app.update();
    }
    assert_eq!(app.world().resource::<Calendar>().day, 1, "Days only pass on request");
}

// ─────────────────────────────────────────────────────────────────────────────
// Planting
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_plant_request_plants_under_player() {
    let mut app = build_test_app();
    spawn_player_at(&mut app, 0, 0);

    app.world_mut().send_event(PlantRequested);
    app.update();

    assert_eq!(tile_at(&app, 0, 0), Tile::crop(1));

    // A second request on the same tile is absorbed.
    app.world_mut().send_event(PlantRequested);
    app.update();

    assert_eq!(tile_at(&app, 0, 0), Tile::crop(1), "Replanting must not stack growth");

    app.update(); // let the tally system drain the planted events
    let stats = app.world().resource::<PlayStats>();
    assert_eq!(stats.crops_planted, 1, "Only the successful plant counts");
}

#[test]
fn test_planting_leaves_other_cells_untouched() {
    let mut app = build_test_app();
    spawn_player_at(&mut app, 4, 3);

    let before = app.world().resource::<FarmGrid>().clone();
    app.world_mut().send_event(PlantRequested);
    app.update();

    let after = app.world().resource::<FarmGrid>();
    for ((x, y), tile) in before.iter() {
        if (x, y) == (4, 3) {
            continue;
        }
        assert_eq!(after.get(x, y), tile, "Cell ({}, {}) must be untouched", x, y);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Day advancement & growth
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_growth_progression_and_day_counter() {
    let mut app = build_test_app();
    spawn_player_at(&mut app, 0, 0);

    app.world_mut().send_event(PlantRequested);
    app.update();
    assert_eq!(tile_at(&app, 0, 0), Tile::crop(1));
    assert_eq!(app.world().resource::<Calendar>().day, 1);

    advance_one_day(&mut app);
    assert_eq!(tile_at(&app, 0, 0), Tile::crop(2));
    assert_eq!(app.world().resource::<Calendar>().day, 2);

    advance_one_day(&mut app);
    assert_eq!(tile_at(&app, 0, 0), Tile::crop(3));
    assert_eq!(app.world().resource::<Calendar>().day, 3);

    advance_one_day(&mut app);
    assert_eq!(tile_at(&app, 0, 0), Tile::ready_to_harvest());
    assert_eq!(app.world().resource::<Calendar>().day, 4);

    // One more day: the ripe crop just waits.
    advance_one_day(&mut app);
    assert_eq!(tile_at(&app, 0, 0), Tile::ready_to_harvest());
    assert_eq!(app.world().resource::<Calendar>().day, 5);
}

#[test]
fn test_advance_day_ignores_player_position() {
    let mut app = build_test_app();
    spawn_player_at(&mut app, 9, 5);

    // Seed a crop far from the player by mutating the grid directly.
    app.world_mut()
        .resource_mut::<FarmGrid>()
        .set(1, 1, Tile::crop(1));

    advance_one_day(&mut app);
    assert_eq!(tile_at(&app, 1, 1), Tile::crop(2));
}

// ─────────────────────────────────────────────────────────────────────────────
// Harvest
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_harvest_only_when_ready() {
    let mut app = build_test_app();
    spawn_player_at(&mut app, 2, 2);

    // Growing crop under the player: request is absorbed.
    app.world_mut()
        .resource_mut::<FarmGrid>()
        .set(2, 2, Tile::crop(2));
    app.world_mut().send_event(HarvestRequested);
    app.update();
    assert_eq!(tile_at(&app, 2, 2), Tile::crop(2));

    // Ripe crop: harvested back to grass.
    app.world_mut()
        .resource_mut::<FarmGrid>()
        .set(2, 2, Tile::ready_to_harvest());
    app.world_mut().send_event(HarvestRequested);
    app.update();
    assert_eq!(tile_at(&app, 2, 2), Tile::grass());

    // Harvesting the now-grass tile changes nothing.
    app.world_mut().send_event(HarvestRequested);
    app.update();
    assert_eq!(tile_at(&app, 2, 2), Tile::grass());

    app.update();
    let stats = app.world().resource::<PlayStats>();
    assert_eq!(stats.crops_harvested, 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Movement
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_movement_clamps_at_boundaries() {
    let mut app = build_test_app();
    app.add_systems(Update, sproutfield::player::player_movement);
    spawn_player_at(&mut app, 0, 0);

    // Pushing into the origin corner goes nowhere.
    for dir in [Direction::Down, Direction::Left] {
        app.world_mut().resource_mut::<PlayerInput>().step = Some(dir);
        app.update();
        assert_eq!(player_position(&mut app), GridPosition::new(0, 0));
    }

    // A legal step moves exactly one tile.
    app.world_mut().resource_mut::<PlayerInput>().step = Some(Direction::Right);
    app.update();
    assert_eq!(player_position(&mut app), GridPosition::new(1, 0));

    app.world_mut().resource_mut::<PlayerInput>().step = None;
    app.update();
    assert_eq!(player_position(&mut app), GridPosition::new(1, 0), "No input, no drift");
}

// ─────────────────────────────────────────────────────────────────────────────
// Full cycle: plant → grow → harvest, with the view along the way
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_full_growth_cycle_with_view() {
    let mut app = build_test_app();
    spawn_player_at(&mut app, 0, 0);

    app.world_mut().send_event(PlantRequested);
    app.update();

    for _ in 0..3 {
        advance_one_day(&mut app);
    }
    assert_eq!(tile_at(&app, 0, 0), Tile::ready_to_harvest());

    // The player stands on the ripe tile: the view shows the player
    // marker, not the harvest-ready marker.
    {
        let config = *app.world().resource::<FarmConfig>();
        let grid = app.world().resource::<FarmGrid>().clone();
        let view = project_view(&grid, GridPosition::new(0, 0));
        assert_eq!(view.get(0, 0), TileView::Player);
        // From one step away the same tile projects as harvest-ready.
        let aside = step_position(GridPosition::new(0, 0), Direction::Right, &config);
        let view = project_view(&grid, aside);
        assert_eq!(view.get(0, 0), TileView::ReadyToHarvest);
    }

    app.world_mut().send_event(HarvestRequested);
    app.update();
    assert_eq!(tile_at(&app, 0, 0), Tile::grass());

    app.update();
    let stats = app.world().resource::<PlayStats>();
    assert_eq!(stats.crops_planted, 1);
    assert_eq!(stats.crops_harvested, 1);
}
