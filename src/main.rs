mod shared;
mod input;
mod calendar;
mod player;
mod farming;
mod ui;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use shared::*;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Sproutfield".into(),
                        resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                        present_mode: PresentMode::AutoVsync,
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        // Game state
        .init_state::<GameState>()
        // Shared resources — FarmConfig must precede FarmGrid, which reads
        // its dimensions on construction
        .init_resource::<FarmConfig>()
        .init_resource::<FarmGrid>()
        .init_resource::<Calendar>()
        .init_resource::<PlayStats>()
        // Events
        .add_event::<PlantRequested>()
        .add_event::<AdvanceDayRequested>()
        .add_event::<HarvestRequested>()
        .add_event::<DayEndEvent>()
        .add_event::<CropPlantedEvent>()
        .add_event::<CropHarvestedEvent>()
        // Domain plugins
        .add_plugins(input::InputPlugin)
        .add_plugins(calendar::CalendarPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(farming::FarmingPlugin)
        .add_plugins(ui::UiPlugin)
        // Camera
        .add_systems(Startup, setup_camera)
        // Nothing to load from disk; hand over to gameplay on first tick
        .add_systems(Update, finish_loading.run_if(in_state(GameState::Loading)))
        .run();
}

/// 2D camera centred over the farm plot.
fn setup_camera(mut commands: Commands, config: Res<FarmConfig>) {
    let center_x = (config.width as f32 - 1.0) * TILE_SIZE / 2.0;
    let center_y = (config.height as f32 - 1.0) * TILE_SIZE / 2.0;
    commands.spawn((
        Camera2d,
        Transform::from_xyz(center_x, center_y, 999.0),
    ));
}

fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Playing);
}
