use bevy::prelude::*;
use crate::shared::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>()
            .init_resource::<PlayerInput>()
            .add_systems(PreUpdate, reset_and_read_input);
    }
}

/// The single point where hardware input becomes game actions.
///
/// Movement and actions are both edge-triggered (`just_pressed`): one grid
/// step, one plant, one harvest per physical key press. Holding a key does
/// nothing until it is released and pressed again.
fn reset_and_read_input(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut input: ResMut<PlayerInput>,
) {
    *input = PlayerInput::default();

    input.step = if keys.just_pressed(bindings.move_up) || keys.just_pressed(KeyCode::ArrowUp) {
        Some(Direction::Up)
    } else if keys.just_pressed(bindings.move_down) || keys.just_pressed(KeyCode::ArrowDown) {
        Some(Direction::Down)
    } else if keys.just_pressed(bindings.move_left) || keys.just_pressed(KeyCode::ArrowLeft) {
        Some(Direction::Left)
    } else if keys.just_pressed(bindings.move_right) || keys.just_pressed(KeyCode::ArrowRight) {
        Some(Direction::Right)
    } else {
        None
    };

    input.plant = keys.just_pressed(bindings.plant);
    input.advance_day = keys.just_pressed(bindings.advance_day);
    input.harvest = keys.just_pressed(bindings.harvest);
}
