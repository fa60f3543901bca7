//! UI domain — HUD readouts and the action bar.
//!
//! Strictly presentational: reads shared state, writes nothing but the
//! same request events the keyboard produces.

mod buttons;
mod hud;

use bevy::prelude::*;
use crate::shared::*;

pub use buttons::FarmAction;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(GameState::Playing),
            (hud::spawn_hud, buttons::spawn_action_bar),
        )
        .add_systems(
            Update,
            (
                hud::update_day_display,
                hud::update_stats_display,
                buttons::action_button_interactions,
                buttons::action_button_visuals,
            )
                .run_if(in_state(GameState::Playing)),
        );
    }
}
