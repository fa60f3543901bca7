//! The action bar — three clickable buttons mirroring the key bindings.

use bevy::prelude::*;
use crate::shared::*;

/// Which core operation a button fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FarmAction {
    Plant,
    AdvanceDay,
    Harvest,
}

impl FarmAction {
    fn label(self) -> &'static str {
        match self {
            FarmAction::Plant => "Plant",
            FarmAction::AdvanceDay => "Next Day",
            FarmAction::Harvest => "Harvest",
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct ActionButton {
    pub action: FarmAction,
}

#[derive(Component)]
pub struct ActionBarRoot;

const BUTTON_NORMAL: Color = Color::srgb(0.16, 0.16, 0.16);
const BUTTON_HOVERED: Color = Color::srgb(0.26, 0.26, 0.26);
const BUTTON_PRESSED: Color = Color::srgb(0.36, 0.46, 0.36);

// ═══════════════════════════════════════════════════════════════════════
// SPAWN
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_action_bar(mut commands: Commands) {
    commands
        .spawn((
            ActionBarRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Px(64.0),
                position_type: PositionType::Absolute,
                bottom: Val::Px(0.0),
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                column_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.45)),
        ))
        .with_children(|bar| {
            for action in [FarmAction::Plant, FarmAction::AdvanceDay, FarmAction::Harvest] {
                bar.spawn((
                    Button,
                    ActionButton { action },
                    Node {
                        width: Val::Px(120.0),
                        height: Val::Px(40.0),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BackgroundColor(BUTTON_NORMAL),
                    BorderColor(Color::srgba(0.7, 0.7, 0.7, 0.7)),
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new(action.label()),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                        PickingBehavior::IGNORE,
                    ));
                });
            }
        });
}

// ═══════════════════════════════════════════════════════════════════════
// INTERACTION
// ═══════════════════════════════════════════════════════════════════════

/// Translate clicks 1:1 into the same request events the keyboard sends.
/// No game logic lives here.
pub fn action_button_interactions(
    query: Query<(&Interaction, &ActionButton), (Changed<Interaction>, With<Button>)>,
    mut plant_writer: EventWriter<PlantRequested>,
    mut advance_writer: EventWriter<AdvanceDayRequested>,
    mut harvest_writer: EventWriter<HarvestRequested>,
) {
    for (interaction, button) in query.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button.action {
            FarmAction::Plant => {
                plant_writer.send(PlantRequested);
            }
            FarmAction::AdvanceDay => {
                advance_writer.send(AdvanceDayRequested);
            }
            FarmAction::Harvest => {
                harvest_writer.send(HarvestRequested);
            }
        }
    }
}

/// Hover / pressed tint feedback.
pub fn action_button_visuals(
    mut query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<ActionButton>),
    >,
) {
    for (interaction, mut background) in query.iter_mut() {
        background.0 = match *interaction {
            Interaction::Pressed => BUTTON_PRESSED,
            Interaction::Hovered => BUTTON_HOVERED,
            Interaction::None => BUTTON_NORMAL,
        };
    }
}
