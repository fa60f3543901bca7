use bevy::prelude::*;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS — used to query and update HUD elements
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct HudRoot;

#[derive(Component)]
pub struct HudDayText;

#[derive(Component)]
pub struct HudStatsText;

// ═══════════════════════════════════════════════════════════════════════
// SPAWN HUD
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_hud(mut commands: Commands) {
    // Root container — full screen overlay, no interaction blocking
    commands
        .spawn((
            HudRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::FlexStart,
                ..default()
            },
            PickingBehavior::IGNORE,
        ))
        .with_children(|parent| {
            // ─── TOP BAR ───
            parent
                .spawn((
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(44.0),
                        flex_direction: FlexDirection::Row,
                        justify_content: JustifyContent::SpaceBetween,
                        align_items: AlignItems::Center,
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(4.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
                    PickingBehavior::IGNORE,
                ))
                .with_children(|top_bar| {
                    // Left: title
                    top_bar.spawn((
                        Text::new("SPROUTFIELD"),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 0.9, 0.5)),
                        PickingBehavior::IGNORE,
                    ));

                    // Center: day counter
                    top_bar.spawn((
                        HudDayText,
                        Text::new("Day 1"),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                        PickingBehavior::IGNORE,
                    ));

                    // Right: session tallies
                    top_bar.spawn((
                        HudStatsText,
                        Text::new("Planted 0 | Harvested 0"),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.8, 0.85, 1.0)),
                        PickingBehavior::IGNORE,
                    ));
                });

            // ─── CONTROLS HINT ───
            parent
                .spawn((
                    Node {
                        width: Val::Percent(100.0),
                        justify_content: JustifyContent::Center,
                        padding: UiRect::top(Val::Px(4.0)),
                        ..default()
                    },
                    PickingBehavior::IGNORE,
                ))
                .with_children(|hint| {
                    hint.spawn((
                        Text::new("Arrow keys / WASD to move. Plant on the tile you stand on."),
                        TextFont {
                            font_size: 13.0,
                            ..default()
                        },
                        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.65)),
                        PickingBehavior::IGNORE,
                    ));
                });
        });
}

// ═══════════════════════════════════════════════════════════════════════
// UPDATE SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

pub fn update_day_display(
    calendar: Res<Calendar>,
    mut query: Query<&mut Text, With<HudDayText>>,
) {
    if !calendar.is_changed() {
        return;
    }
    for mut text in query.iter_mut() {
        text.0 = format!("Day {}", calendar.day);
    }
}

pub fn update_stats_display(
    stats: Res<PlayStats>,
    mut query: Query<&mut Text, With<HudStatsText>>,
) {
    if !stats.is_changed() {
        return;
    }
    for mut text in query.iter_mut() {
        text.0 = format!(
            "Planted {} | Harvested {}",
            stats.crops_planted, stats.crops_harvested
        );
    }
}
