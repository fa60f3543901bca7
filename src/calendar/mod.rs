//! Calendar domain — the day counter.
//!
//! Days do not pass on their own: the player explicitly ends the day with
//! the Next Day button (or its key binding). When that happens the counter
//! advances and a `DayEndEvent` goes out for the other domains — farming
//! reacts by growing every planted crop.

use bevy::prelude::*;

use crate::shared::*;

pub struct CalendarPlugin;

impl Plugin for CalendarPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (trigger_advance_day, process_advance_day)
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}

/// Keyboard mirror of the Next Day button.
pub fn trigger_advance_day(
    player_input: Res<PlayerInput>,
    mut requests: EventWriter<AdvanceDayRequested>,
) {
    if player_input.advance_day {
        requests.send(AdvanceDayRequested);
    }
}

/// Advances the day counter once per request and announces the new day.
/// The counter only ever moves forward; nothing else writes to it.
pub fn process_advance_day(
    mut requests: EventReader<AdvanceDayRequested>,
    mut calendar: ResMut<Calendar>,
    mut day_end_writer: EventWriter<DayEndEvent>,
) {
    for _ in requests.read() {
        calendar.advance();
        info!("[Calendar] Day {} begins", calendar.day);
        day_end_writer.send(DayEndEvent { day: calendar.day });
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
