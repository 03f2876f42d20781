//! Plugin for slot row visuals.
//!
//! Registers the refresh system that restyles the row whenever the slip
//! or theme changes while the picking screen is up.

use bevy::prelude::*;

use crate::slip::board::Slip;
use crate::slip::sets::SlipSet;
use crate::states::AppState;
use crate::ui::components::SlipTheme;
use crate::ui::picking::ValidationState;
use crate::ui::slot_row::systems::refresh_slot_row;

pub struct SlotRowPlugin;

impl Plugin for SlotRowPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            refresh_slot_row.in_set(SlipSet::Feedback).run_if(
                in_state(AppState::Picking).and(
                    resource_changed::<Slip>
                        .or(resource_changed::<SlipTheme>)
                        .or(resource_exists::<ValidationState>
                            .and(resource_changed::<ValidationState>)),
                ),
            ),
        );
    }
}
