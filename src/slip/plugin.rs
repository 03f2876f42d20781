use bevy::prelude::*;

use crate::slip::board::Slip;
use crate::slip::events::{
    PickPlacedEvent, PickRemovedEvent, PicksChangedEvent, SlipCompletedEvent, SlipFullEvent,
    ValidationFailedEvent,
};
use crate::slip::resources::SlipConfig;
use crate::slip::sets::SlipSet;
use crate::slip::systems::{log_picks, setup_slip, watch_completion};
use crate::states::AppState;

pub fn plugin(app: &mut App) {
    app.init_resource::<SlipConfig>()
        .init_resource::<Slip>()
        .add_message::<PicksChangedEvent>()
        .add_message::<PickPlacedEvent>()
        .add_message::<PickRemovedEvent>()
        .add_message::<SlipFullEvent>()
        .add_message::<SlipCompletedEvent>()
        .add_message::<ValidationFailedEvent>()
        .configure_sets(
            Update,
            (SlipSet::Input, SlipSet::Observe, SlipSet::Feedback).chain(),
        )
        .add_systems(OnEnter(AppState::Picking), setup_slip)
        .add_systems(
            Update,
            (log_picks, watch_completion)
                .in_set(SlipSet::Observe)
                .run_if(in_state(AppState::Picking)),
        );
}
